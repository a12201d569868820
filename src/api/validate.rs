//! Query-parameter validation.

use crate::error::ValidationError;

/// Extract a required single-valued, non-empty query parameter.
///
/// Checks run in order and the first failure wins: the field must be
/// present, must appear exactly once, and must be non-empty. Pure function,
/// no I/O.
pub fn single_param(
    params: &[(String, String)],
    field: &'static str,
) -> Result<String, ValidationError> {
    let mut values = params.iter().filter(|(k, _)| k == field).map(|(_, v)| v);

    let first = values.next().ok_or(ValidationError::Missing(field))?;
    if values.next().is_some() {
        return Err(ValidationError::MultiValued(field));
    }
    if first.is_empty() {
        return Err(ValidationError::Empty(field));
    }

    Ok(first.clone())
}
