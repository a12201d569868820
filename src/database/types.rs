//! Statement, value, and result-set types plus the libsql HTTP wire format.

use serde::{Deserialize, Serialize};

/// A single SQL value in the libsql JSON encoding.
///
/// Integers travel as decimal strings and blobs as base64, matching the
/// server's tagged representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Value {
    /// SQL NULL.
    Null,
    /// 64-bit integer, encoded as a decimal string.
    Integer {
        /// Decimal string representation.
        value: String,
    },
    /// 64-bit float.
    Float {
        /// The float value.
        value: f64,
    },
    /// UTF-8 text.
    Text {
        /// The text value.
        value: String,
    },
    /// Binary blob, base64-encoded.
    Blob {
        /// Base64-encoded bytes.
        base64: String,
    },
}

impl Value {
    /// Text value constructor.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text { value: value.into() }
    }

    /// Integer value constructor.
    pub fn integer(value: i64) -> Self {
        Self::Integer {
            value: value.to_string(),
        }
    }
}

/// A parameterized SQL statement: fixed SQL text plus positional arguments.
///
/// Arguments are always carried out-of-band in `args`; they are never
/// interpolated into `sql`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    /// SQL text with `?` placeholders.
    pub sql: String,
    /// Positional arguments bound to the placeholders, in order.
    pub args: Vec<Value>,
}

impl Statement {
    /// Create a statement with no arguments.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    /// Append a positional argument.
    pub fn bind(mut self, value: Value) -> Self {
        self.args.push(value);
        self
    }
}

/// The structured result of executing a statement.
///
/// Serializes to the same camelCase JSON shape the upstream libsql client
/// produces, since read handlers return it to callers verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSet {
    /// Column names, in select order.
    pub columns: Vec<String>,
    /// Declared column types (empty string when undeclared).
    pub column_types: Vec<String>,
    /// Row values, one inner vector per row.
    pub rows: Vec<Vec<Value>>,
    /// Number of rows changed by the statement.
    pub rows_affected: u64,
    /// Rowid of the last insert, when applicable.
    pub last_insert_rowid: Option<String>,
}

// === Wire format: Hrana v2 pipeline over HTTP ===

/// Request body for `POST /v2/pipeline`.
#[derive(Debug, Serialize)]
pub(crate) struct PipelineRequest<'a> {
    pub requests: Vec<PipelineCall<'a>>,
}

/// One call within a pipeline request.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum PipelineCall<'a> {
    Execute { stmt: &'a Statement },
    Close,
}

/// Response body for `POST /v2/pipeline`.
#[derive(Debug, Deserialize)]
pub(crate) struct PipelineResponse {
    pub results: Vec<PipelineResult>,
}

/// Per-call outcome within a pipeline response.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum PipelineResult {
    Ok { response: PipelineOk },
    Error { error: PipelineError },
}

/// Successful per-call response payload.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum PipelineOk {
    Execute { result: ExecuteResult },
    Close,
}

/// Raw execute result as returned by the server.
#[derive(Debug, Deserialize)]
pub(crate) struct ExecuteResult {
    #[serde(default)]
    pub cols: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
    #[serde(default)]
    pub affected_row_count: u64,
    #[serde(default)]
    pub last_insert_rowid: Option<String>,
}

/// Column descriptor in an execute result.
#[derive(Debug, Deserialize)]
pub(crate) struct Column {
    pub name: Option<String>,
    pub decltype: Option<String>,
}

/// Error payload attached to a failed pipeline call.
#[derive(Debug, Deserialize)]
pub(crate) struct PipelineError {
    pub message: String,
}

impl From<ExecuteResult> for RowSet {
    fn from(result: ExecuteResult) -> Self {
        let columns = result
            .cols
            .iter()
            .map(|c| c.name.clone().unwrap_or_default())
            .collect();
        let column_types = result
            .cols
            .into_iter()
            .map(|c| c.decltype.unwrap_or_default())
            .collect();

        Self {
            columns,
            column_types,
            rows: result.rows,
            rows_affected: result.affected_row_count,
            last_insert_rowid: result.last_insert_rowid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn statement_serializes_args_out_of_band() {
        let stmt = Statement::new("insert into users(email, name) values(?, ?)")
            .bind(Value::text("A"))
            .bind(Value::text("a@b.com"));

        let json = serde_json::to_value(&stmt).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sql": "insert into users(email, name) values(?, ?)",
                "args": [
                    {"type": "text", "value": "A"},
                    {"type": "text", "value": "a@b.com"},
                ],
            })
        );
    }

    #[test]
    fn value_wire_encoding() {
        assert_eq!(
            serde_json::to_value(Value::Null).unwrap(),
            serde_json::json!({"type": "null"})
        );
        assert_eq!(
            serde_json::to_value(Value::integer(42)).unwrap(),
            serde_json::json!({"type": "integer", "value": "42"})
        );
    }

    #[test]
    fn pipeline_response_deserializes() {
        let raw = serde_json::json!({
            "baton": null,
            "base_url": null,
            "results": [
                {
                    "type": "ok",
                    "response": {
                        "type": "execute",
                        "result": {
                            "cols": [
                                {"name": "id", "decltype": "INTEGER"},
                                {"name": "email", "decltype": "TEXT"},
                            ],
                            "rows": [
                                [
                                    {"type": "integer", "value": "1"},
                                    {"type": "text", "value": "a@b.com"},
                                ],
                            ],
                            "affected_row_count": 0,
                            "last_insert_rowid": null,
                        },
                    },
                },
                {"type": "ok", "response": {"type": "close"}},
            ],
        });

        let parsed: PipelineResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.results.len(), 2);

        let PipelineResult::Ok {
            response: PipelineOk::Execute { result },
        } = &parsed.results[0]
        else {
            panic!("expected execute result");
        };
        assert_eq!(result.cols.len(), 2);
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    fn pipeline_error_deserializes() {
        let raw = serde_json::json!({
            "results": [
                {"type": "error", "error": {"message": "no such table: users"}},
            ],
        });

        let parsed: PipelineResponse = serde_json::from_value(raw).unwrap();
        let PipelineResult::Error { error } = &parsed.results[0] else {
            panic!("expected error result");
        };
        assert_eq!(error.message, "no such table: users");
    }

    #[test]
    fn rowset_serializes_camel_case() {
        let rowset = RowSet {
            columns: vec!["id".to_string()],
            column_types: vec!["INTEGER".to_string()],
            rows: vec![vec![Value::integer(1)]],
            rows_affected: 0,
            last_insert_rowid: None,
        };

        let json = serde_json::to_value(&rowset).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "columns": ["id"],
                "columnTypes": ["INTEGER"],
                "rows": [[{"type": "integer", "value": "1"}]],
                "rowsAffected": 0,
                "lastInsertRowid": null,
            })
        );
    }

    #[test]
    fn execute_result_converts_to_rowset() {
        let result = ExecuteResult {
            cols: vec![
                Column {
                    name: Some("email".to_string()),
                    decltype: Some("TEXT".to_string()),
                },
                Column {
                    name: None,
                    decltype: None,
                },
            ],
            rows: vec![],
            affected_row_count: 1,
            last_insert_rowid: Some("7".to_string()),
        };

        let rowset = RowSet::from(result);
        assert_eq!(rowset.columns, vec!["email".to_string(), String::new()]);
        assert_eq!(rowset.column_types, vec!["TEXT".to_string(), String::new()]);
        assert_eq!(rowset.rows_affected, 1);
        assert_eq!(rowset.last_insert_rowid, Some("7".to_string()));
    }
}
