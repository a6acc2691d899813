//! The `{success, data, message, errors}` wrapper every endpoint answers with.

use serde::Deserialize;
use serde_json::{Map, Value};

use libdash_domain::error::{ApplicationError, FieldErrors, LibdashError, ValidationError};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub(crate) success: bool,
    pub(crate) data: Option<T>,
    pub(crate) message: Option<String>,
    pub(crate) errors: Option<Map<String, Value>>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, or turn a `success: false` answer into an error.
    ///
    /// Field errors win over the message; an empty `errors` object counts as
    /// no field errors at all.
    pub(crate) fn into_result(self) -> Result<Option<T>, LibdashError> {
        if self.success {
            return Ok(self.data);
        }
        let fields = self.errors.map(field_errors).unwrap_or_default();
        if fields.is_empty() {
            Err(ApplicationError {
                message: self.message,
            }
            .into())
        } else {
            Err(ValidationError::Fields(fields).into())
        }
    }
}

/// Field order follows the server's object order.
fn field_errors(errors: Map<String, Value>) -> FieldErrors {
    errors
        .into_iter()
        .map(|(field, value)| (field, messages(value)))
        .collect()
}

fn messages(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(message) => Some(message),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(message) => vec![message],
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}
