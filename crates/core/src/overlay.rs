//! Boundary validation for the destruction overlay.

use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Extract the `destroyed` flag from a request body.
///
/// Only a genuine JSON boolean is accepted. Strings such as `"true"`,
/// numbers and `null` are rejected, as is a missing field.
pub fn parse_destroyed_flag(body: &Value) -> CoreResult<bool> {
    match body.get("destroyed") {
        Some(Value::Bool(destroyed)) => Ok(*destroyed),
        _ => Err(CoreError::InvalidArgument(
            "The \"destroyed\" field must be a boolean value".to_string(),
        )),
    }
}
