//! JSON API over the loader.
//!
//! Functions take menu text and return JSON strings, so callers in other
//! processes or languages need nothing beyond a JSON parser.

use serde::Serialize;

use crate::parser::parse_string;
use crate::types::{Diagnostic, MenuDocument};

#[derive(Debug, Serialize)]
pub struct JsonResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Diagnostic>,
}

/// Load menu text and return `{ success, data }` with the menu document, or
/// `{ success: false, error }` with a diagnostic for the first failure.
pub fn load_to_json(content: &str, filename: &str) -> String {
    let result = match parse_string(content) {
        Ok(menu) => JsonResult {
            success: true,
            data: Some(MenuDocument::from(&menu)),
            error: None,
        },
        Err(err) => JsonResult {
            success: false,
            data: None,
            error: Some(Diagnostic::from_error(&err, filename)),
        },
    };
    to_json(&result)
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":{{"message":"serialization error: {e}"}}}}"#)
    })
}
