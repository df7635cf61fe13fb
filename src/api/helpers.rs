//! Shared helpers for WASM API operations
//!
//! Serialization across the JS boundary and field-name lookup, with errors
//! logged before they are handed back to JavaScript.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{EditorError, Result};
use crate::models::FieldName;

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = EditorError::Serialization(format!("{}: {}", error_context, e));
        log::error!("{}", err);
        err
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let err = EditorError::Serialization(format!("{}: {}", error_context, e));
        log::error!("{}", err);
        err
    })
}

/// Resolve a JS field key
pub fn field_from_key(key: &str) -> Result<FieldName> {
    FieldName::from_key(key).ok_or_else(|| {
        log::warn!("Unknown field key: {}", key);
        EditorError::UnknownField(key.to_string())
    })
}

/// Wrap a `JsValue` failure from a browser API
pub fn browser_error(context: &str, err: JsValue) -> EditorError {
    let err = EditorError::Browser(format!("{}: {:?}", context, err));
    log::error!("{}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_key() {
        assert_eq!(field_from_key("courseTitle"), Ok(FieldName::CourseTitle));
        assert_eq!(
            field_from_key("course_title"),
            Err(EditorError::UnknownField("course_title".to_string()))
        );
    }
}
