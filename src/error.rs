//! Error types for the cover page editor
//!
//! None of these surface to the person filling in the form. They exist for
//! the JavaScript host: bad field names, malformed config objects, template
//! failures and a missing `window` when running outside a browser.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level editor error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// Field key does not name one of the cover page fields
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A value crossing the JS boundary could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A fit configuration would break the `[min_scale, 1]` scale range
    #[error("Invalid fit config: {0}")]
    InvalidConfig(String),

    /// The page template failed to compile or render
    #[error("Template error: {0}")]
    Template(String),

    /// A browser facility (window, document) is not available
    #[error("Browser API unavailable: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;

impl From<mustache::Error> for EditorError {
    fn from(e: mustache::Error) -> Self {
        EditorError::Template(e.to_string())
    }
}

impl From<EditorError> for JsValue {
    fn from(e: EditorError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
