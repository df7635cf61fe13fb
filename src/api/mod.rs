//! Cover Page Builder WASM API
//!
//! This module provides the JavaScript-facing API for the cover page editor.
//!
//! # Module Structure
//!
//! - `helpers`: serialization and field lookup shared by the API functions
//! - `dom`: inline-style application and window listeners for the preview
//! - `editor`: the `CoverPageEditor` handle

pub mod dom;
pub mod editor;
pub mod helpers;

pub use editor::CoverPageEditor;
