//! HTML Layout
//!
//! This module renders the cover page as HTML for the live preview and the
//! browser print pipeline. The host page inserts the markup; no layout
//! measurements are needed from JavaScript.

pub mod document;
pub mod templates;

pub use document::{CoverPageContext, CoverPageRenderer, InfoRow};
pub use templates::{render_template, PageTemplate};
