//! Cover Page Builder WASM Module
//!
//! Holds the fields of an academic assignment cover page, renders the A4
//! page as HTML, fits it into the preview pane and switches it to physical
//! size for the browser's print / save-as-PDF pipeline.

pub mod api;
pub mod error;
pub mod html_layout;
pub mod logo;
pub mod models;
pub mod viewport;

// Re-export commonly used types
pub use api::CoverPageEditor;
pub use error::{EditorError, Result};
pub use models::*;
pub use viewport::{compute_scale, FitConfig, PreviewTransform, RenderMode, ViewportFitter};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }

    log::info!("Cover Page Builder WASM module initialized");
}
