//! Viewport fitting
//!
//! Computes the uniform scale that fits the A4 page into the preview pane,
//! and the unscaled transform used when the page goes to the printer.

pub mod fitter;

pub use fitter::{compute_scale, FitConfig, PreviewTransform, RenderMode, ViewportFitter};
pub use fitter::{DEFAULT_PADDING_PX, MIN_SCALE};
