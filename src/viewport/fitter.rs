//! Fit a fixed-size page into a variable-width viewport
//!
//! The page is scaled uniformly from its top edge. A CSS transform does not
//! change the box's layout size, so a scaled page still occupies its full
//! intrinsic height in the flow; the negative bottom margin removes the
//! `(1 - s) * H0` of blank space this leaves below it.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::error::{EditorError, Result};
use crate::models::PageSize;

/// Horizontal room reserved around the page on screen
pub const DEFAULT_PADDING_PX: f64 = 32.0;

/// Smallest scale at which the preview stays legible
pub const MIN_SCALE: f64 = 0.3;

/// Fitting parameters
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FitConfig {
    /// Intrinsic page width in CSS pixels
    pub document_width: f64,
    /// Intrinsic page height in CSS pixels
    pub document_height: f64,
    pub padding: f64,
    pub min_scale: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::for_page(&PageSize::A4)
    }
}

impl FitConfig {
    pub fn for_page(page: &PageSize) -> Self {
        Self {
            document_width: page.width_px(),
            document_height: page.height_px(),
            padding: DEFAULT_PADDING_PX,
            min_scale: MIN_SCALE,
        }
    }

    /// Reject configs that would scale outside `(0, 1]` or mirror the page
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("documentWidth", self.document_width),
            ("documentHeight", self.document_height),
            ("padding", self.padding),
            ("minScale", self.min_scale),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EditorError::InvalidConfig(format!("{} must be finite, got {}", name, value)));
        }
        if self.document_width <= 0.0 || self.document_height <= 0.0 {
            return Err(EditorError::InvalidConfig(format!(
                "document size must be positive, got {}x{}",
                self.document_width, self.document_height
            )));
        }
        if self.padding < 0.0 {
            return Err(EditorError::InvalidConfig(format!(
                "padding must not be negative, got {}",
                self.padding
            )));
        }
        if self.min_scale <= 0.0 || self.min_scale > 1.0 {
            return Err(EditorError::InvalidConfig(format!(
                "minScale must be in (0, 1], got {}",
                self.min_scale
            )));
        }
        Ok(())
    }
}

/// Compute the preview scale for a viewport width.
///
/// `s = max(min((V - padding) / W0, 1), floor)`. Widths that are zero,
/// negative or NaN all land on the floor.
pub fn compute_scale(viewport_width: f64, config: &FitConfig) -> f64 {
    if viewport_width.is_nan() || config.document_width <= 0.0 {
        return config.min_scale;
    }

    let fitted = (viewport_width - config.padding) / config.document_width;
    fitted.min(1.0).max(config.min_scale)
}

/// How the page is being rendered
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum RenderMode {
    /// Interactive preview, scaled to the viewport
    #[default]
    Screen = 0,
    /// Physical output; the printer defines the size
    Print = 1,
}

/// Transform to apply to the page element
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTransform {
    pub scale: f64,
    /// Bottom margin in px; zero or negative
    pub margin_bottom: f64,
    pub mode: RenderMode,
}

impl PreviewTransform {
    /// Unscaled, uncompensated: what the print pipeline sees
    pub const PRINT: PreviewTransform = PreviewTransform {
        scale: 1.0,
        margin_bottom: 0.0,
        mode: RenderMode::Print,
    };

    /// CSS properties to set on the page wrapper
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        match self.mode {
            RenderMode::Print => vec![
                ("transform", "none".to_string()),
                ("margin-bottom", "0px".to_string()),
            ],
            RenderMode::Screen => vec![
                ("transform", format!("scale({})", format_number(self.scale))),
                ("transform-origin", "top center".to_string()),
                ("margin-bottom", format!("{}px", format_number(self.margin_bottom))),
            ],
        }
    }

    /// Inline style for the page wrapper
    pub fn to_css(&self) -> String {
        self.css_properties()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trim float noise for CSS output (`0.5894206549118388` -> `0.589421`)
fn format_number(value: f64) -> String {
    let rounded = (value * 1_000_000.0).round() / 1_000_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Tracks the observed viewport width and the scale derived from it
#[derive(Clone, Debug)]
pub struct ViewportFitter {
    config: FitConfig,
    viewport_width: f64,
    scale: f64,
}

impl ViewportFitter {
    /// A fitter that has not yet seen a viewport starts at full size
    pub fn new(config: FitConfig) -> Self {
        Self {
            config,
            viewport_width: config.document_width + config.padding,
            scale: 1.0,
        }
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Record a new viewport width. Returns true if the scale changed.
    pub fn observe(&mut self, viewport_width: f64) -> bool {
        self.viewport_width = viewport_width;
        let scale = compute_scale(viewport_width, &self.config);
        let changed = scale != self.scale;
        self.scale = scale;
        changed
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Current screen scale
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Height compensation for the current scale, `-(1 - s) * H0`
    pub fn margin_bottom(&self) -> f64 {
        let gap = (1.0 - self.scale) * self.config.document_height;
        if gap == 0.0 {
            0.0
        } else {
            -gap
        }
    }

    pub fn transform(&self, mode: RenderMode) -> PreviewTransform {
        match mode {
            RenderMode::Print => PreviewTransform::PRINT,
            RenderMode::Screen => PreviewTransform {
                scale: self.scale,
                margin_bottom: self.margin_bottom(),
                mode,
            },
        }
    }
}

impl Default for ViewportFitter {
    fn default() -> Self {
        Self::new(FitConfig::default())
    }
}
