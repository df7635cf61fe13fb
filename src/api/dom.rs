//! DOM plumbing for the preview
//!
//! Applies preview transforms to the page element and manages the window
//! event listeners (`resize`, `beforeprint`, `afterprint`) that drive it.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use super::helpers::browser_error;
use crate::error::{EditorError, Result};
use crate::viewport::PreviewTransform;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| EditorError::Browser("no global window".to_string()))
}

/// Write the transform into the element's inline style
pub fn apply_transform(element: &HtmlElement, transform: &PreviewTransform) -> Result<()> {
    let style = element.style();
    for (name, value) in transform.css_properties() {
        style
            .set_property(name, &value)
            .map_err(|e| browser_error(name, e))?;
    }
    Ok(())
}

/// Width available to the preview
pub fn container_width(container: &HtmlElement) -> f64 {
    f64::from(container.offset_width())
}

/// A window event listener that is removed when dropped
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn attach(event: &'static str, handler: impl FnMut() + 'static) -> Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| browser_error(event, e))?;
        log::debug!("Attached window '{}' listener", event);
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            let removed = window.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
            if removed.is_err() {
                log::warn!("Failed to detach window '{}' listener", self.event);
            }
        }
    }
}
