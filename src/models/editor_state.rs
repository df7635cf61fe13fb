//! Editor state management
//!
//! This module contains the EditorState struct which represents the complete
//! state of the cover page editor: the form record, the viewport fitter and
//! the current render mode.
//!
//! Every mutation goes through a setter that reports what changed, and the
//! listeners registered on the state are told about it so the host can redraw.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::FieldName;
use super::form_record::FormRecord;
use crate::error::Result;
use crate::viewport::{FitConfig, PreviewTransform, RenderMode, ViewportFitter};

/// What a state mutation touched
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChangeEvent {
    Field { field: FieldName },
    Logo,
    Reset,
    Scale { scale: f64 },
    Mode { mode: RenderMode },
}

/// Callbacks notified after each state change
#[derive(Default)]
pub struct ChangeListeners {
    listeners: Vec<Box<dyn FnMut(&ChangeEvent)>>,
}

impl ChangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn notify(&mut self, event: &ChangeEvent) {
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

/// Complete editor state (WASM-owned source of truth)
pub struct EditorState {
    record: FormRecord,
    fitter: ViewportFitter,
    mode: RenderMode,
    listeners: ChangeListeners,
}

impl EditorState {
    /// Create a new editor state with default fields dated today
    pub fn new(config: FitConfig) -> Self {
        Self::with_record(FormRecord::default(), config)
    }

    pub fn with_record(record: FormRecord, config: FitConfig) -> Self {
        Self {
            record,
            fitter: ViewportFitter::new(config),
            mode: RenderMode::Screen,
            listeners: ChangeListeners::new(),
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn fitter(&self) -> &ViewportFitter {
        &self.fitter
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.listeners.subscribe(listener);
    }

    fn emit(&mut self, event: ChangeEvent) {
        log::debug!("State change: {:?}", event);
        self.listeners.notify(&event);
    }

    pub fn get_field(&self, field: FieldName) -> &str {
        self.record.get(field)
    }

    /// Set one field. Listeners only hear about actual changes.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> bool {
        let changed = self.record.set(field, value);
        if changed {
            self.emit(ChangeEvent::Field { field });
        }
        changed
    }

    /// Replace the logo with uploaded image bytes
    pub fn set_logo(&mut self, bytes: &[u8], mime: Option<&str>) -> bool {
        let changed = self.record.set_logo(bytes, mime);
        if changed {
            self.emit(ChangeEvent::Logo);
        }
        changed
    }

    /// Restore the default record, dated `date`
    pub fn reset(&mut self, date: NaiveDate) {
        self.record.reset(date);
        log::info!("Form reset to defaults");
        self.emit(ChangeEvent::Reset);
    }

    /// Observe a new viewport width; returns the resulting screen scale
    pub fn resize(&mut self, viewport_width: f64) -> f64 {
        if self.fitter.observe(viewport_width) {
            let scale = self.fitter.scale();
            self.emit(ChangeEvent::Scale { scale });
        }
        self.fitter.scale()
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        log::info!("Render mode: {:?}", mode);
        self.emit(ChangeEvent::Mode { mode });
    }

    /// Switch mode and hand the new transform to `apply`.
    ///
    /// If `apply` fails the previous mode is restored, so the state never
    /// claims a layout the page did not receive.
    pub fn try_set_mode(
        &mut self,
        mode: RenderMode,
        apply: impl FnOnce(&PreviewTransform) -> Result<()>,
    ) -> Result<()> {
        let previous = self.mode;
        self.set_mode(mode);
        if let Err(e) = apply(&self.transform()) {
            log::warn!("Could not apply {:?} layout, staying in {:?}: {}", mode, previous, e);
            self.set_mode(previous);
            return Err(e);
        }
        Ok(())
    }

    /// Transform for the current render mode
    pub fn transform(&self) -> PreviewTransform {
        self.fitter.transform(self.mode)
    }

    /// Scale actually applied to the page in the current mode
    pub fn effective_scale(&self) -> f64 {
        self.transform().scale
    }
}
