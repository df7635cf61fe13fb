//! The `CoverPageEditor` handle exported to JavaScript
//!
//! All methods take `&self` and keep the state behind a `RefCell`, so a
//! subscriber may call back into the editor (typically `renderPage`) while
//! it is being notified. Events are queued during a mutation and delivered
//! once the state borrow has been released.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::dom::{self, WindowListener};
use super::helpers::{deserialize, field_from_key, serialize};
use crate::error::Result;
use crate::html_layout::CoverPageRenderer;
use crate::models::form_record::today;
use crate::models::{field_specs, ChangeEvent, EditorState, FormRecord, PageSize};
use crate::viewport::{FitConfig, PreviewTransform, RenderMode};

/// Preview elements plus the listeners keeping them fitted
struct MountedPreview {
    container: HtmlElement,
    page: HtmlElement,
    _listeners: Vec<WindowListener>,
}

struct Shared {
    state: RefCell<EditorState>,
    pending: Rc<RefCell<Vec<ChangeEvent>>>,
    subscribers: RefCell<Vec<js_sys::Function>>,
    renderer: CoverPageRenderer,
    mounted: RefCell<Option<MountedPreview>>,
}

impl Shared {
    fn new(config: FitConfig) -> Rc<Self> {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let mut state = EditorState::new(config);
        let queue = pending.clone();
        state.subscribe(move |event| queue.borrow_mut().push(event.clone()));

        Rc::new(Self {
            state: RefCell::new(state),
            pending,
            subscribers: RefCell::new(Vec::new()),
            renderer: CoverPageRenderer::new(PageSize::A4),
            mounted: RefCell::new(None),
        })
    }

    /// Deliver queued events to JS subscribers
    fn flush(&self) {
        let events = std::mem::take(&mut *self.pending.borrow_mut());
        if events.is_empty() {
            return;
        }
        let subscribers = self.subscribers.borrow().clone();

        for event in &events {
            let payload = match serialize(event, "Change event") {
                Ok(payload) => payload,
                Err(_) => continue,
            };
            for callback in &subscribers {
                if let Err(e) = callback.call1(&JsValue::NULL, &payload) {
                    log::warn!("Subscriber threw: {:?}", e);
                }
            }
        }
    }

    /// Push a transform to the mounted page, if any
    fn apply_transform(&self, transform: &PreviewTransform) -> Result<()> {
        if let Some(mounted) = self.mounted.borrow().as_ref() {
            dom::apply_transform(&mounted.page, transform)?;
        }
        Ok(())
    }

    fn apply_to_page(&self) -> Result<()> {
        let transform = self.state.borrow().transform();
        self.apply_transform(&transform)
    }

    fn refit(&self) -> Result<()> {
        let width = match self.mounted.borrow().as_ref() {
            Some(mounted) => dom::container_width(&mounted.container),
            None => return Ok(()),
        };
        self.state.borrow_mut().resize(width);
        self.apply_to_page()
    }

    /// Switch mode; the state rolls back if the page cannot take the layout
    fn set_mode(&self, mode: RenderMode) -> Result<()> {
        self.state
            .borrow_mut()
            .try_set_mode(mode, |transform| self.apply_transform(transform))
    }
}

/// Run a window listener body against the editor, if it is still alive
fn with_shared(weak: &Weak<Shared>, f: impl FnOnce(&Shared) -> Result<()>) {
    if let Some(shared) = weak.upgrade() {
        if let Err(e) = f(&shared) {
            log::warn!("Preview update failed: {}", e);
        }
        shared.flush();
    }
}

/// Cover page editor: form state, live preview fitting and printing
#[wasm_bindgen]
pub struct CoverPageEditor {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl CoverPageEditor {
    /// Create an editor with default fields and A4 fitting
    #[wasm_bindgen(constructor)]
    pub fn new() -> CoverPageEditor {
        log::info!("Cover page editor created");
        Self {
            shared: Shared::new(FitConfig::default()),
        }
    }

    /// Create an editor with a (partial) fit configuration object
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> std::result::Result<CoverPageEditor, JsValue> {
        let config: FitConfig = deserialize(config, "Fit config")?;
        if let Err(e) = config.validate() {
            log::error!("{}", e);
            return Err(e.into());
        }
        log::info!("Cover page editor created with {:?}", config);
        Ok(Self {
            shared: Shared::new(config),
        })
    }

    #[wasm_bindgen(js_name = getField)]
    pub fn get_field(&self, name: &str) -> std::result::Result<String, JsValue> {
        let field = field_from_key(name)?;
        Ok(self.shared.state.borrow().get_field(field).to_string())
    }

    /// Set a field by its JS key. Returns true if the value changed.
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&self, name: &str, value: String) -> std::result::Result<bool, JsValue> {
        let field = field_from_key(name)?;
        let changed = self.shared.state.borrow_mut().set_field(field, value);
        self.shared.flush();
        Ok(changed)
    }

    /// Replace the logo with the bytes of an uploaded image file
    #[wasm_bindgen(js_name = setLogo)]
    pub fn set_logo(&self, bytes: &[u8], mime: Option<String>) -> bool {
        let changed = self.shared.state.borrow_mut().set_logo(bytes, mime.as_deref());
        self.shared.flush();
        changed
    }

    /// Restore every field to its default, dated today (UTC)
    pub fn reset(&self) {
        self.shared.state.borrow_mut().reset(today());
        self.shared.flush();
    }

    /// The whole record as a plain object keyed by field
    pub fn record(&self) -> std::result::Result<JsValue, JsValue> {
        let record: FormRecord = self.shared.state.borrow().record().clone();
        Ok(serialize(&record, "Form record")?)
    }

    /// Descriptions of the form inputs, in display order
    #[wasm_bindgen(js_name = fieldSpecs)]
    pub fn field_specs(&self) -> std::result::Result<JsValue, JsValue> {
        Ok(serialize(&field_specs(), "Field specs")?)
    }

    /// Observe a new preview width and return the screen scale.
    ///
    /// The screen scale is tracked in print mode too, so this can differ
    /// from `scale()`, which stays at 1 until print mode ends. A `scale`
    /// event still fires when the screen scale changes.
    pub fn resize(&self, width: f64) -> std::result::Result<f64, JsValue> {
        let scale = self.shared.state.borrow_mut().resize(width);
        let applied = self.shared.apply_to_page();
        self.shared.flush();
        applied?;
        Ok(scale)
    }

    /// Scale applied in the current render mode
    pub fn scale(&self) -> f64 {
        self.shared.state.borrow().effective_scale()
    }

    #[wasm_bindgen(js_name = previewTransform)]
    pub fn preview_transform(&self) -> std::result::Result<JsValue, JsValue> {
        let transform = self.shared.state.borrow().transform();
        Ok(serialize(&transform, "Preview transform")?)
    }

    /// Inline style string for the page wrapper
    #[wasm_bindgen(js_name = previewStyle)]
    pub fn preview_style(&self) -> String {
        self.shared.state.borrow().transform().to_css()
    }

    /// HTML of the A4 page for the current record
    #[wasm_bindgen(js_name = renderPage)]
    pub fn render_page(&self) -> std::result::Result<String, JsValue> {
        let state = self.shared.state.borrow();
        Ok(self.shared.renderer.render(state.record())?)
    }

    /// Screen and print stylesheet for the page
    pub fn stylesheet(&self) -> std::result::Result<String, JsValue> {
        Ok(self.shared.renderer.stylesheet()?)
    }

    /// Call `callback(event)` after every state change
    pub fn subscribe(&self, callback: js_sys::Function) {
        self.shared.subscribers.borrow_mut().push(callback);
    }

    #[wasm_bindgen(js_name = isPrintMode)]
    pub fn is_print_mode(&self) -> bool {
        self.shared.state.borrow().mode() == RenderMode::Print
    }

    /// Switch between the scaled preview and the unscaled print layout
    #[wasm_bindgen(js_name = setPrintMode)]
    pub fn set_print_mode(&self, enabled: bool) -> std::result::Result<(), JsValue> {
        let mode = if enabled { RenderMode::Print } else { RenderMode::Screen };
        let applied = self.shared.set_mode(mode);
        self.shared.flush();
        Ok(applied?)
    }

    /// Fit `page` into `container` and keep it fitted.
    ///
    /// `page` is the wrapper around the `renderPage()` markup and should carry
    /// the `cover-preview` class. Re-fits on every window resize and switches
    /// to print layout around the browser's print dialog, however it was opened.
    pub fn mount(&self, container: HtmlElement, page: HtmlElement) -> std::result::Result<(), JsValue> {
        self.unmount();

        let weak = Rc::downgrade(&self.shared);
        let on_resize = {
            let weak = weak.clone();
            WindowListener::attach("resize", move || with_shared(&weak, Shared::refit))?
        };
        let before_print = {
            let weak = weak.clone();
            WindowListener::attach("beforeprint", move || {
                with_shared(&weak, |s| s.set_mode(RenderMode::Print))
            })?
        };
        let after_print = WindowListener::attach("afterprint", move || {
            with_shared(&weak, |s| s.set_mode(RenderMode::Screen))
        })?;

        *self.shared.mounted.borrow_mut() = Some(MountedPreview {
            container,
            page,
            _listeners: vec![on_resize, before_print, after_print],
        });
        log::info!("Preview mounted");

        let fitted = self.shared.refit();
        self.shared.flush();
        Ok(fitted?)
    }

    /// Detach the window listeners installed by `mount`
    pub fn unmount(&self) {
        if self.shared.mounted.borrow_mut().take().is_some() {
            log::info!("Preview unmounted");
        }
    }

    /// Open the browser print dialog with the page at physical size
    pub fn print(&self) -> std::result::Result<(), JsValue> {
        let window = dom::window()?;

        let entered = self.shared.set_mode(RenderMode::Print);
        self.shared.flush();
        entered?;

        let printed = window.print();

        let restored = self.shared.set_mode(RenderMode::Screen);
        self.shared.flush();

        printed?;
        Ok(restored?)
    }
}

impl Default for CoverPageEditor {
    fn default() -> Self {
        Self::new()
    }
}
