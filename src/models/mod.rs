//! Models module for the Cover Page Builder
//!
//! This module contains the data models: the page geometry, the field
//! registry, the form record and the editor state that owns them.

pub mod editor_state;
pub mod fields;
pub mod form_record;
pub mod page;

// Re-export commonly used types
pub use editor_state::{ChangeEvent, ChangeListeners, EditorState};
pub use fields::{field_specs, FieldName, FieldSpec, FormSection, InputKind};
pub use form_record::FormRecord;
pub use page::PageSize;
