//! UI Components
//!
//! Reusable Leptos components.

mod field_control;
mod record_editor;
mod status_modal;

pub use record_editor::RecordEditor;
pub use status_modal::ModalPhase;
