//! Record Editor
//!
//! Generic create/edit logic shared by every entity form.

mod controller;
mod draft;
mod state;

pub use controller::EditorController;
pub use state::EditorState;
