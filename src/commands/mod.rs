//! REST Command Wrappers
//!
//! Frontend bindings to the back-office API, organized by concern.

mod client;
mod records;
mod reference;
#[cfg(test)]
pub(crate) mod testing;

// Re-export all public items
pub use client::*;
pub use records::*;
pub use reference::*;
