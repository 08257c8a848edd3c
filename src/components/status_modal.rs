//! Status Modal Component
//!
//! Overlay shown while a record is being saved and briefly after it succeeds.

use leptos::ev;
use leptos::prelude::*;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully";

/// What the modal is showing. `None` at the call site means hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalPhase {
    /// Request in flight; cannot be closed
    Busy,
    Done { message: String },
}

impl ModalPhase {
    pub fn done(message: impl Into<String>) -> Self {
        ModalPhase::Done { message: message.into() }
    }

    pub fn is_dismissible(&self) -> bool {
        matches!(self, ModalPhase::Done { .. })
    }

    /// Success text, falling back to the generic one when empty
    pub fn message(&self) -> Option<&str> {
        match self {
            ModalPhase::Busy => None,
            ModalPhase::Done { message } if message.trim().is_empty() => Some(DEFAULT_SUCCESS_MESSAGE),
            ModalPhase::Done { message } => Some(message),
        }
    }
}

/// Shared busy/success overlay
///
/// Close button, backdrop click and Escape all call `on_close`, and only
/// once the phase is `Done`.
#[component]
pub fn StatusModal(
    #[prop(into)] phase: Signal<Option<ModalPhase>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let try_dismiss = move || {
        let dismissible = phase.with_untracked(|phase| phase.as_ref().is_some_and(ModalPhase::is_dismissible));
        if dismissible {
            on_close.run(());
        }
    };

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            try_dismiss();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        {move || match phase.get() {
            None => view! { <div class="status-modal-hidden"></div> }.into_any(),
            Some(current) => {
                let busy = !current.is_dismissible();
                let message = current.message().unwrap_or_default().to_string();
                view! {
                    <div class="modal-backdrop" on:click=move |_| try_dismiss()>
                        <div
                            class="status-modal"
                            class:busy=busy
                            role="dialog"
                            aria-modal="true"
                            on:click=|ev| ev.stop_propagation()
                        >
                            {if busy {
                                view! {
                                    <div class="status-modal-body">
                                        <div class="spinner" aria-hidden="true"></div>
                                        <h3>"Processing..."</h3>
                                        <p>"Please wait while we save your data"</p>
                                    </div>
                                }.into_any()
                            } else {
                                view! {
                                    <div class="status-modal-body">
                                        <i class="fas fa-check-circle success-icon"></i>
                                        <h3>"Success!"</h3>
                                        <p>{message}</p>
                                        <button class="btn btn-primary" on:click=move |_| try_dismiss()>
                                            "Close"
                                        </button>
                                    </div>
                                }.into_any()
                            }}
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_done_is_dismissible() {
        assert!(!ModalPhase::Busy.is_dismissible());
        assert!(ModalPhase::done("Saved").is_dismissible());
    }

    #[test]
    fn test_message_falls_back() {
        assert_eq!(ModalPhase::Busy.message(), None);
        assert_eq!(ModalPhase::done("Lease renewal created successfully!").message(), Some("Lease renewal created successfully!"));
        assert_eq!(ModalPhase::done("").message(), Some(DEFAULT_SUCCESS_MESSAGE));
    }
}
