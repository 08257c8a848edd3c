//! Record Editor Component
//!
//! Create/edit form for any entity schema, with the shared status modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::components::field_control::FieldControl;
use crate::components::status_modal::StatusModal;
use crate::context::AppContext;
use crate::editor::EditorController;
use crate::schema::EntityKind;

/// Form page for one entity; `record_id` switches it to edit mode
#[component]
pub fn RecordEditor(
    entity: EntityKind,
    #[prop(optional_no_strip)] record_id: Option<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let schema = entity.schema();
    let editing = record_id.is_some();

    let controller = EditorController::new(schema, record_id, ctx.client(), ctx.navigator())
        .with_success_delay(ctx.config.success_delay);
    let (state, set_state) = signal(controller.snapshot());
    let controller = controller.on_change(move |next| {
        let _ = set_state.try_set(next.clone());
    });
    let controller = StoredValue::new_local(controller);

    // Load reference lists and the record once mounted
    Effect::new(move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.load().await;
        });
    });

    // Late responses must not touch a page that is gone
    on_cleanup(move || {
        controller.try_with_value(|controller| controller.detach());
    });

    let loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let submitting = Memo::new(move |_| state.with(|s| s.is_submitting()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));

    let on_field = Callback::new(move |(name, value): (&'static str, Value)| {
        let controller = controller.get_value();
        let refreshes = controller.edit(name, value);
        if !refreshes.is_empty() {
            spawn_local(async move {
                controller.refresh_all(refreshes).await;
            });
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    let heading = format!("{} {}", if editing { "Edit" } else { "New" }, schema.title);
    let submit_label = format!("{} {}", if editing { "Update" } else { "Create" }, schema.title);

    view! {
        <div class="record-editor">
            <div class="page-header">
                <h2>
                    <i class=schema.icon></i>
                    " "
                    {heading}
                </h2>
            </div>

            <Show when=move || error.with(Option::is_some)>
                <div class="alert alert-danger" role="alert">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="loading">
                        <div class="spinner" aria-hidden="true"></div>
                        <span>"Loading..."</span>
                    </div>
                }
            >
                <form class="record-form" novalidate=true on:submit=on_submit>
                    <Show when=move || state.with(|s| !s.issues().is_empty())>
                        <ul class="field-issues">
                            {move || state.with(|s| {
                                s.issues()
                                    .iter()
                                    .map(|issue| view! { <li>{issue.to_string()}</li> })
                                    .collect_view()
                            })}
                        </ul>
                    </Show>

                    <div class="form-grid">
                        {schema.fields.iter().map(|field| view! {
                            <Show when=move || state.with(|s| s.is_field_visible(field))>
                                <FieldControl field=field state=state on_change=on_field />
                            </Show>
                        }).collect_view()}
                    </div>

                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            disabled=move || submitting.get()
                            on:click=move |_| controller.with_value(|controller| controller.cancel())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {
                                let submit_label = submit_label.clone();
                                move || if submitting.get() { "Saving...".to_string() } else { submit_label.clone() }
                            }
                        </button>
                    </div>
                </form>
            </Show>

            <StatusModal
                phase=Signal::derive(move || state.with(|s| s.modal().cloned()))
                on_close=Callback::new(move |_| controller.with_value(|controller| controller.dismiss_modal()))
            />
        </div>
    }
}
