//! Field Control Component
//!
//! One labelled input, picked by the field's kind.

use leptos::prelude::*;
use serde_json::Value;

use crate::editor::EditorState;
use crate::schema::{FieldKind, FieldSpec};

/// Labelled input bound to one draft field
#[component]
pub fn FieldControl(
    field: &'static FieldSpec,
    state: ReadSignal<EditorState>,
    on_change: Callback<(&'static str, Value)>,
) -> impl IntoView {
    let name = field.name;
    let value = move || state.with(|s| s.draft().text(name));
    let disabled = move || state.with(|s| s.is_field_disabled(field));
    let invalid = move || state.with(|s| s.issues().iter().any(|issue| issue.field == name));
    let set_text = move |text: String| on_change.run((name, Value::String(text)));
    let placeholder = field.placeholder.unwrap_or_default();

    let control = match field.kind {
        FieldKind::Text => view! {
            <input
                type="text"
                id=name
                class="form-control"
                class:is-invalid=invalid
                placeholder=placeholder
                prop:value=value
                disabled=disabled
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }.into_any(),
        FieldKind::TextArea => view! {
            <textarea
                id=name
                class="form-control"
                class:is-invalid=invalid
                rows="3"
                placeholder=placeholder
                prop:value=value
                disabled=disabled
                on:input=move |ev| set_text(event_target_value(&ev))
            ></textarea>
        }.into_any(),
        FieldKind::Date => view! {
            <input
                type="date"
                id=name
                class="form-control"
                class:is-invalid=invalid
                prop:value=value
                disabled=disabled
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }.into_any(),
        FieldKind::Number { step } => view! {
            <input
                type="number"
                id=name
                class="form-control"
                class:is-invalid=invalid
                step=step
                placeholder=placeholder
                prop:value=value
                disabled=disabled
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }.into_any(),
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                id=name
                class="form-check-input"
                prop:checked=move || state.with(|s| s.draft().is_checked(name))
                disabled=disabled
                on:change=move |ev| on_change.run((name, Value::Bool(event_target_checked(&ev))))
            />
        }.into_any(),
        FieldKind::Choice(choices) => view! {
            <select
                id=name
                class="form-control"
                class:is-invalid=invalid
                disabled=disabled
                on:change=move |ev| set_text(event_target_value(&ev))
            >
                {choices.iter().map(|&(choice, label)| view! {
                    <option value=choice prop:selected=move || value() == choice>{label}</option>
                }).collect_view()}
            </select>
        }.into_any(),
        FieldKind::Reference(kind) => view! {
            <select
                id=name
                class="form-control"
                class:is-invalid=invalid
                disabled=disabled
                on:change=move |ev| set_text(event_target_value(&ev))
            >
                <option value="" prop:selected=move || value().is_empty()>{kind.placeholder()}</option>
                {move || {
                    let options = state.with(|s| s.options(kind).to_vec());
                    options.into_iter().map(|option| {
                        let current = option.value.clone();
                        view! {
                            <option value=option.value prop:selected=move || value() == current>
                                {option.label}
                            </option>
                        }
                    }).collect_view()
                }}
            </select>
        }.into_any(),
    };

    let required = field.required.then_some(" *");
    let group_class = match (field.kind, field.wide) {
        (FieldKind::Checkbox, _) => "form-group form-check",
        (_, true) => "form-group full-width",
        _ => "form-group",
    };

    if matches!(field.kind, FieldKind::Checkbox) {
        view! {
            <div class=group_class>
                {control}
                <label class="form-check-label" for=name>{field.label}</label>
            </div>
        }.into_any()
    } else {
        view! {
            <div class=group_class>
                <label for=name>{field.label}{required}</label>
                {control}
            </div>
        }.into_any()
    }
}
