//! Back-Office Forms App
//!
//! Picks the form for the current browser path.

use leptos::prelude::*;

use crate::components::RecordEditor;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::routes::{current_route, form_path, Route};
use crate::schema::EntityKind;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(config));

    let route = current_route();
    tracing::debug!(?route, "resolved route");

    view! {
        <div class="app-layout">
            <main class="main-content">
                {match route {
                    Route::Home => view! { <FormIndex /> }.into_any(),
                    Route::Form { entity, record_id } => view! {
                        <RecordEditor entity=entity record_id=record_id />
                    }.into_any(),
                    Route::NotFound(path) => view! {
                        <div class="not-found">
                            <h2>"Page not found"</h2>
                            <p>{path}</p>
                            <a href="/">"Back to forms"</a>
                        </div>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Links to the create form of every entity
#[component]
fn FormIndex() -> impl IntoView {
    view! {
        <div class="form-index">
            <h1>"Back Office"</h1>
            <ul>
                {EntityKind::ALL.into_iter().map(|entity| {
                    let schema = entity.schema();
                    view! {
                        <li>
                            <a href=form_path(entity, None)>
                                <i class=schema.icon></i>
                                " New "
                                {schema.title}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
