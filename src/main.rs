//! Back-Office Forms Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod editor;
mod error;
mod models;
mod routes;
mod schema;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    console_logger::init(config.log_level);
    tracing::info!(api = %config.api_base_url, authenticated = config.auth_token.is_some(), "starting back-office forms");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
