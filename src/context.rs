//! Application Context
//!
//! Shared settings provided via Leptos Context API.

use std::rc::Rc;

use crate::commands::{HttpClient, ResourceClient};
use crate::config::AppConfig;
use crate::routes::{BrowserNavigator, Navigator};

/// App-wide configuration provided via context
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Client for the back-office API, authorized with the stored token
    pub fn client(&self) -> Rc<dyn ResourceClient> {
        Rc::new(HttpClient::new(&self.config))
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        Rc::new(BrowserNavigator)
    }
}
