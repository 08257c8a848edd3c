//! Routing
//!
//! Maps browser paths to entity forms and moves the browser between pages.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::schema::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Index of the available forms
    Home,
    /// `<list-route>/new` or `<list-route>/edit/<id>`
    Form {
        entity: EntityKind,
        record_id: Option<String>,
    },
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }

        for entity in EntityKind::ALL {
            let Some(rest) = trimmed.strip_prefix(entity.schema().list_route) else {
                continue;
            };
            if rest == "/new" {
                return Route::Form { entity, record_id: None };
            }
            if let Some(id) = rest.strip_prefix("/edit/") {
                if !id.is_empty() && !id.contains('/') {
                    let id = percent_decode_str(id).decode_utf8_lossy().into_owned();
                    return Route::Form { entity, record_id: Some(id) };
                }
            }
        }
        Route::NotFound(path.to_string())
    }
}

/// Browser path of a form
pub fn form_path(entity: EntityKind, record_id: Option<&str>) -> String {
    let list_route = entity.schema().list_route;
    match record_id {
        Some(id) => format!("{list_route}/edit/{}", utf8_percent_encode(id, NON_ALPHANUMERIC)),
        None => format!("{list_route}/new"),
    }
}

/// Leaves the current page for another route
pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Full page navigation through `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!(route, "no window to navigate with");
            return;
        };
        if let Err(err) = window.location().assign(route) {
            tracing::error!(route, error = ?err, "navigation failed");
        }
    }
}

/// Route for the page the browser is showing
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();
    Route::parse(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(
            Route::parse("/lease-renewal/new"),
            Route::Form { entity: EntityKind::LeaseRenewal, record_id: None }
        );
        assert_eq!(
            Route::parse("/maintenance/contracts/edit/14/"),
            Route::Form { entity: EntityKind::MaintenanceContract, record_id: Some("14".into()) }
        );
        assert_eq!(
            Route::parse("/receipt-vouchers/edit/RV%2F7"),
            Route::Form { entity: EntityKind::ReceiptVoucher, record_id: Some("RV/7".into()) }
        );
    }

    #[test]
    fn test_parse_other_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/lease-renewal"), Route::NotFound("/lease-renewal".into()));
        assert_eq!(Route::parse("/lease-renewal/edit/"), Route::NotFound("/lease-renewal/edit/".into()));
        assert_eq!(Route::parse("/maintenance/requests/edit/3/extra"), Route::NotFound("/maintenance/requests/edit/3/extra".into()));
    }

    #[test]
    fn test_form_path_encodes_reserved_ids() {
        let path = form_path(EntityKind::ReceiptVoucher, Some("RV/7"));
        assert_eq!(path, "/receipt-vouchers/edit/RV%2F7");
        assert_eq!(
            Route::parse(&path),
            Route::Form { entity: EntityKind::ReceiptVoucher, record_id: Some("RV/7".into()) }
        );
    }

    #[test]
    fn test_form_paths_round_trip() {
        for entity in EntityKind::ALL {
            assert_eq!(Route::parse(&form_path(entity, None)), Route::Form { entity, record_id: None });
            assert_eq!(
                Route::parse(&form_path(entity, Some("5"))),
                Route::Form { entity, record_id: Some("5".into()) }
            );
        }
    }
}
