//! Reference List Commands
//!
//! Fetch lookup lists and turn them into select options.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::ResourceClient;
use crate::error::ApiError;
use crate::models::{Account, Lease, Property, ReferenceKind, RelatedParty, SelectOption, Unit};

/// List endpoints answer with either a bare array or a paginated envelope
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Paged {
        #[serde(default = "Vec::new")]
        results: Vec<T>,
    },
}

pub fn decode_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    match serde_json::from_value::<ListBody<T>>(body) {
        Ok(ListBody::Bare(items)) | Ok(ListBody::Paged { results: items }) => Ok(items),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

pub async fn fetch_list<T: DeserializeOwned>(client: &dyn ResourceClient, path: &str) -> Result<Vec<T>, ApiError> {
    let body = client.get(path).await?;
    decode_list(body)
}

/// Fetch one reference list as select options.
///
/// `parent` scopes dependent lists (units of a property).
pub async fn fetch_options(
    client: &dyn ResourceClient,
    kind: ReferenceKind,
    parent: Option<&str>,
) -> Result<Vec<SelectOption>, ApiError> {
    let path = kind.path(parent);
    let options = match kind {
        ReferenceKind::ActiveLeases => fetch_list::<Lease>(client, &path)
            .await?
            .into_iter()
            .filter(|lease| lease.status == "active")
            .map(SelectOption::from)
            .collect(),
        ReferenceKind::Properties => into_options(fetch_list::<Property>(client, &path).await?),
        ReferenceKind::Units => into_options(fetch_list::<Unit>(client, &path).await?),
        ReferenceKind::Accounts => into_options(fetch_list::<Account>(client, &path).await?),
        ReferenceKind::Tenants => fetch_list::<RelatedParty>(client, &path)
            .await?
            .into_iter()
            .map(|party| SelectOption::new(party.id, party.full_name()))
            .collect(),
        ReferenceKind::Vendors => fetch_list::<RelatedParty>(client, &path)
            .await?
            .into_iter()
            .map(|party| SelectOption::new(party.id, party.vendor_label()))
            .collect(),
    };
    Ok(options)
}

fn into_options<T: Into<SelectOption>>(items: Vec<T>) -> Vec<SelectOption> {
    items.into_iter().map(Into::into).collect()
}
