//! Record Commands
//!
//! Fetch and save single resources (`<endpoint>` / `<endpoint><id>/`).

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

use super::ResourceClient;
use crate::error::ApiError;

pub fn item_path(endpoint: &str, id: &str) -> String {
    format!("{}{}/", endpoint, utf8_percent_encode(id, NON_ALPHANUMERIC))
}

pub async fn fetch_record(client: &dyn ResourceClient, endpoint: &str, id: &str) -> Result<Value, ApiError> {
    client.get(&item_path(endpoint, id)).await
}

/// POST to the collection when `id` is absent, PUT to the item otherwise
pub async fn save_record(
    client: &dyn ResourceClient,
    endpoint: &str,
    id: Option<&str>,
    payload: &Value,
) -> Result<Value, ApiError> {
    match id {
        Some(id) => client.put(&item_path(endpoint, id), payload).await,
        None => client.post(endpoint, payload).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::ScriptedClient;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_create_posts_to_collection() {
        let client = ScriptedClient::new().on_post("/maintenance/requests/", Ok(json!({"id": 1})));
        let saved = block_on(save_record(&client, "/maintenance/requests/", None, &json!({"priority": "high"})));
        assert_eq!(saved, Ok(json!({"id": 1})));
        assert_eq!(client.requests(), vec!["POST /maintenance/requests/".to_string()]);
    }

    #[test]
    fn test_update_puts_to_item() {
        let client = ScriptedClient::new().on_put("/maintenance/requests/8/", Ok(json!({"id": 8})));
        block_on(save_record(&client, "/maintenance/requests/", Some("8"), &json!({}))).unwrap();
        assert_eq!(client.requests(), vec!["PUT /maintenance/requests/8/".to_string()]);
    }
}
