use lambda_http::{Body, Error, Request, Response};

use crate::item::parse_item;
use crate::response;
use crate::store::ItemStore;

/// Decodes the request body as a JSON object, checks that the configured
/// primary-key attribute is present, and upserts the whole object as one
/// item. An existing item with the same key is silently overwritten.
pub async fn function_handler<S: ItemStore>(
    store: &S,
    primary_key: &str,
    event: Request,
) -> Result<Response<Body>, Error> {
    let item = match parse_item(event.body().as_ref()) {
        Some(item) => item,
        None => return response::error(400, "Invalid JSON payload"),
    };

    if !item.contains_key(primary_key) {
        return response::error(400, &format!("Missing primary key: {primary_key}"));
    }

    match store.put(&item).await {
        Ok(()) => response::message(200, "Item saved successfully"),
        Err(err) => {
            tracing::error!("put failed: {err}");
            response::error(500, &err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ItemStore as _, MemoryStore};
    use serde_json::json;

    fn post(body: &str) -> Request {
        lambda_http::http::Request::builder()
            .method("POST")
            .uri("/items")
            .body(Body::Text(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn saves_a_well_formed_item() {
        let store = MemoryStore::new("id");
        let event = post(r#"{"id": "42", "name": "widget"}"#);

        let response = function_handler(&store, "id", event).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.body().as_ref(),
            br#"{"message":"Item saved successfully"}"#
        );
        assert_eq!(
            store.get("42").await.unwrap().unwrap().get("name"),
            Some(&json!("widget"))
        );
    }

    #[tokio::test]
    async fn rejects_a_malformed_body() {
        let store = MemoryStore::new("id");
        let event = post("not json at all");

        let response = function_handler(&store, "id", event).await.unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(
            response.body().as_ref(),
            br#"{"error":"Invalid JSON payload"}"#
        );
    }

    #[tokio::test]
    async fn rejects_an_empty_body() {
        let store = MemoryStore::new("id");
        let event = lambda_http::http::Request::builder()
            .method("POST")
            .uri("/items")
            .body(Body::Empty)
            .unwrap();

        let response = function_handler(&store, "id", event).await.unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(
            response.body().as_ref(),
            br#"{"error":"Invalid JSON payload"}"#
        );
    }

    #[tokio::test]
    async fn rejects_a_payload_without_the_primary_key() {
        let store = MemoryStore::new("itemId");
        let event = post(r#"{"name": "widget"}"#);

        let response = function_handler(&store, "itemId", event).await.unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(
            response.body().as_ref(),
            br#"{"error":"Missing primary key: itemId"}"#
        );
    }
}
