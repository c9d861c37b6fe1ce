use lambda_http::{Body, Error, Request, RequestExt, Response};

use crate::response;
use crate::store::ItemStore;

/// Deletes the item named by the `id` path parameter. The response follows
/// the store's own status: acknowledged deletes are 200, anything else 404.
/// DynamoDB acknowledges deletes of absent keys, so against it the 404 arm
/// stays dormant; it is kept to match the store-status contract.
pub async fn function_handler<S: ItemStore>(
    store: &S,
    event: Request,
) -> Result<Response<Body>, Error> {
    let params = event.path_parameters();
    let id = match params.first("id") {
        Some(id) if !id.is_empty() => id,
        _ => return response::error(400, "Missing resource ID"),
    };

    match store.delete(id).await {
        Ok(true) => response::message(200, "Item deleted successfully"),
        Ok(false) => response::error(404, "Item not found"),
        Err(err) => {
            tracing::error!("delete failed: {err}");
            response::error(500, &err.to_string())
        }
    }
}
