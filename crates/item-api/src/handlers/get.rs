use lambda_http::{Body, Error, Request, RequestExt, Response};

use crate::response;
use crate::store::ItemStore;

/// Fetches the item named by the `id` path parameter and returns it as raw
/// JSON, or 404 when no such item exists.
pub async fn function_handler<S: ItemStore>(
    store: &S,
    event: Request,
) -> Result<Response<Body>, Error> {
    let params = event.path_parameters();
    let id = match params.first("id") {
        Some(id) if !id.is_empty() => id,
        _ => return response::error(400, "Missing resource ID"),
    };

    match store.get(id).await {
        Ok(Some(item)) => response::json(200, &item),
        Ok(None) => response::error(404, "Item not found"),
        Err(err) => {
            tracing::error!("get failed: {err}");
            response::error(500, &err.to_string())
        }
    }
}
