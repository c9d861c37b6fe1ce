//! The response envelope shared by all three handlers: a status code plus a
//! JSON body, either `{"message": ...}`, `{"error": ...}`, or a raw item.

use lambda_http::{Body, Error, Response};
use serde::Serialize;

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// 2xx envelope: `{"message": "..."}`.
pub fn message(status: u16, message: &str) -> Result<Response<Body>, Error> {
    json(status, &MessageBody { message })
}

/// 4xx/5xx envelope: `{"error": "..."}`.
pub fn error(status: u16, error: &str) -> Result<Response<Body>, Error> {
    json(status, &ErrorBody { error })
}

/// Serializes any body as JSON with the given status.
pub fn json<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?)
}
