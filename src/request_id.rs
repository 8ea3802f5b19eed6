//! Request ID middleware: propagates or generates a unique ID per request.

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Ensures every request carries an `X-Request-Id` header.
///
/// An incoming id is preserved; otherwise a new UUID v4 is generated. The id
/// is stamped on both the request and the response, and the handler runs
/// inside a tracing span recording the id, method, and path, so every log
/// line for the request (error translation included) can be correlated.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    // An id that survived to_str() above always parses back into a header.
    let header_value = HeaderValue::from_str(&request_id).ok();
    if let Some(val) = &header_value {
        req.headers_mut().insert(X_REQUEST_ID.clone(), val.clone());
    }

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );
    let mut response = next.run(req).instrument(span).await;

    if let Some(val) = header_value {
        response.headers_mut().insert(X_REQUEST_ID.clone(), val);
    }

    response
}
