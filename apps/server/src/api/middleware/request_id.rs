//! Request ID middleware.
//!
//! Opens a span per HTTP request and assigns a server-side request id. The
//! id is echoed back in the `x-request-id` response header; when the client
//! sent its own id, that one is preserved in `x-correlation-id`.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

#[tracing::instrument(
    name = "http_request",
    skip_all,
    fields(
        http.method = %req.method(),
        http.route = %req.uri().path(),
        http.response.status_code = tracing::field::Empty,
        request_id = tracing::field::Empty,
    )
)]
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let current_span = Span::current();

    let client_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let server_id = Uuid::new_v4().to_string();
    current_span.record("request_id", &server_id);

    let mut response = next.run(req).await;
    current_span.record("http.response.status_code", response.status().as_u16());

    if let Ok(value) = HeaderValue::from_str(&server_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    if let Some(client_id) = client_id {
        if client_id != server_id {
            if let Ok(value) = HeaderValue::from_str(&client_id) {
                response.headers_mut().insert("x-correlation-id", value);
            }
        }
    }

    response
}
