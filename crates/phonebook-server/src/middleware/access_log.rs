//! Per-request access log line
//!
//! `METHOD PATH STATUS SIZE - ELAPSED ms BODY`

use super::errors::error_body;
use axum::{
    body::{to_bytes, Body, Bytes, HttpBody},
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Largest request body buffered for logging; larger bodies are refused.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub async fn access_log(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("{} {} rejected: {}", method, path, e);
            return error_body(StatusCode::PAYLOAD_TOO_LARGE, "request body too large");
        }
    };
    let logged_body = serialize_body(&bytes);
    let request = Request::from_parts(parts, Body::from(bytes));

    let response = next.run(request).await;

    info!(
        "{} {} {} {} - {:.3} ms {}",
        method,
        path,
        response.status().as_u16(),
        response_size(&response),
        started.elapsed().as_secs_f64() * 1000.0,
        logged_body
    );

    response
}

/// Body size in bytes, `-` when it is not known up front (streamed files).
fn response_size(response: &Response) -> String {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| response.body().size_hint().exact().map(|n| n.to_string()))
        .unwrap_or_else(|| "-".to_string())
}

/// Compact JSON rendering of the request body, `{}` when there is none.
fn serialize_body(bytes: &Bytes) -> String {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_body() {
        assert_eq!(serialize_body(&Bytes::new()), "{}");
        assert_eq!(serialize_body(&Bytes::from_static(b"not json")), "{}");
        assert_eq!(
            serialize_body(&Bytes::from_static(
                b"{ \"name\": \"Arto Hellas\",\n  \"number\": \"040-123456\" }"
            )),
            r#"{"name":"Arto Hellas","number":"040-123456"}"#
        );
    }
}
