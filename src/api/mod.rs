//! API handlers for the Digital Library REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use std::time::Instant;

use axum::{
    extract::Request,
    http::{header::USER_AGENT, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Request-tracking middleware.
///
/// Logs the client user-agent for every request and attaches an
/// `X-Process-Time` header carrying the processing duration in seconds.
pub async fn track_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let start = Instant::now();
    let mut response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    tracing::info!(
        "{} {} from \"{}\" -> {} in {:.6}s",
        method,
        path,
        user_agent,
        response.status(),
        elapsed
    );

    if let Ok(value) = HeaderValue::from_str(&format!("{:.6}", elapsed)) {
        response.headers_mut().insert("X-Process-Time", value);
    }

    response
}
