use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs every request with its outcome as a structured `tracing` event.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    if response.status().is_server_error() {
        tracing::warn!(method = %method, path = %path, status, "api_request");
    } else {
        tracing::info!(method = %method, path = %path, status, "api_request");
    }

    response
}
