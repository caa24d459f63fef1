use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 请求日志中间件
pub async fn request_logger(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();
    let response = next.run(req).await;
    tracing::info!(
        "{} {} - status: {}, latency: {}ms",
        method,
        uri.path(),
        response.status(),
        start.elapsed().as_millis()
    );
    response
}
