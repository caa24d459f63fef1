// 错误分类 - 仅用于运维日志, 不返回给调用方
use reqwest::Error;

/// Short label for an upstream transport error, used as a log field.
pub fn classify_upstream_error(error: &Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connection"
    } else if error.is_decode() {
        "decode"
    } else if error.is_body() {
        "body"
    } else if error.is_builder() || error.is_request() {
        "request"
    } else {
        "unknown"
    }
}
