//! Request IDs
//!
//! Clients may pass their own `x-request-id`; it is echoed back when it is short printable
//! ASCII, otherwise a fresh v7 UUID is used.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::debug;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 64;

pub(super) fn resolve_request_id(incoming: Option<String>) -> String {
    match incoming.as_deref().map(str::trim) {
        Some(id) if is_acceptable(id) => id.to_string(),
        Some(id) => {
            debug!(len = id.len(), "ignoring unusable incoming request id");

            Uuid::now_v7().to_string()
        }
        None => Uuid::now_v7().to_string(),
    }
}

fn is_acceptable(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id.bytes().all(|byte| byte.is_ascii_graphic())
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
}

pub(super) fn status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_printable_ids() {
        assert_eq!(resolve_request_id(Some(" req-42 ".to_string())), "req-42");
    }

    #[test]
    fn replaces_blank_long_or_spaced_ids() {
        for incoming in ["   ", "has space", &"x".repeat(MAX_REQUEST_ID_LEN + 1)] {
            let resolved = resolve_request_id(Some(incoming.to_string()));

            assert!(
                Uuid::parse_str(&resolved).is_ok(),
                "{incoming:?} should be replaced by a uuid"
            );
        }
    }
}
