use super::*;

#[test]
fn http_error_surfaces_detail_verbatim() {
    let err = ApiError::Http {
        status: 500,
        detail: Some("db down".to_string()),
    };
    assert_eq!(err.to_string(), "db down");
}

#[test]
fn http_error_without_detail_reports_status() {
    let err = ApiError::Http {
        status: 503,
        detail: None,
    };
    assert_eq!(err.to_string(), "request failed with status 503");
}

#[test]
fn timeout_has_a_distinct_message() {
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
}

#[test]
fn parse_error_reads_like_a_generic_failure() {
    // The underlying serde message is for the console, not the user.
    let err = ApiError::Parse("expected value at line 1 column 1".to_string());
    assert_eq!(err.to_string(), "received a malformed response from the server");
}

#[test]
fn transport_error_includes_the_cause() {
    let err = ApiError::Transport("connection refused".to_string());
    assert_eq!(err.to_string(), "network error: connection refused");
}
