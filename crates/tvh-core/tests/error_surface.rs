use tvh_core::errors::{ErrorInfo, TvhError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("id", "h7")
        .with_context("reason", "example")
}

#[test]
fn entity_not_found_surface() {
    let err = TvhError::EntityNotFound(sample_info("unknown-vertex", "vertex does not exist"));
    assert_eq!(err.info().code, "unknown-vertex");
    assert!(err.info().context.contains_key("id"));
    assert!(err.is_entity_not_found());
}

#[test]
fn unknown_helpers_record_the_identifier() {
    let err = TvhError::unknown_hyperedge(&"e10");
    assert!(err.is_entity_not_found());
    assert_eq!(err.info().code, "unknown-hyperedge");
    assert_eq!(err.info().context.get("hyperedge").map(String::as_str), Some("\"e10\""));

    let err = TvhError::unknown_vertex(&42u32);
    assert_eq!(err.info().context.get("vertex").map(String::as_str), Some("42"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = TvhError::Decode(
        ErrorInfo::new("invalid-timestamp", "cannot parse timestamp")
            .with_context("value", "yesterday")
            .with_hint("use ISO-8601"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("decode error: cannot parse timestamp"));
    assert!(rendered.contains("value=yesterday"));
    assert!(rendered.contains("hint: use ISO-8601"));
    assert!(!err.is_entity_not_found());
}

#[test]
fn errors_round_trip_json() {
    let err = TvhError::Graph(sample_info("missing-timing", "hyperedge has no timing"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Graph\""));
    let decoded: TvhError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
