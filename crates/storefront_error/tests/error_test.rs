//! Tests for error classification and messages.

use storefront_error::{
    ConfigError, ConfigErrorKind, HttpError, JsonError, JsonErrorKind, StoreError, StoreErrorKind,
    StorefrontError, StorefrontErrorKind, StorefrontResult,
};

fn decode_failure() -> StorefrontResult<()> {
    Err(JsonError::new(JsonErrorKind::ProductList(
        "invalid type: map, expected a sequence".to_string(),
    )))?
}

#[test]
fn test_malformed_payload_is_deserialization_not_network() {
    let err = decode_failure().unwrap_err();

    assert!(err.is_deserialization());
    assert!(!err.is_network());
    assert!(matches!(
        err.kind(),
        StorefrontErrorKind::Json(JsonError {
            kind: JsonErrorKind::ProductList(_),
            ..
        })
    ));
}

#[test]
fn test_http_error_is_network() {
    let err = StorefrontError::from(HttpError::new("connection refused"));

    assert!(err.is_network());
    assert!(!err.is_deserialization());
}

#[test]
fn test_store_and_config_errors_are_neither() {
    let store = StorefrontError::from(StoreError::new(StoreErrorKind::FileWrite(
        "products.json".to_string(),
    )));
    let config = StorefrontError::from(ConfigError::new(ConfigErrorKind::NoDataDir));

    for err in [store, config] {
        assert!(!err.is_network());
        assert!(!err.is_deserialization());
    }
}

#[test]
fn test_json_error_names_payload_and_location() {
    let err = JsonError::new(JsonErrorKind::Product("missing field `title`".to_string()));
    let text = err.to_string();

    assert!(text.starts_with("JSON Error: Malformed product: missing field `title`"));
    assert!(text.contains("error_test.rs"));
    assert_eq!(err.file, file!());
}

#[test]
fn test_config_error_messages() {
    let invalid = ConfigError::new(ConfigErrorKind::Invalid(
        "chart.top_n must be at least 1".to_string(),
    ));
    assert!(
        invalid
            .to_string()
            .starts_with("Configuration Error: Invalid setting: chart.top_n must be at least 1")
    );

    let missing = ConfigError::new(ConfigErrorKind::NoDataDir);
    assert!(missing.to_string().contains("set store.data_dir"));
}

#[test]
fn test_wrapper_display_includes_inner_error() {
    let err = StorefrontError::from(JsonError::new(JsonErrorKind::Encode("bad float".to_string())));

    assert!(
        err.to_string()
            .starts_with("Storefront Error: JSON Error: Failed to encode products: bad float")
    );
}
