pub mod domain;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod report;

#[cfg(test)]
mod tests {
    use super::error::{codes, AppError};

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new(codes::SOURCE_UNREACHABLE, "connect refused")
            .with_details("url=http://127.0.0.1:1")
            .with_retryable(true);
        assert_eq!(err.code, "SOURCE_UNREACHABLE");
        assert!(err.retryable);
        assert!(err.is_source_failure());
        assert_eq!(
            err.to_string(),
            "[SOURCE_UNREACHABLE] connect refused (url=http://127.0.0.1:1)"
        );
        assert!(!AppError::new(codes::COMMAND_INVALID, "bad").is_source_failure());
    }

    #[test]
    fn app_error_serializes_with_stable_field_names() {
        let err = AppError::new(
            codes::SOURCE_HTTP_STATUS,
            "Status endpoint returned an error status",
        )
        .with_details("status=503");
        let v = serde_json::to_value(&err).expect("serialize");
        assert_eq!(v["code"], "SOURCE_HTTP_STATUS");
        assert_eq!(v["details"], "status=503");
        assert_eq!(v["retryable"], false);
    }
}
