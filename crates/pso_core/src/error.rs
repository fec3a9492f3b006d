use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable error codes. Callers match on these, never on the message text.
pub mod codes {
    pub const SOURCE_UNREACHABLE: &str = "SOURCE_UNREACHABLE";
    pub const SOURCE_HTTP_STATUS: &str = "SOURCE_HTTP_STATUS";
    pub const SOURCE_DECODE_FAILED: &str = "SOURCE_DECODE_FAILED";
    pub const SOURCE_SHAPE_MISMATCH: &str = "SOURCE_SHAPE_MISMATCH";
    pub const COMMAND_INVALID: &str = "COMMAND_INVALID";
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
}

/// Single structured error shape shared by the engine, the adapters and the command layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Shape mismatch between a source payload and the adapter decoding it.
    pub fn shape_mismatch(platform: &str, err: impl fmt::Display) -> Self {
        Self::new(
            codes::SOURCE_SHAPE_MISMATCH,
            format!("Status payload for {platform} did not match the expected shape"),
        )
        .with_details(err.to_string())
    }

    /// True for failures that belong to a single source (contained per platform).
    pub fn is_source_failure(&self) -> bool {
        self.code.starts_with("SOURCE_")
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(d) => write!(f, "[{}] {} ({d})", self.code, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for AppError {}
