use pso_core::error::AppError;
use serde_json::Value;

/// Where status payloads come from. One call is one GET of one platform endpoint.
///
/// Implementations must be shareable across the fan-out threads.
pub trait StatusSource: Sync {
    fn fetch_json(&self, url: &str) -> Result<Value, AppError>;
}

pub mod http_source;
