use pso_core::error::{codes, AppError};
use serde_json::Value;

use super::StatusSource;
use crate::config::ObserverConfig;

/// Blocking HTTP source with a bounded per-request timeout and no retries.
#[derive(Debug, Clone)]
pub struct HttpSource {
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(config: &ObserverConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { agent }
    }
}

impl StatusSource for HttpSource {
    fn fetch_json(&self, url: &str) -> Result<Value, AppError> {
        tracing::debug!(url, "fetching status payload");

        match self.agent.get(url).set("Accept", "application/json").call() {
            Ok(r) => r.into_json::<Value>().map_err(|e| {
                AppError::new(codes::SOURCE_DECODE_FAILED, "Failed to decode status payload")
                    .with_details(format!("url={url}; err={e}"))
            }),
            Err(ureq::Error::Status(status, _)) => Err(AppError::new(
                codes::SOURCE_HTTP_STATUS,
                "Status endpoint returned an error status",
            )
            .with_details(format!("url={url}; status={status}"))
            .with_retryable(status >= 500)),
            Err(e) => Err(AppError::new(
                codes::SOURCE_UNREACHABLE,
                "Failed to reach status endpoint",
            )
            .with_details(format!("url={url}; err={e}"))
            .with_retryable(true)),
        }
    }
}
