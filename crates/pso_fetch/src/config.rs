use std::time::Duration;

use pso_core::error::{codes, AppError};
use pso_core::registry::Registry;

pub const DEFAULT_PROXY_BASE_URL: &str = "https://status-observer-helpers.vercel.app";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverConfig {
    /// Base URL of the status proxy serving the non-Statuspage platforms.
    pub proxy_base_url: String,
    /// Upper bound for one status request; a hanging source cannot stall `--all` beyond this.
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            proxy_base_url: DEFAULT_PROXY_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("pso/{}", env!("CARGO_PKG_VERSION"))
}

impl ObserverConfig {
    /// Validated config. The base URL must be http(s) with a host; a trailing slash is trimmed.
    pub fn new(proxy_base_url: &str, request_timeout: Duration) -> Result<Self, AppError> {
        let base = proxy_base_url.trim().trim_end_matches('/').to_string();

        let host = base
            .strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"));
        match host {
            Some(h) if !h.is_empty() && !h.starts_with('/') => {}
            _ => {
                return Err(AppError::new(
                    codes::CONFIG_INVALID,
                    "Proxy base URL must be an http(s) URL with a host",
                )
                .with_details(format!("proxy_base_url={proxy_base_url}")))
            }
        }

        if request_timeout.is_zero() {
            return Err(AppError::new(
                codes::CONFIG_INVALID,
                "Request timeout must be greater than zero",
            ));
        }

        Ok(Self {
            proxy_base_url: base,
            request_timeout,
            user_agent: default_user_agent(),
        })
    }

    /// The builtin platform table wired to this config's proxy.
    pub fn registry(&self) -> Registry {
        Registry::builtin(&self.proxy_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_base_url_and_timeout() {
        let ok = ObserverConfig::new("http://127.0.0.1:8080/", Duration::from_millis(500))
            .expect("valid");
        assert_eq!(ok.proxy_base_url, "http://127.0.0.1:8080");

        for bad in ["", "ftp://example.com", "https://", "example.com"] {
            let err = ObserverConfig::new(bad, Duration::from_secs(1)).expect_err(bad);
            assert_eq!(err.code, codes::CONFIG_INVALID);
        }
        assert!(ObserverConfig::new("https://example.com", Duration::ZERO).is_err());
    }
}
