use pso_core::domain::{PlatformDescriptor, Report};
use pso_core::error::AppError;
use serde_json::Value;
use time::OffsetDateTime;

use crate::adapters;

/// Closed set of payload adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    Anthropic,
    Atlassian,
    Docker,
    Gcp,
    Gemini,
    LinkedIn,
    OpenAi,
    OpenRouter,
    Supabase,
    X,
    GitHub,
    /// Common Statuspage-style summary document.
    Summary,
}

impl AdapterKind {
    /// Static, total mapping from platform id to adapter. Ids without a dedicated adapter use
    /// `Summary`.
    pub fn for_platform(id: &str) -> Self {
        match id {
            "anthropic" => AdapterKind::Anthropic,
            "atlassian" => AdapterKind::Atlassian,
            "docker" => AdapterKind::Docker,
            "gcp" => AdapterKind::Gcp,
            "gemini" => AdapterKind::Gemini,
            "linkedin" => AdapterKind::LinkedIn,
            "openai" => AdapterKind::OpenAi,
            "openrouter" => AdapterKind::OpenRouter,
            "supabase" => AdapterKind::Supabase,
            "x" => AdapterKind::X,
            "github" => AdapterKind::GitHub,
            _ => AdapterKind::Summary,
        }
    }

    pub fn build(
        self,
        platform: &PlatformDescriptor,
        payload: Value,
        now: OffsetDateTime,
    ) -> Result<Report, AppError> {
        match self {
            AdapterKind::Anthropic => adapters::anthropic::build(platform, payload, now),
            AdapterKind::Atlassian => adapters::atlassian::build(platform, payload, now),
            AdapterKind::Docker => adapters::docker::build(platform, payload, now),
            AdapterKind::Gcp => adapters::gcp::build(platform, payload, now),
            AdapterKind::Gemini => adapters::gemini::build(platform, payload, now),
            AdapterKind::LinkedIn => adapters::linkedin::build(platform, payload, now),
            AdapterKind::OpenAi => adapters::openai::build(platform, payload, now),
            AdapterKind::OpenRouter => adapters::openrouter::build(platform, payload, now),
            AdapterKind::Supabase => adapters::supabase::build(platform, payload, now),
            AdapterKind::X => adapters::x::build(platform, payload, now),
            AdapterKind::GitHub => adapters::github::build(platform, payload, now),
            AdapterKind::Summary => adapters::summary::build(platform, payload, now),
        }
    }

    /// Report for the one-line view. Reads only the fields that view shows, so a malformed
    /// service or incident list does not hide a readable overall status.
    pub fn quick(
        self,
        platform: &PlatformDescriptor,
        payload: Value,
        now: OffsetDateTime,
    ) -> Result<Report, AppError> {
        match self {
            AdapterKind::Anthropic
            | AdapterKind::Atlassian
            | AdapterKind::Docker
            | AdapterKind::Gcp
            | AdapterKind::Gemini
            | AdapterKind::LinkedIn
            | AdapterKind::OpenAi
            | AdapterKind::Supabase
            | AdapterKind::X => adapters::quick(platform, payload, now),
            AdapterKind::OpenRouter => adapters::openrouter::quick(platform, payload, now),
            AdapterKind::GitHub => adapters::summary::quick(platform, payload, now, true),
            AdapterKind::Summary => adapters::summary::quick(platform, payload, now, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pso_core::registry::{Registry, PROXIED_PLATFORMS};

    #[test]
    fn every_proxied_platform_has_a_dedicated_adapter() {
        for id in PROXIED_PLATFORMS {
            assert_ne!(AdapterKind::for_platform(id), AdapterKind::Summary, "{id}");
        }
        let registry = Registry::builtin("https://proxy.invalid");
        let summary_count = registry
            .list_all()
            .iter()
            .filter(|p| AdapterKind::for_platform(&p.id) == AdapterKind::Summary)
            .count();
        assert_eq!(summary_count, 12);
    }
}
