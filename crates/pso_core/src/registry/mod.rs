use std::collections::HashMap;

use crate::domain::PlatformDescriptor;

/// Platform ids served through the shared status proxy (`<base>/<id>`).
pub const PROXIED_PLATFORMS: [&str; 10] = [
    "anthropic",
    "atlassian",
    "docker",
    "gcp",
    "gemini",
    "linkedin",
    "openai",
    "openrouter",
    "supabase",
    "x",
];

// (id, display name, native endpoint or None when proxied, description)
const BUILTIN: [(&str, &str, Option<&str>, &str); 23] = [
    (
        "amplitude",
        "Amplitude",
        Some("https://status.amplitude.com/api/v2/summary.json"),
        "Analytics platform",
    ),
    ("anthropic", "Anthropic", None, "AI assistant provider"),
    (
        "asana",
        "Asana",
        Some("https://status.asana.com/api/v2/summary.json"),
        "Team workflow management",
    ),
    ("atlassian", "Atlassian", None, "Developer collaboration tools"),
    (
        "cloudflare",
        "Cloudflare",
        Some("https://www.cloudflarestatus.com/api/v2/summary.json"),
        "Web infrastructure and security",
    ),
    (
        "digitalocean",
        "DigitalOcean",
        Some("https://status.digitalocean.com/api/v2/summary.json"),
        "Cloud infrastructure",
    ),
    (
        "discord",
        "Discord",
        Some("https://discordstatus.com/api/v2/summary.json"),
        "Messaging platform",
    ),
    ("docker", "Docker", None, "Container platform and services"),
    ("dropbox", "Dropbox", Some("https://status.dropbox.com/api/v2/summary.json"), "File hosting"),
    ("gcp", "Google Cloud Platform", None, "Cloud computing services"),
    ("gemini", "Gemini", None, "Multimodal AI platform"),
    (
        "github",
        "GitHub",
        Some("https://www.githubstatus.com/api/v2/summary.json"),
        "Version control platform",
    ),
    ("linkedin", "LinkedIn", None, "Professional network"),
    (
        "netlify",
        "Netlify",
        Some("https://www.netlifystatus.com/api/v2/summary.json"),
        "Web development platform",
    ),
    (
        "npm",
        "npm",
        Some("https://status.npmjs.org/api/v2/summary.json"),
        "JavaScript package manager",
    ),
    ("openai", "OpenAI", None, "AI services provider"),
    ("openrouter", "OpenRouter", None, "AI model routing and access platform"),
    (
        "reddit",
        "Reddit",
        Some("https://www.redditstatus.com/api/v2/summary.json"),
        "Social news platform",
    ),
    (
        "slack",
        "Slack",
        Some("https://status.slack.com/api/v2.0.0/current"),
        "Business communication",
    ),
    ("supabase", "Supabase", None, "Open source backend platform"),
    (
        "twilio",
        "Twilio",
        Some("https://status.twilio.com/api/v2/summary.json"),
        "Cloud communications",
    ),
    (
        "vercel",
        "Vercel",
        Some("https://www.vercel-status.com/api/v2/summary.json"),
        "Frontend deployment platform",
    ),
    ("x", "X", None, "Social media platform"),
];

/// Ordered table of known platforms.
///
/// Built once at startup and then shared read-only; nothing mutates it while requests are served.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    platforms: Vec<PlatformDescriptor>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed platform table. Proxied platforms resolve to `<proxy_base_url>/<id>`.
    pub fn builtin(proxy_base_url: &str) -> Self {
        let base = proxy_base_url.trim_end_matches('/');
        let mut registry = Self::new();
        for (id, name, native_url, description) in BUILTIN {
            let url = match native_url {
                Some(u) => u.to_string(),
                None => format!("{base}/{id}"),
            };
            registry.register(id, name, url, description);
        }
        registry
    }

    /// Insert a platform. Re-registering an id overwrites the entry in place (last one wins) and
    /// keeps its original position in the listing order.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) {
        let descriptor = PlatformDescriptor {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            description: description.into(),
        };
        match self.index.get(&descriptor.id) {
            Some(&pos) => self.platforms[pos] = descriptor,
            None => {
                self.index
                    .insert(descriptor.id.clone(), self.platforms.len());
                self.platforms.push(descriptor);
            }
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&PlatformDescriptor> {
        self.index.get(id).map(|&pos| &self.platforms[pos])
    }

    /// All platforms in registration order.
    pub fn list_all(&self) -> &[PlatformDescriptor] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
