use std::time::Duration;

use clap::Parser;
use pso_core::error::AppError;
use pso_fetch::config::{DEFAULT_PROXY_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
use pso_fetch::{run_command, HttpSource, Observer, ObserverConfig};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const TOOL_DESCRIPTION: &str = concat!(
    "Check operational status of major digital platforms including AI providers like ",
    "OpenRouter, OpenAI, Anthropic; cloud services like GCP, Vercel; and developer tools"
);

#[derive(Debug, Parser)]
#[command(name = "pso-cli", version, about = TOOL_DESCRIPTION)]
pub struct Cli {
    /// Command to execute (list, --all, or a platform with -- prefix such as --openrouter,
    /// --openai, --github, --gcp)
    #[arg(allow_hyphen_values = true)]
    pub command: String,

    /// Base URL of the status proxy used by the non-Statuspage platforms.
    #[arg(long, env = "PSO_PROXY_BASE_URL", default_value = DEFAULT_PROXY_BASE_URL)]
    pub proxy_base_url: String,

    /// Per-request timeout in milliseconds.
    #[arg(
        long,
        env = "PSO_TIMEOUT_MS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_millis() as u64
    )]
    pub timeout_ms: u64,
}

/// Logs go to stderr; stdout carries only command output.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

pub fn config_from_cli(cli: &Cli) -> Result<ObserverConfig, AppError> {
    ObserverConfig::new(&cli.proxy_base_url, Duration::from_millis(cli.timeout_ms))
}

/// Build the process context (config, registry, HTTP source) and run one command.
pub fn run(cli: &Cli) -> Result<String, AppError> {
    let config = config_from_cli(cli)?;
    let registry = config.registry();
    let source = HttpSource::new(&config);
    let observer = Observer::new(&registry, &source);
    run_command(&observer, &cli.command)
}
