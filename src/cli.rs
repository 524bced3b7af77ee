use clap::Parser;

/// Command line interface for the connectivity tester
#[derive(Parser)]
#[command(name = "glmping", about = "Smoke-tests connectivity to an LLM chat completion API")]
pub struct Cli {
    /// API key authenticating against the remote service.
    /// Passed through verbatim; the remote service decides whether it is valid.
    pub api_key: Option<String>,

    /// Model identifier to invoke (e.g. "glm-4")
    pub model: Option<String>,

    /// Provider to test against
    /// Possible values: "zhipuai", "bailian", "volcano", "siliconflow"
    #[arg(long, default_value_t = String::from(crate::constants::DEFAULT_PROVIDER))]
    pub provider: String,

    /// Custom endpoint base URL for self-hosted or unlisted deployments,
    /// overriding --provider
    #[arg(long)]
    pub base_url: Option<String>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "warn"
    #[arg(long, default_value_t = String::from("warn"))]
    pub logging_level: String,
}
