use std::env;

use crate::catalog::Locale;
use crate::cli::Args;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub struct Config {
    pub api_base: String,
    pub locale: Locale,
    pub verbose: bool,
}

impl Config {
    /// Build the runtime configuration. Precedence: CLI args > environment
    /// variables > defaults.
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        let api_base = args
            .api_base
            .clone()
            .or_else(|| env::var("VOAMIGO_API_BASE").ok())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        if api_base.is_empty() {
            return Err("API base URL must not be empty".to_string());
        }
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(format!(
                "API base URL must start with http:// or https:// (got: {})",
                api_base
            ));
        }

        let locale = args
            .locale
            .clone()
            .or_else(|| env::var("VOAMIGO_LOCALE").ok())
            .map(|tag| Locale::from_tag(&tag))
            .unwrap_or(Locale::PtBr);

        let verbose = args.verbose
            || env::var("VOAMIGO_VERBOSE")
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
                .unwrap_or(false);

        Ok(Config {
            api_base,
            locale,
            verbose,
        })
    }
}
