use std::time::Duration;

use clap::Parser;
use recipe_gateway::{GatewaySettings, DEFAULT_BASE_URL};

use super::logging::LogDestination;

/// Search a recipe catalog and keep favourites from the terminal.
#[derive(Debug, Parser)]
#[command(name = "recipe_app", version)]
pub struct AppArgs {
    /// Base URL of the recipe API.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds before an API request is abandoned.
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppArgs {
    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..GatewaySettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_api() {
        let args = AppArgs::parse_from(["recipe_app"]);
        let settings = args.gateway_settings();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert_eq!(args.log, LogDestination::File);
        assert!(!args.verbose);
    }

    #[test]
    fn flags_override_settings() {
        let args = AppArgs::parse_from([
            "recipe_app",
            "--base-url",
            "http://recipes.test:8080",
            "--request-timeout-secs",
            "5",
            "--log",
            "both",
            "-v",
        ]);
        let settings = args.gateway_settings();
        assert_eq!(settings.base_url, "http://recipes.test:8080");
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(args.log, LogDestination::Both);
        assert!(args.verbose);
    }
}
