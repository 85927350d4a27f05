//! App Config

use clap::Args;

/// Application behaviour settings.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Expose internal error messages in 500 responses
    #[arg(long, env = "APP_DEBUG", default_value_t = false)]
    pub app_debug: bool,
}
