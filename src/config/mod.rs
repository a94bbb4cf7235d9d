use std::path::PathBuf;

use url::Url;

use crate::cli::Cli;
use crate::errors::{FeederError, FeederResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub handle: Option<String>,
    pub organizations: Vec<String>,
    pub base_url: String,
    pub output_dir: PathBuf,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Load `.env` so its values are visible to clap's `env` fallbacks.
    pub fn load_env() {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();
    }

    pub fn new(
        handle: Option<String>,
        organizations: Vec<String>,
        base_url: &str,
        output_dir: PathBuf,
    ) -> FeederResult<Self> {
        let handle = handle.filter(|h| !h.is_empty());
        let organizations: Vec<String> = organizations
            .into_iter()
            .filter(|o| !o.is_empty())
            .collect();

        let parsed = Url::parse(base_url)
            .map_err(|e| FeederError::Config(format!("invalid base URL {}: {}", base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FeederError::Config(format!(
                "base URL must be http or https: {}",
                base_url
            )));
        }

        let config = Self {
            handle,
            organizations,
            base_url: base_url.trim_end_matches('/').to_string(),
            output_dir,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn from_cli(cli: Cli) -> FeederResult<Self> {
        Self::new(cli.handle, cli.organizations, &cli.base_url, cli.output_dir)
    }

    /// At least one feed identifier must be present.
    pub fn validate(&self) -> FeederResult<()> {
        if self.handle.is_none() && self.organizations.is_empty() {
            return Err(FeederError::Usage);
        }
        Ok(())
    }
}
