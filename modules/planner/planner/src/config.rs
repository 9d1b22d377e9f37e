//! Layered configuration for the planner.
//!
//! Sources, later ones winning: built-in defaults, an optional YAML file, then
//! environment variables prefixed with `PLANNER__` (nested keys joined by `__`,
//! e.g. `PLANNER__DATABASE__DSN`).

use std::path::Path;

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use planner_db::DbConfig;
use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "PLANNER__";

/// Top-level planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub database: DbConfig,
    pub logging: LoggingConfig,
    pub service: ServiceConfig,
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `planner=debug,sea_orm=warn`.
    pub level: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl PlannerConfig {
    /// Layered figment: defaults, then `path` (if any), then `PLANNER__*` variables.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        Self::figment_with_env(path, ENV_PREFIX)
    }

    fn figment_with_env(path: Option<&Path>, env_prefix: &str) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(env_prefix).split("__"))
    }

    /// Load and validate the effective configuration.
    ///
    /// # Errors
    /// Returns an error if `path` is given but is not a file, if any source
    /// fails to parse or carries unknown keys, or if validation fails.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, ENV_PREFIX)
    }

    fn load_with_env(path: Option<&Path>, env_prefix: &str) -> anyhow::Result<Self> {
        if let Some(path) = path
            && !path.is_file()
        {
            bail!("config file does not exist: {}", path.display());
        }
        let config: Self = Self::figment_with_env(path, env_prefix)
            .extract()
            .context("failed to load planner configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Static checks that do not touch the database.
    ///
    /// # Errors
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.database.validate()?;
        if self.service.max_name_length == 0 {
            bail!("service.max_name_length must be greater than zero");
        }
        if self.logging.level.trim().is_empty() {
            bail!("logging.level must not be empty");
        }
        Ok(())
    }
}
