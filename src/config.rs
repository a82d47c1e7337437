//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Environment variables: `TREEWALK_*` prefix
//! 3. Command line flags (applied by the CLI layer)
//!
//! Settings only toggle how the report is produced. The tree and the report
//! lines are fixed.

use config::{Config, ConfigError, Environment, Map};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Prefix of the environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "TREEWALK";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Run the walks on the rayon thread pool
    pub parallel: bool,
    /// Print the tree diagram after the report
    pub show_tree: bool,
}

impl Settings {
    /// Loads settings from compiled defaults and the process environment.
    #[instrument(level = "debug")]
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Same as [`Settings::load`], reading variables from `vars` instead of
    /// the process environment when given.
    pub fn load_from(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let settings: Settings = Config::builder()
            .set_default("parallel", defaults.parallel)?
            .set_default("show_tree", defaults.show_tree)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }
}
