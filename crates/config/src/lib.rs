mod args;
mod error;
mod log;
mod parser;

pub use args::Args;
pub use error::ConfigError;
pub use log::{LogConfig, LogError, VALID_LOG_LEVELS};
pub use parser::ParserConfig;

use serde::Deserialize;
use std::path::Path;

pub const ENV_PREFIX: &str = "TMP_";

/// Flat view of the `TMP_*` environment, as envy reads it.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    parser_strict_message_types: bool,
    #[serde(default)]
    parser_require_success: bool,
}

impl From<EnvConfig> for TxMessageConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
            },
            parser: ParserConfig {
                strict_message_types: env.parser_strict_message_types,
                require_success: env.parser_require_success,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TxMessageConfig {
    pub log: LogConfig,
    pub parser: ParserConfig,
}

impl TxMessageConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` into the process environment (a missing file is not an error),
    /// then reads the configuration from the environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if let Err(source) = dotenv::from_path(path)
            && !source.not_found()
        {
            return Err(ConfigError::EnvFileError {
                path: path.display().to_string(),
                source,
            });
        }
        Self::from_env()
    }

    /// Reads the configuration from explicit `(KEY, value)` pairs instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvConfig>(vars)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()?;
        Ok(())
    }
}
