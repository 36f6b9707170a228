use clap::Parser;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_ENGINE_BIN: &str = "mansnip";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "mansnipd", version, about = "Manpage snippet MCP daemon.")]
struct CliArgs {
    /// Extractor executable the snippet engine spawns per request.
    #[arg(long, env = "MANSNIPD_ENGINE_BIN", default_value = DEFAULT_ENGINE_BIN)]
    engine_bin: PathBuf,

    /// Default tracing filter; RUST_LOG takes precedence when set.
    #[arg(long, env = "MANSNIPD_LOG_FILTER", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone, Debug)]
pub struct MansnipConfig {
    pub engine_bin: PathBuf,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl MansnipConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for MansnipConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.engine_bin.as_os_str().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "MANSNIPD_ENGINE_BIN",
                value: args.engine_bin.display().to_string(),
            });
        }

        if args.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "MANSNIPD_LOG_FILTER",
                value: args.log_filter,
            });
        }

        Ok(Self {
            engine_bin: args.engine_bin,
            log_filter: args.log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            engine_bin: PathBuf::from(DEFAULT_ENGINE_BIN),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn accepts_defaults() {
        let config = MansnipConfig::try_from(base_args()).expect("config should parse");
        assert_eq!(config.engine_bin, PathBuf::from("mansnip"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn rejects_empty_engine_path() {
        let mut args = base_args();
        args.engine_bin = PathBuf::new();

        let err = MansnipConfig::try_from(args).expect_err("empty engine path must be rejected");
        assert!(err.to_string().contains("MANSNIPD_ENGINE_BIN"));
    }

    #[test]
    fn rejects_blank_log_filter() {
        let mut args = base_args();
        args.log_filter = "   ".to_string();

        let err = MansnipConfig::try_from(args).expect_err("blank filter must be rejected");
        assert!(err.to_string().contains("MANSNIPD_LOG_FILTER"));
    }
}
