use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root benchmark configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BenchmarkConfig {
    pub run_id: String,
    pub games: GamesConfig,
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BenchmarkConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let cfg: BenchmarkConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;
        if self.games.count == 0 {
            return Err(ValidationError::NoGames);
        }
        self.logging.validate()?;
        Ok(())
    }

    /// Resolve output templates (`{run_id}` placeholders) into concrete
    /// paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            jsonl: resolve_template(&self.run_id, &self.outputs.jsonl),
            summary_md: resolve_template(&self.run_id, &self.outputs.summary_md),
        }
    }
}

/// Seeded game sampling block.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GamesConfig {
    pub seed: Option<u64>,
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    pub jsonl: String,
    pub summary_md: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default)]
    pub level: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> Option<Level> {
        self.level
            .as_deref()
            .and_then(|raw| raw.parse::<Level>().ok())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self.level.as_deref() {
            Some(raw) if raw.parse::<Level>().is_err() => {
                Err(ValidationError::UnknownLevel(raw.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            level: None,
        }
    }
}

/// Output paths with templates resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOutputs {
    pub jsonl: PathBuf,
    pub summary_md: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid configuration at {path}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("run_id must not be empty")]
    EmptyRunId,
    #[error("run_id contains unsupported character `{0}`")]
    RunIdCharset(char),
    #[error("games.count must be at least 1")]
    NoGames,
    #[error("unknown logging level `{0}`")]
    UnknownLevel(String),
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.is_empty() {
        return Err(ValidationError::EmptyRunId);
    }
    if let Some(bad) = run_id.chars().find(|c| !RUN_ID_ALLOWED.contains(*c)) {
        return Err(ValidationError::RunIdCharset(bad));
    }
    Ok(())
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    PathBuf::from(template.replace("{run_id}", run_id))
}

#[cfg(test)]
mod tests {
    use super::{BenchmarkConfig, ValidationError};
    use std::path::PathBuf;

    fn parse(yaml: &str) -> BenchmarkConfig {
        serde_yaml::from_str(yaml).expect("valid yaml")
    }

    const BASE: &str = r#"
run_id: "nightly_01"
games:
  seed: 99
  count: 50
outputs:
  jsonl: "out/{run_id}/games.jsonl"
  summary_md: "out/{run_id}/summary.md"
"#;

    #[test]
    fn templates_resolve_run_id() {
        let cfg = parse(BASE);
        cfg.validate().unwrap();
        let outputs = cfg.resolved_outputs();
        assert_eq!(outputs.jsonl, PathBuf::from("out/nightly_01/games.jsonl"));
        assert_eq!(
            outputs.summary_md,
            PathBuf::from("out/nightly_01/summary.md")
        );
    }

    #[test]
    fn logging_defaults_to_disabled() {
        let cfg = parse(BASE);
        assert!(!cfg.logging.enable_structured);
        assert_eq!(cfg.logging.level(), None);
    }

    #[test]
    fn zero_games_fail_validation() {
        let mut cfg = parse(BASE);
        cfg.games.count = 0;
        assert_eq!(cfg.validate(), Err(ValidationError::NoGames));
    }

    #[test]
    fn run_id_charset_is_enforced() {
        let mut cfg = parse(BASE);
        cfg.run_id = "bad run".to_string();
        assert_eq!(cfg.validate(), Err(ValidationError::RunIdCharset(' ')));
        cfg.run_id = String::new();
        assert_eq!(cfg.validate(), Err(ValidationError::EmptyRunId));
    }

    #[test]
    fn unknown_logging_level_is_rejected() {
        let mut cfg = parse(BASE);
        cfg.logging.level = Some("chatty".to_string());
        assert_eq!(
            cfg.validate(),
            Err(ValidationError::UnknownLevel("chatty".to_string()))
        );
        cfg.logging.level = Some("debug".to_string());
        assert!(cfg.validate().is_ok());
    }
}
