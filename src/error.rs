use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("presence multiplier for level 2 must be 0, got {0}")]
    PresenceNotNeutral(f64),

    #[error("presence multipliers must not decrease, level {level} is below the level before it")]
    PresenceDecreasing { level: usize },

    #[error("presence multiplier for level {level} must be greater than -1, got {value}")]
    PresenceTooLow { level: usize, value: f64 },

    #[error("weight '{0}' must be a finite, non-negative number")]
    InvalidWeight(String),

    #[error("burden deduction must be between 0 and 100 percent, got {0}")]
    BurdenOutOfRange(f64),

    #[error("custom deed id must not be empty")]
    EmptyDeedId,

    #[error("custom deed '{0}' already exists")]
    DuplicateDeed(String),

    #[error("custom deed '{0}' not found")]
    UnknownDeed(String),
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("reading record {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing record {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no such record file or directory: {0}")]
    NotFound(PathBuf),
}
