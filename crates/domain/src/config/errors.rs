use super::server::ServerParseError;
use crate::errors::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),
}

/// A configuration line that was skipped. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigWarning {
    #[error("line {line}: key '{key}' has no value")]
    MissingValue { line: usize, key: String },

    #[error("line {line}: invalid DNS server address '{token}': {reason}")]
    InvalidServer {
        line: usize,
        token: String,
        reason: ServerParseError,
    },

    #[error("line {line}: server limit of {limit} reached, ignoring '{token}'")]
    ServerCapacityExceeded {
        line: usize,
        token: String,
        limit: usize,
    },

    #[error("line {line}: invalid timeout '{value}'")]
    InvalidTimeout { line: usize, value: String },

    #[error("line {line}: unusable DNS64 prefix '{value}', keeping the default: {reason}")]
    InvalidDns64Prefix {
        line: usize,
        value: String,
        reason: DomainError,
    },
}

impl ConfigWarning {
    pub fn line(&self) -> usize {
        match self {
            ConfigWarning::MissingValue { line, .. }
            | ConfigWarning::InvalidServer { line, .. }
            | ConfigWarning::ServerCapacityExceeded { line, .. }
            | ConfigWarning::InvalidTimeout { line, .. }
            | ConfigWarning::InvalidDns64Prefix { line, .. } => *line,
        }
    }
}
