use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Name or service not known: {0}")]
    NameNotFound(String),

    #[error("Temporary failure in name resolution: {0}")]
    TemporaryFailure(String),

    #[error("Non-recoverable failure in name resolution: {0}")]
    NonRecoverable(String),

    #[error("Memory allocation failure while rebuilding address chain")]
    MemoryExhausted,

    #[error("Servname not supported: {0}")]
    UnknownService(String),

    #[error("Address family not supported: {0}")]
    UnsupportedFamily(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS64 prefix: {0}")]
    InvalidDns64Prefix(String),

    #[error("Resolver configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Conventional `getaddrinfo` error code for this failure.
    pub fn gai_code(&self) -> i32 {
        match self {
            DomainError::NameNotFound(_) => libc::EAI_NONAME,
            DomainError::TemporaryFailure(_) => libc::EAI_AGAIN,
            DomainError::MemoryExhausted => libc::EAI_MEMORY,
            DomainError::UnknownService(_) => libc::EAI_SERVICE,
            DomainError::UnsupportedFamily(_) => libc::EAI_FAMILY,
            DomainError::NonRecoverable(_)
            | DomainError::InvalidIpAddress(_)
            | DomainError::InvalidDns64Prefix(_)
            | DomainError::ConfigError(_) => libc::EAI_FAIL,
        }
    }
}
