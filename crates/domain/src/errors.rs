use crate::validation::DomainNameViolation;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("{0}")]
    InvalidDomainName(DomainNameViolation),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error(
        "Failed to fetch information for domain '{domain}'. \
         Check that the domain exists and is reachable."
    )]
    LookupFailed { domain: String },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("DNS query failed: {0}")]
    DnsQueryFailed(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("WHOIS query failed: {0}")]
    WhoisFailed(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// True for failures caused by malformed caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::InvalidDomainName(_))
    }
}

impl From<DomainNameViolation> for DomainError {
    fn from(violation: DomainNameViolation) -> Self {
        DomainError::InvalidDomainName(violation)
    }
}
