//! Hostscope Domain Layer
pub mod config;
pub mod domain_record;
pub mod errors;
pub mod tld_registry;
pub mod validation;

pub use config::{CliOverrides, Config, ConfigError};
pub use domain_record::{DomainRecord, DomainRecordView, RefreshResult, DEFAULT_TTL_SECONDS};
pub use errors::DomainError;
pub use tld_registry::{TldError, TldRegistry, COMPOSITE_TLDS};
pub use validation::{
    normalize_domain_name, DomainNameRules, DomainNameViolation, ValidationOutcome,
};
