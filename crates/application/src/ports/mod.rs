mod dns_resolver;
mod domain_record_repository;
mod domain_validator;
mod whois_client;

pub use dns_resolver::{ARecord, DnsAnswer, DnsResolver};
pub use domain_record_repository::DomainRecordRepository;
pub use domain_validator::DomainValidator;
pub use whois_client::{WhoisClient, WhoisResponse};

// Re-export for convenience
pub use hostscope_domain::{DomainRecord, ValidationOutcome};
