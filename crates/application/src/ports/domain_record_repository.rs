use async_trait::async_trait;
use hostscope_domain::{DomainError, DomainRecord};

/// Store for cached domain records, keyed by normalized name.
///
/// Each write is a single statement and commits on its own.
#[async_trait]
pub trait DomainRecordRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<DomainRecord>, DomainError>;

    /// Returns the stored record with its assigned id.
    async fn insert(&self, record: &DomainRecord) -> Result<DomainRecord, DomainError>;

    async fn update(&self, record: &DomainRecord) -> Result<(), DomainError>;
}
