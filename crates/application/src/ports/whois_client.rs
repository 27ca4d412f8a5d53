use async_trait::async_trait;
use hostscope_domain::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisResponse {
    pub raw: String,
    pub organization_name: Option<String>,
}

#[async_trait]
pub trait WhoisClient: Send + Sync {
    /// `target` is a domain name or an IP address.
    async fn query(&self, target: &str) -> Result<WhoisResponse, DomainError>;
}
