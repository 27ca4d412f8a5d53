use async_trait::async_trait;
use hostscope_domain::DomainError;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ARecord {
    pub address: Ipv4Addr,
    pub time_to_live: u32,
}

/// A records from the answer section, in the order the upstream returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsAnswer {
    pub answers: Vec<ARecord>,
}

impl DnsAnswer {
    pub fn new(answers: Vec<ARecord>) -> Self {
        Self { answers }
    }

    pub fn first(&self) -> Option<&ARecord> {
        self.answers.first()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn query_a(&self, name: &str) -> Result<DnsAnswer, DomainError>;
}
