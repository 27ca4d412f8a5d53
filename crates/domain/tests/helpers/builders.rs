#![allow(dead_code)]
use chrono::{DateTime, Duration, Utc};
use hostscope_domain::{DomainNameRules, DomainRecord, RefreshResult, TldRegistry};
use std::sync::Arc;

/// Small slice of the IANA list, enough for the validator scenarios.
pub const SAMPLE_TLD_LIST: &str = "\
# Version 2025100700, Last Updated Tue Oct  7 07:07:01 2025 UTC
BR
CO
COM
DE
IO
JP
NET
ORG
UK
AU
";

pub fn sample_registry() -> Arc<TldRegistry> {
    Arc::new(TldRegistry::from_source(SAMPLE_TLD_LIST).unwrap())
}

pub fn sample_rules() -> DomainNameRules {
    DomainNameRules::new(sample_registry())
}

pub struct DomainRecordBuilder {
    name: String,
    ip_address: Option<String>,
    ttl_seconds: u32,
    hosting_organization: Option<String>,
    whois_raw: Option<String>,
    updated_at: DateTime<Utc>,
}

impl DomainRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            ip_address: Some("93.184.216.34".to_string()),
            ttl_seconds: 60,
            hosting_organization: Some("Example Hosting".to_string()),
            whois_raw: Some("Domain Name: EXAMPLE.COM".to_string()),
            updated_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl_seconds: u32) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    pub fn no_address(mut self) -> Self {
        self.ip_address = None;
        self.hosting_organization = None;
        self
    }

    pub fn updated_ago(mut self, age: Duration) -> Self {
        self.updated_at = Utc::now() - age;
        self
    }

    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }

    pub fn build(self) -> DomainRecord {
        DomainRecord::from_refresh(
            &self.name,
            RefreshResult {
                ip_address: self.ip_address,
                whois_raw: self.whois_raw,
                ttl_seconds: self.ttl_seconds,
                hosting_organization: self.hosting_organization,
            },
            self.updated_at,
        )
    }
}

impl Default for DomainRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
