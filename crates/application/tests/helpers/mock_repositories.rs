#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use hostscope_application::ports::{
    ARecord, DnsAnswer, DnsResolver, DomainRecordRepository, WhoisClient, WhoisResponse,
};
use hostscope_domain::{DomainError, DomainNameRules, DomainRecord, TldRegistry};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn sample_rules() -> Arc<DomainNameRules> {
    let registry = TldRegistry::from_source("COM\nBR\nNET\nORG\nIO\nUK\n").unwrap();
    Arc::new(DomainNameRules::new(Arc::new(registry)))
}

#[derive(Clone)]
pub struct MockDomainRecordRepository {
    records: Arc<RwLock<HashMap<String, DomainRecord>>>,
    next_id: Arc<AtomicUsize>,
    find_calls: Arc<AtomicUsize>,
    insert_calls: Arc<AtomicUsize>,
    update_calls: Arc<AtomicUsize>,
    should_fail_writes: Arc<RwLock<bool>>,
}

impl MockDomainRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicUsize::new(1)),
            find_calls: Arc::new(AtomicUsize::new(0)),
            insert_calls: Arc::new(AtomicUsize::new(0)),
            update_calls: Arc::new(AtomicUsize::new(0)),
            should_fail_writes: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn seed(&self, mut record: DomainRecord) {
        record.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) as i64);
        self.records
            .write()
            .await
            .insert(record.name.to_string(), record);
    }

    pub async fn get(&self, name: &str) -> Option<DomainRecord> {
        self.records.read().await.get(name).cloned()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn set_should_fail_writes(&self, should_fail: bool) {
        *self.should_fail_writes.write().await = should_fail;
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockDomainRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DomainRecordRepository for MockDomainRecordRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<DomainRecord>, DomainError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.read().await.get(name).cloned())
    }

    async fn insert(&self, record: &DomainRecord) -> Result<DomainRecord, DomainError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail_writes.read().await {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }

        let mut records = self.records.write().await;
        if records.contains_key(record.name.as_ref()) {
            return Err(DomainError::DatabaseError(
                "UNIQUE constraint failed: domains.name".to_string(),
            ));
        }

        let mut stored = record.clone();
        stored.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) as i64);
        records.insert(stored.name.to_string(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, record: &DomainRecord) -> Result<(), DomainError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail_writes.read().await {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }

        let mut records = self.records.write().await;
        match records.get_mut(record.name.as_ref()) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(record.name.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<String, DnsAnswer>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_a_record(&self, domain: &str, address: &str, ttl: u32) {
        let address: Ipv4Addr = address.parse().unwrap();
        self.responses.write().await.insert(
            domain.to_string(),
            DnsAnswer::new(vec![ARecord {
                address,
                time_to_live: ttl,
            }]),
        );
    }

    pub async fn set_response(&self, domain: &str, answer: DnsAnswer) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), answer);
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn query_a(&self, name: &str) -> Result<DnsAnswer, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::TransportTimeout {
                server: "127.0.0.1:53".to_string(),
            });
        }
        Ok(self
            .responses
            .read()
            .await
            .get(name)
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Clone)]
pub struct MockWhoisClient {
    organizations: Arc<RwLock<HashMap<String, String>>>,
    queries: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockWhoisClient {
    pub fn new() -> Self {
        Self {
            organizations: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_organization(&self, target: &str, organization: &str) {
        self.organizations
            .write()
            .await
            .insert(target.to_string(), organization.to_string());
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    pub async fn calls(&self) -> usize {
        self.queries.read().await.len()
    }
}

impl Default for MockWhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhoisClient for MockWhoisClient {
    async fn query(&self, target: &str) -> Result<WhoisResponse, DomainError> {
        self.queries.write().await.push(target.to_string());
        if *self.should_fail.read().await {
            return Err(DomainError::WhoisFailed(format!(
                "connection refused while querying {}",
                target
            )));
        }

        let organization_name = self.organizations.read().await.get(target).cloned();
        Ok(WhoisResponse {
            raw: format!("Domain Name: {}\n", target.to_uppercase()),
            organization_name,
        })
    }
}
