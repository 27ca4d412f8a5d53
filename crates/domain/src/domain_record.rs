use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// TTL applied when the DNS answer carries no A record.
pub const DEFAULT_TTL_SECONDS: u32 = 3600;

/// Outcome of one refresh against the external DNS and WHOIS sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshResult {
    pub ip_address: Option<String>,
    pub whois_raw: Option<String>,
    pub ttl_seconds: u32,
    pub hosting_organization: Option<String>,
}

/// Cached DNS/WHOIS information for one domain, keyed by normalized name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRecord {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub ip_address: Option<Arc<str>>,
    pub updated_at: DateTime<Utc>,
    pub ttl_seconds: u32,
    pub hosting_organization: Option<Arc<str>>,
    pub whois_raw: Option<Arc<str>>,
}

impl DomainRecord {
    pub fn from_refresh(name: &str, refresh: RefreshResult, now: DateTime<Utc>) -> Self {
        let mut record = Self {
            id: None,
            name: Arc::from(name),
            ip_address: None,
            updated_at: now,
            ttl_seconds: DEFAULT_TTL_SECONDS,
            hosting_organization: None,
            whois_raw: None,
        };
        record.apply_refresh(refresh, now);
        record
    }

    /// Overwrite every refreshable field and reset `updated_at`.
    pub fn apply_refresh(&mut self, refresh: RefreshResult, now: DateTime<Utc>) {
        self.ip_address = refresh.ip_address.map(Arc::from);
        self.whois_raw = refresh.whois_raw.map(Arc::from);
        self.ttl_seconds = refresh.ttl_seconds;
        self.hosting_organization = refresh.hosting_organization.map(Arc::from);
        self.updated_at = now;
    }

    pub fn ttl(&self) -> Duration {
        Duration::seconds(i64::from(self.ttl_seconds))
    }

    /// A record is fresh while the time since its last refresh is at most
    /// its TTL; the boundary itself counts as fresh.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now - self.updated_at <= self.ttl()
    }

    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_fresh_at(now)
    }

    pub fn view(&self) -> DomainRecordView {
        DomainRecordView::from(self)
    }
}

/// Public projection of a [`DomainRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecordView {
    pub name: String,
    pub ip: Option<String>,
    pub hosted_at: Option<String>,
}

impl From<&DomainRecord> for DomainRecordView {
    fn from(record: &DomainRecord) -> Self {
        Self {
            name: record.name.to_string(),
            ip: record.ip_address.as_ref().map(|s| s.to_string()),
            hosted_at: record.hosting_organization.as_ref().map(|s| s.to_string()),
        }
    }
}
