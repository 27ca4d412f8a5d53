use chrono::Utc;
use hostscope_domain::{
    normalize_domain_name, DomainError, DomainRecord, DomainRecordView, RefreshResult,
    ValidationOutcome, DEFAULT_TTL_SECONDS,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::{DnsResolver, DomainRecordRepository, DomainValidator, WhoisClient};

/// Serves a domain's DNS/WHOIS/hosting view from the store while it is
/// within its TTL, and refreshes it from the external sources otherwise.
pub struct GetDomainInfoUseCase {
    validator: Arc<dyn DomainValidator>,
    repository: Arc<dyn DomainRecordRepository>,
    dns_resolver: Arc<dyn DnsResolver>,
    whois_client: Arc<dyn WhoisClient>,
}

impl GetDomainInfoUseCase {
    pub fn new(
        validator: Arc<dyn DomainValidator>,
        repository: Arc<dyn DomainRecordRepository>,
        dns_resolver: Arc<dyn DnsResolver>,
        whois_client: Arc<dyn WhoisClient>,
    ) -> Self {
        Self {
            validator,
            repository,
            dns_resolver,
            whois_client,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, raw_name: &str) -> Result<DomainRecordView, DomainError> {
        if let ValidationOutcome::Invalid(violation) = self.validator.validate(Some(raw_name)) {
            warn!(domain = %raw_name, reason = %violation, "Domain name rejected");
            return Err(DomainError::InvalidDomainName(violation));
        }

        let name = normalize_domain_name(raw_name);

        match self.lookup(&name).await {
            Ok(view) => Ok(view),
            Err(e) => {
                error!(domain = %name, error = %e, "Failed to fetch domain information");
                Err(DomainError::LookupFailed { domain: name })
            }
        }
    }

    async fn lookup(&self, name: &str) -> Result<DomainRecordView, DomainError> {
        let existing = self.repository.find_by_name(name).await?;

        if let Some(record) = &existing {
            if record.is_fresh_at(Utc::now()) {
                debug!(domain = %name, updated_at = %record.updated_at, "Serving cached record");
                return Ok(record.view());
            }
        }

        let refresh = self.refresh(name).await?;
        let now = Utc::now();

        let record = match existing {
            Some(mut record) => {
                record.apply_refresh(refresh, now);
                self.repository.update(&record).await?;
                record
            }
            None => {
                self.repository
                    .insert(&DomainRecord::from_refresh(name, refresh, now))
                    .await?
            }
        };

        info!(
            domain = %name,
            ip = ?record.ip_address,
            ttl = record.ttl_seconds,
            hosted_at = ?record.hosting_organization,
            "Domain record refreshed"
        );

        Ok(record.view())
    }

    /// WHOIS(domain), then DNS A, then WHOIS(ip) when an address resolved.
    async fn refresh(&self, name: &str) -> Result<RefreshResult, DomainError> {
        let whois = self.whois_client.query(name).await?;
        let answer = self.dns_resolver.query_a(name).await?;

        let first = answer.first();
        let ip_address = first.map(|a| a.address.to_string());
        let ttl_seconds = first.map_or(DEFAULT_TTL_SECONDS, |a| a.time_to_live);

        let hosting_organization = match &ip_address {
            Some(ip) => self.whois_client.query(ip).await?.organization_name,
            None => None,
        };

        Ok(RefreshResult {
            ip_address,
            whois_raw: Some(whois.raw),
            ttl_seconds,
            hosting_organization,
        })
    }
}
