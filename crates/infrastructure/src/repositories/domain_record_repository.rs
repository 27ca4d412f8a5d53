use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use hostscope_application::ports::DomainRecordRepository;
use hostscope_domain::{DomainError, DomainRecord, DEFAULT_TTL_SECONDS};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument, warn};

type DomainRecordRow = (
    i64,
    String,
    Option<String>,
    String,
    i64,
    Option<String>,
    Option<String>,
);

pub struct SqliteDomainRecordRepository {
    pool: SqlitePool,
}

impl SqliteDomainRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: DomainRecordRow) -> Result<DomainRecord, DomainError> {
        let (id, name, ip_address, updated_at, ttl_seconds, hosting_organization, whois_raw) = row;

        let updated_at = DateTime::parse_from_rfc3339(&updated_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                error!(domain = %name, error = %e, "Stored updated_at is not RFC 3339");
                DomainError::DatabaseError(format!("Invalid updated_at for '{}': {}", name, e))
            })?;

        let ttl_seconds = u32::try_from(ttl_seconds).unwrap_or_else(|_| {
            warn!(domain = %name, ttl = ttl_seconds, "Stored TTL out of range, using default");
            DEFAULT_TTL_SECONDS
        });

        Ok(DomainRecord {
            id: Some(id),
            name: Arc::from(name.as_str()),
            ip_address: ip_address.map(|s| Arc::from(s.as_str())),
            updated_at,
            ttl_seconds,
            hosting_organization: hosting_organization.map(|s| Arc::from(s.as_str())),
            whois_raw: whois_raw.map(|s| Arc::from(s.as_str())),
        })
    }

    fn format_timestamp(at: &DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

#[async_trait]
impl DomainRecordRepository for SqliteDomainRecordRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<DomainRecord>, DomainError> {
        let row = sqlx::query_as::<_, DomainRecordRow>(
            "SELECT id, name, ip_address, updated_at, ttl_seconds, hosting_organization, whois_raw
             FROM domains WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query domain record by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_record).transpose()
    }

    #[instrument(skip(self, record), fields(domain = %record.name))]
    async fn insert(&self, record: &DomainRecord) -> Result<DomainRecord, DomainError> {
        let (id,) = sqlx::query_as::<_, (i64,)>(
            "INSERT INTO domains (name, ip_address, updated_at, ttl_seconds, hosting_organization, whois_raw)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(record.name.as_ref())
        .bind(record.ip_address.as_deref())
        .bind(Self::format_timestamp(&record.updated_at))
        .bind(i64::from(record.ttl_seconds))
        .bind(record.hosting_organization.as_deref())
        .bind(record.whois_raw.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert domain record");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut stored = record.clone();
        stored.id = Some(id);
        Ok(stored)
    }

    #[instrument(skip(self, record), fields(domain = %record.name))]
    async fn update(&self, record: &DomainRecord) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE domains
             SET ip_address = ?, updated_at = ?, ttl_seconds = ?, hosting_organization = ?, whois_raw = ?
             WHERE name = ?",
        )
        .bind(record.ip_address.as_deref())
        .bind(Self::format_timestamp(&record.updated_at))
        .bind(i64::from(record.ttl_seconds))
        .bind(record.hosting_organization.as_deref())
        .bind(record.whois_raw.as_deref())
        .bind(record.name.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update domain record");
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Domain record '{}' not found",
                record.name
            )));
        }

        Ok(())
    }
}
