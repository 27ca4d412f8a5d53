use hostscope_infrastructure::repositories::SqliteDomainRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub domain_record: Arc<SqliteDomainRecordRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            domain_record: Arc::new(SqliteDomainRecordRepository::new(pool)),
        }
    }
}
