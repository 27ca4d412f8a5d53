use hostscope_domain::DomainRecordView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfoResponse {
    pub name: String,
    pub ip: Option<String>,
    pub hosted_at: Option<String>,
}

impl From<DomainRecordView> for DomainInfoResponse {
    fn from(view: DomainRecordView) -> Self {
        Self {
            name: view.name,
            ip: view.ip,
            hosted_at: view.hosted_at,
        }
    }
}
