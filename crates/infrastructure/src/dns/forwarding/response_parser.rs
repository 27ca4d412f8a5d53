use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use hostscope_application::ports::ARecord;
use hostscope_domain::DomainError;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// A records from the answer section, in wire order.
    pub a_records: Vec<ARecord>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// NOERROR and NXDOMAIN are both final answers; anything else means the
    /// upstream could not answer and the next one should be tried.
    pub fn is_server_error(&self) -> bool {
        !matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let id = message.id();
        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut a_records = Vec::new();
        for record in message.answers() {
            if let RData::A(a) = record.data() {
                a_records.push(ARecord {
                    address: a.0,
                    time_to_live: record.ttl(),
                });
            }
        }

        debug!(
            id = id,
            rcode = ?rcode,
            addresses = a_records.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id,
            rcode,
            truncated,
            a_records,
        })
    }
}
