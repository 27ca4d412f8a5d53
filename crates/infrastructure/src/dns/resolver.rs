use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, TcpTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::rr::RecordType;
use hostscope_application::ports::{DnsAnswer, DnsResolver};
use hostscope_domain::config::DnsConfig;
use hostscope_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Recursive A lookups against a fixed list of upstream resolvers.
///
/// Upstreams are tried in order; the first final answer (NOERROR or
/// NXDOMAIN) wins. Truncated UDP answers are retried over TCP against the
/// same upstream.
pub struct UpstreamDnsResolver {
    upstreams: Vec<SocketAddr>,
    query_timeout: Duration,
}

impl UpstreamDnsResolver {
    pub fn new(upstreams: Vec<SocketAddr>, query_timeout: Duration) -> Self {
        Self {
            upstreams,
            query_timeout,
        }
    }

    pub fn from_config(config: &DnsConfig) -> Result<Self, DomainError> {
        let upstreams = config
            .upstream_addrs()
            .map_err(DomainError::DnsQueryFailed)?;
        Ok(Self::new(upstreams, config.query_timeout()))
    }

    pub fn upstreams(&self) -> &[SocketAddr] {
        &self.upstreams
    }

    async fn query_upstream(
        &self,
        server: SocketAddr,
        id: u16,
        message: &[u8],
    ) -> Result<(DnsResponse, &'static str), DomainError> {
        let udp = UdpTransport::new(server);
        let mut response = udp.send(message, self.query_timeout).await?;
        let mut parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.truncated {
            debug!(server = %server, "Truncated UDP response, retrying over TCP");
            let tcp = TcpTransport::new(server);
            response = tcp.send(message, self.query_timeout).await?;
            parsed = ResponseParser::parse(&response.bytes)?;
        }

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {} from {}",
                parsed.id, id, server
            )));
        }

        if parsed.is_server_error() {
            return Err(DomainError::DnsQueryFailed(format!(
                "{} answered {:?}",
                server, parsed.rcode
            )));
        }

        Ok((parsed, response.protocol_used))
    }
}

#[async_trait]
impl DnsResolver for UpstreamDnsResolver {
    #[instrument(skip(self))]
    async fn query_a(&self, name: &str) -> Result<DnsAnswer, DomainError> {
        let (id, message) = MessageBuilder::build_query_with_id(name, RecordType::A)?;

        let mut last_error = None;
        for server in &self.upstreams {
            match self.query_upstream(*server, id, &message).await {
                Ok((response, protocol)) => {
                    debug!(
                        domain = %name,
                        server = %server,
                        protocol = protocol,
                        answers = response.a_records.len(),
                        nxdomain = response.is_nxdomain(),
                        "A query answered"
                    );
                    return Ok(DnsAnswer::new(response.a_records));
                }
                Err(e) => {
                    warn!(domain = %name, server = %server, error = %e, "Upstream query failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            DomainError::DnsQueryFailed("No upstream DNS servers configured".to_string())
        }))
    }
}
