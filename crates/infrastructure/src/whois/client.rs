use super::parser::{organization_name, referral_server, WhoisServer};
use async_trait::async_trait;
use hostscope_application::ports::{WhoisClient, WhoisResponse};
use hostscope_domain::config::WhoisConfig;
use hostscope_domain::DomainError;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, instrument, warn};

/// Upper bound on a single WHOIS response.
const MAX_RESPONSE_SIZE: u64 = 1024 * 1024;

/// WHOIS over TCP (RFC 3912).
///
/// Starts at the root server and follows referrals up to `max_referrals`
/// hops. The last response obtained is the authoritative one.
pub struct TcpWhoisClient {
    root: WhoisServer,
    query_timeout: Duration,
    max_referrals: u8,
}

impl TcpWhoisClient {
    pub fn new(root: WhoisServer, query_timeout: Duration, max_referrals: u8) -> Self {
        Self {
            root,
            query_timeout,
            max_referrals,
        }
    }

    pub fn from_config(config: &WhoisConfig) -> Result<Self, DomainError> {
        let root = WhoisServer::parse(&config.root_server, config.port).ok_or_else(|| {
            DomainError::WhoisFailed(format!(
                "Invalid WHOIS root server '{}'",
                config.root_server
            ))
        })?;
        Ok(Self::new(root, config.query_timeout(), config.max_referrals))
    }

    async fn fetch(&self, server: &WhoisServer, target: &str) -> Result<String, DomainError> {
        let timeout = self.query_timeout;

        let mut stream = tokio::time::timeout(timeout, TcpStream::connect(server.address()))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| {
                DomainError::WhoisFailed(format!("Failed to connect to {}: {}", server, e))
            })?;

        let request = format!("{}\r\n", target);
        tokio::time::timeout(timeout, stream.write_all(request.as_bytes()))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| {
                DomainError::WhoisFailed(format!("Failed to send query to {}: {}", server, e))
            })?;

        let mut response = Vec::new();
        tokio::time::timeout(
            timeout,
            (&mut stream)
                .take(MAX_RESPONSE_SIZE)
                .read_to_end(&mut response),
        )
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: server.to_string(),
        })?
        .map_err(|e| {
            DomainError::WhoisFailed(format!("Failed to read response from {}: {}", server, e))
        })?;

        debug!(server = %server, bytes = response.len(), "WHOIS response received");

        Ok(String::from_utf8_lossy(&response).into_owned())
    }
}

#[async_trait]
impl WhoisClient for TcpWhoisClient {
    #[instrument(skip(self))]
    async fn query(&self, target: &str) -> Result<WhoisResponse, DomainError> {
        let mut server = self.root.clone();
        let mut raw = self.fetch(&server, target).await?;

        for _ in 0..self.max_referrals {
            let next = match referral_server(&raw, self.root.port) {
                Some(next) if next != server => next,
                _ => break,
            };

            match self.fetch(&next, target).await {
                Ok(response) => {
                    debug!(target = %target, from = %server, to = %next, "Followed WHOIS referral");
                    server = next;
                    raw = response;
                }
                Err(e) => {
                    warn!(
                        target = %target,
                        server = %next,
                        error = %e,
                        "WHOIS referral failed, keeping previous response"
                    );
                    break;
                }
            }
        }

        Ok(WhoisResponse {
            organization_name: organization_name(&raw),
            raw,
        })
    }
}
