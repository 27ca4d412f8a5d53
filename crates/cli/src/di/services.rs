use hostscope_domain::{Config, DomainError, DomainNameRules, TldRegistry};
use hostscope_infrastructure::dns::UpstreamDnsResolver;
use hostscope_infrastructure::whois::TcpWhoisClient;
use std::sync::Arc;
use tracing::info;

/// External collaborators of the lookup use case.
pub struct Services {
    pub validator: Arc<DomainNameRules>,
    pub dns_resolver: Arc<UpstreamDnsResolver>,
    pub whois_client: Arc<TcpWhoisClient>,
}

impl Services {
    pub fn new(config: &Config, tld_registry: Arc<TldRegistry>) -> Result<Self, DomainError> {
        let dns_resolver = UpstreamDnsResolver::from_config(&config.dns)?;
        let whois_client = TcpWhoisClient::from_config(&config.whois)?;

        info!(
            upstreams = ?dns_resolver.upstreams(),
            whois_root = %config.whois.root_server,
            max_referrals = config.whois.max_referrals,
            "Lookup services configured"
        );

        Ok(Self {
            validator: Arc::new(DomainNameRules::new(tld_registry)),
            dns_resolver: Arc::new(dns_resolver),
            whois_client: Arc::new(whois_client),
        })
    }
}
