use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhoisConfig {
    /// First server asked; its `refer:` line points at the authoritative one.
    #[serde(default = "default_root_server")]
    pub root_server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// How many referrals are followed after the root server.
    #[serde(default = "default_max_referrals")]
    pub max_referrals: u8,
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            max_referrals: default_max_referrals(),
        }
    }
}

impl WhoisConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

fn default_root_server() -> String {
    "whois.iana.org".to_string()
}

fn default_port() -> u16 {
    43
}

fn default_query_timeout_ms() -> u64 {
    10_000
}

fn default_max_referrals() -> u8 {
    2
}
