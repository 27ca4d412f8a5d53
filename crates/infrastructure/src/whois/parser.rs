//! Line-oriented parsing of WHOIS responses (RFC 3912)
//!
//! Responses are free text; most registries emit `key: value` lines, with
//! `%` or `#` comment lines mixed in.

/// Keys that point at a more authoritative server.
const REFERRAL_KEYS: &[&str] = &["refer", "whois", "ReferralServer"];

/// Keys naming the organization that holds a network or domain, by priority.
const ORGANIZATION_KEYS: &[&str] = &[
    "OrgName",
    "org-name",
    "Organization",
    "Registrant Organization",
    "owner",
    "descr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisServer {
    pub host: String,
    pub port: u16,
}

impl WhoisServer {
    /// Accepts `host`, `host:port` and the `whois://` / `rwhois://` URL forms
    /// used by ARIN referrals.
    pub fn parse(value: &str, default_port: u16) -> Option<Self> {
        let value = value.trim();
        let value = value
            .split_once("://")
            .map_or(value, |(_, rest)| rest)
            .trim_end_matches('/');

        if value.is_empty() || value.contains(char::is_whitespace) {
            return None;
        }

        if let Some((host, port)) = value.rsplit_once(':') {
            if let Ok(port) = port.parse::<u16>() {
                if !host.is_empty() && !host.contains(':') {
                    return Some(Self {
                        host: host.to_string(),
                        port,
                    });
                }
            }
        }

        Some(Self {
            host: value.to_string(),
            port: default_port,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl std::fmt::Display for WhoisServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

fn fields(response: &str) -> impl Iterator<Item = (&str, &str)> {
    response.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') || line.starts_with('#') {
            return None;
        }
        let (key, value) = line.split_once(':')?;
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some((key.trim(), value))
    })
}

fn first_value<'a>(response: &'a str, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|wanted| {
        fields(response)
            .find(|(key, _)| key.eq_ignore_ascii_case(wanted))
            .map(|(_, value)| value)
    })
}

/// Next server to ask, if the response refers elsewhere.
pub fn referral_server(response: &str, default_port: u16) -> Option<WhoisServer> {
    first_value(response, REFERRAL_KEYS).and_then(|value| WhoisServer::parse(value, default_port))
}

pub fn organization_name(response: &str) -> Option<String> {
    first_value(response, ORGANIZATION_KEYS).map(str::to_string)
}
