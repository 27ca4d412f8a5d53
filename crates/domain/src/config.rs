pub mod database;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod tld;
pub mod whois;

pub use database::DatabaseConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use tld::TldConfig;
pub use whois::WhoisConfig;
