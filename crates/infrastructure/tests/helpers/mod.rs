mod dns_server_mock;
mod whois_server_mock;

pub use dns_server_mock::{MockBehavior, MockDnsServer};
pub use whois_server_mock::MockWhoisServer;
