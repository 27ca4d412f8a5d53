pub mod client;
pub mod parser;

pub use client::TcpWhoisClient;
pub use parser::{organization_name, referral_server, WhoisServer};
