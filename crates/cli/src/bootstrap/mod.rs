pub mod config;
pub mod database;
pub mod logging;
pub mod tld;

pub use config::load_config;
pub use database::init_database;
pub use logging::init_logging;
pub use tld::load_tld_registry;
