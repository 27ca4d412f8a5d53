pub mod domains;
pub mod health;

pub use health::health_check;
