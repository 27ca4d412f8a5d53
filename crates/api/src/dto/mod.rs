pub mod api_response;
pub mod domain;
pub mod health;

pub use api_response::ApiResponse;
pub use domain::DomainInfoResponse;
pub use health::HealthResponse;
