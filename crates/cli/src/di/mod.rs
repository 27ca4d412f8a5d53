mod repositories;
mod services;
mod use_cases;

pub use repositories::Repositories;
pub use services::Services;
pub use use_cases::UseCases;
