pub mod domains;

// Re-export use cases
pub use domains::GetDomainInfoUseCase;
