mod get_domain_info;

pub use get_domain_info::GetDomainInfoUseCase;
