use super::{Repositories, Services};
use hostscope_application::use_cases::GetDomainInfoUseCase;
use std::sync::Arc;

pub struct UseCases {
    pub get_domain_info: Arc<GetDomainInfoUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, services: &Services) -> Self {
        Self {
            get_domain_info: Arc::new(GetDomainInfoUseCase::new(
                services.validator.clone(),
                repos.domain_record.clone(),
                services.dns_resolver.clone(),
                services.whois_client.clone(),
            )),
        }
    }
}
