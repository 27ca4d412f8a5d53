use hostscope_application::use_cases::GetDomainInfoUseCase;
use hostscope_domain::TldRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_domain_info: Arc<GetDomainInfoUseCase>,
    pub tld_registry: Arc<TldRegistry>,
}
