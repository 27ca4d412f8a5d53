use hostscope_domain::config::TldConfig;
use hostscope_domain::TldRegistry;
use std::sync::Arc;
use tracing::{error, info};

pub fn load_tld_registry(cfg: &TldConfig) -> anyhow::Result<Arc<TldRegistry>> {
    let registry = TldRegistry::load(&cfg.path).map_err(|e| {
        error!(path = %cfg.path, error = %e, "Failed to load TLD list");
        anyhow::anyhow!(e)
    })?;

    info!(
        path = %cfg.path,
        tld_count = registry.tld_count(),
        "TLD list loaded"
    );

    Ok(Arc::new(registry))
}
