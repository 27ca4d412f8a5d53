use clap::Parser;
use hostscope_api::AppState;
use hostscope_domain::CliOverrides;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "hostscope")]
#[command(version)]
#[command(about = "Hostscope - cached DNS, WHOIS and hosting lookups for domain names")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// IANA TLD list (tlds-alpha-by-domain.txt)
    #[arg(long, value_name = "FILE")]
    tld_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        tld_path: cli.tld_file,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        "Starting Hostscope v{}",
        env!("CARGO_PKG_VERSION")
    );

    let tld_registry = bootstrap::load_tld_registry(&config.tld)?;
    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let services = di::Services::new(&config, tld_registry.clone())?;
    let use_cases = di::UseCases::new(&repos, &services);

    let app_state = AppState {
        get_domain_info: use_cases.get_domain_info,
        tld_registry,
    };

    let bind_ip: IpAddr = config
        .server
        .bind_address
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", config.server.bind_address, e))?;
    let web_addr = SocketAddr::new(bind_ip, config.server.web_port);

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
