use clap::Parser;
use nslite_application::use_cases::Resolver;
use nslite_domain::CliOverrides;
use nslite_infrastructure::dns::{TracingReporter, UdpConnection};
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "nslite")]
#[command(version = "0.1.0")]
#[command(about = "nslite - minimal DNS stub resolver")]
struct Cli {
    /// Domain name to look up
    name: String,

    /// Record type (A, NS, CNAME, TXT, AAAA)
    #[arg(default_value = "A")]
    record_type: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server address
    #[arg(short = 's', long)]
    server: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Per-operation timeout in milliseconds (0 waits forever)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        port: cli.port,
        query_timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let server_addr = config.server_addr()?;
    info!(server = %server_addr, "Starting nslite v{}", env!("CARGO_PKG_VERSION"));
    match bootstrap::config_source(cli.config.as_deref()) {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    let connection = UdpConnection::connect(server_addr, config.query_timeout()).await?;
    let resolver = Resolver::new(
        Box::new(connection),
        config.record_types()?,
        Arc::new(TracingReporter::new()),
    );

    let result = resolver.resolve_by_name(&cli.name, &cli.record_type).await;
    resolver.close().await?;

    match result {
        Ok(response) => {
            print!("{}", response);
            Ok(())
        }
        Err(e) => {
            error!(domain = %cli.name, record_type = %cli.record_type, "Lookup failed: {}", e);
            Err(e.into())
        }
    }
}
