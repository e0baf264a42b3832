use anyhow::Result;
use clap::{ArgAction, Parser};
use encurtador::config::Config;
use encurtador::server;
use tracing_subscriber::EnvFilter;

/// URL shortener with in-memory storage and asynchronous click counting.
#[derive(Parser)]
#[command(name = "encurtador")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Listening port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Per-request logging on/off; a bare `-l` turns it on (overrides REQUEST_LOGGING)
    #[arg(
        short = 'l',
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    request_logging: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?.with_overrides(cli.port, cli.request_logging);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
