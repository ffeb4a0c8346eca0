use clap::Parser;
use shelfmatch_api::{ApiConfig, RestApi, DEFAULT_MAX_BUDGET};
use shelfmatch_storage::CatalogStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Product recommendation server
#[derive(Parser, Debug)]
#[command(name = "shelfmatch")]
#[command(about = "Recommend alternative products within a category and budget", long_about = None)]
struct Args {
    /// Path to the product catalog (JSON array)
    #[arg(short, long, default_value = "./data.json")]
    catalog: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Budget applied when a request does not set one
    #[arg(long, default_value_t = DEFAULT_MAX_BUDGET)]
    default_budget: f64,

    /// Log filter, e.g. `debug` or `info,shelfmatch_similarity=debug`; RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_level)?,
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting ShelfMatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);

    let store = Arc::new(CatalogStore::open(&args.catalog)?);
    let config = ApiConfig {
        port: args.http_port,
        default_max_budget: args.default_budget,
        ..ApiConfig::default()
    };

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(store, config).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
