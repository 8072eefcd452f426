//! Daily event scheduler server binary.
//!
//! Start the server with:
//! ```bash
//! SCHEDULER_PORT=8080 cargo run -p scheduler-server
//! ```

use clap::Parser;
use scheduler_api::{config::DEFAULT_PORT, serve, ApiConfig, AppState};
use scheduler_core::EventManager;
use tracing_subscriber::EnvFilter;

/// Daily event scheduler - serve a day's non-overlapping events over HTTP
#[derive(Parser, Debug)]
#[command(name = "scheduler-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "SCHEDULER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(short, long, env = "SCHEDULER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Allowed CORS origin, repeatable ("*" allows any)
    #[arg(long = "cors-origin", env = "SCHEDULER_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Vec<String>,

    /// Start with an empty day instead of the example events
    #[arg(long)]
    no_seed: bool,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "scheduler_server=info,scheduler_api=info",
            1 => "scheduler_server=debug,scheduler_api=debug,tower_http=info",
            _ => "trace",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let manager = EventManager::new();
    if args.no_seed {
        tracing::info!("Starting with an empty day");
    } else {
        let seeded = manager.seed_examples();
        tracing::info!(seeded, "Seeded example events");
    }

    let config = ApiConfig::new(args.host, args.port).with_cors_origins(args.cors_origins);
    tracing::debug!(cors_origins = ?config.cors_origins, "CORS configured");

    let state = AppState::new(config.clone(), manager);
    serve(config, state).await?;

    Ok(())
}
