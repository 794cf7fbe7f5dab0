use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::FootprintService;
use footprint_server::{api, setup_app_state};
use infrastructure::database::{connect, run_migrations};
use infrastructure::{
    AppConfig, FileAdvisorySource, PostgresReportRepository, PostgresSectorRepository,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding default.toml and <RUN_MODE>.toml
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// API port, overrides server.port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,footprint_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("Footprint server starting...");

    let mut config = AppConfig::load(&args.config_dir)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // 1. Database
    info!("Connecting to database...");
    let pool = connect(&config.database).await?;
    run_migrations(&pool).await?;
    info!("Migrations applied");

    // 2. Advisory templates
    let advisory = FileAdvisorySource::new(&config.advisory.templates_dir);
    if !advisory.templates_dir().is_dir() {
        warn!(
            templates_dir = %config.advisory.templates_dir,
            "Templates directory not found, recommendations will use fallback text"
        );
    }

    // 3. Service and router
    let service = FootprintService::new(
        Arc::new(PostgresReportRepository::new(pool.clone())),
        Arc::new(PostgresSectorRepository::new(pool)),
        Arc::new(advisory),
    )
    .with_reference_url(config.advisory.reference_url.clone());

    let app = api::create_router(setup_app_state(service));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Footprint server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
