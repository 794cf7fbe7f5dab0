use infrastructure::AppConfig;
use infrastructure::database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenv::dotenv().ok();

    let config_dir = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let config = AppConfig::load(&config_dir)?;

    println!("Connecting to database...");
    let pool = database::connect(&config.database).await?;

    println!("Running migrations...");
    database::run_migrations(&pool).await?;

    println!("✅ Migrations applied successfully.");

    Ok(())
}
