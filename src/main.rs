use std::path::Path;
use std::process::ExitCode;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pricemaster::db::establish_connection_pool;
use pricemaster::models::config::AppConfig;
use pricemaster::repository::DieselRepository;
use pricemaster::services::production_history::get_total_production_value;
use pricemaster::services::products::list_products;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

fn run() -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load configuration: {e}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let pool = establish_connection_pool(&config.database_url)
        .map_err(|e| format!("Failed to open database {}: {e}", config.database_url))?;

    {
        let mut conn = pool
            .get()
            .map_err(|e| format!("Failed to get a database connection: {e}"))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| format!("Failed to run migrations: {e}"))?;
        log::info!("Applied {} pending migrations", applied.len());
    }

    let path = Path::new(&config.database_url);
    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    log::info!("Database: {}", path.display());

    let repo = DieselRepository::new(pool);
    let products = list_products(&repo).map_err(|e| e.to_string())?;
    log::info!("Catalog holds {} products", products.len());

    let total = get_total_production_value(&repo).map_err(|e| e.to_string())?;
    log::info!("Total production value: {total}");

    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
