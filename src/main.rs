//! Mentora server binary.

use mentora::auth::ensure_bootstrap_admin;
use mentora::db::Database;
use mentora::web::WebServer;
use mentora::{logging, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml ({e}), using defaults");
            Config::default()
        }
    };

    if logging::init(&config.logging).is_err() {
        logging::init_console_only(&config.logging.level);
    }

    tracing::info!("Starting Mentora server");

    let db = Database::open(&config.database.path).await?;
    ensure_bootstrap_admin(db.pool(), &config.auth).await?;

    let server = WebServer::new(&config, db)?;
    tracing::info!("Listening on {}", server.addr());

    server.run().await?;
    Ok(())
}
