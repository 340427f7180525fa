use actix_web::HttpServer;
use actix_web::web::Data;
use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use hrms::{Config, Store, routes};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let store = Store::open(&config.database_url, config.db_max_connections)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    let server_addr = config.server_addr.clone();
    let store_data = Data::new(store.clone());
    let config_data = config.clone();

    HttpServer::new(move || routes::app(store_data.clone(), config_data.clone()))
        .bind(&server_addr)
        .with_context(|| format!("failed to bind {}", server_addr))?
        .run()
        .await?;

    info!("Server stopped");
    store.close().await;

    Ok(())
}
