use anyhow::Context;
use product_service::{
    build_router, infrastructure::database::DatabaseManager, infrastructure::logger::Logger,
    AppState, Config, PgProductStore, ProductStore,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    Logger::init(&config.logging.level);

    info!("Starting product service...");
    match &config.source {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    let database = DatabaseManager::new(&config.database)
        .await
        .context("failed to connect to database")?;
    let store = PgProductStore::new(database.into_pool());
    store
        .init_schema()
        .await
        .context("failed to create products table")?;
    info!("Database schema ready");

    let app = build_router(AppState::new(Arc::new(store)));

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("🚀 Product service listening on http://{}", addr);
    info!("   GET    /products      - list products");
    info!("   POST   /products      - create product");
    info!("   GET    /products/:id  - get product");
    info!("   PUT    /products/:id  - update product");
    info!("   DELETE /products/:id  - delete product");
    info!("   GET    /health        - health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Product service shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT (Ctrl+C), initiating shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating shutdown..."),
    }
}
