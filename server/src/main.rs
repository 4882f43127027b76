//! Tenancy API server: reads settings from the environment (and `.env`),
//! migrates the schema, then serves the API until Ctrl-C.

use tenancy_api::{apply_migrations, build_app, connect, logging, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    logging::init_tracing("tenancy_api=info,tower_http=info");

    let pool = connect(&settings).await?;
    apply_migrations(&pool).await?;

    let state = AppState::new(pool.clone(), &settings.secret_key);
    let app = build_app(state, &settings);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
