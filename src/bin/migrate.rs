//! Apply or revert schema migrations.
//!
//! `migrate` or `migrate up` applies every pending migration;
//! `migrate down` reverts the most recent one.

use tenancy_api::{apply_migrations, connect, logging, revert_last, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing("tenancy_api=info");
    let settings = Settings::from_env()?;
    let pool = connect(&settings).await?;

    match std::env::args().nth(1).as_deref() {
        None | Some("up") => {
            let applied = apply_migrations(&pool).await?;
            if applied.is_empty() {
                tracing::info!("schema is up to date");
            } else {
                tracing::info!(?applied, "migrations applied");
            }
        }
        Some("down") => match revert_last(&pool).await? {
            Some(version) => tracing::info!(version, "migration reverted"),
            None => tracing::info!("nothing to revert"),
        },
        Some(other) => {
            eprintln!("unknown command '{other}'; expected 'up' or 'down'");
            std::process::exit(2);
        }
    }
    pool.close().await;
    Ok(())
}
