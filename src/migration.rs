//! Versioned schema migrations, embedded from `migrations/`.
//!
//! Each migration is a reversible `.up.sql`/`.down.sql` pair. The sqlx
//! migrator records applied versions in `_sqlx_migrations`, runs each one in
//! its own transaction and holds an advisory lock for the whole run, so
//! several processes starting at once apply each migration exactly once.

use crate::error::AppError;
use sqlx::migrate::{Migrate, Migrator};
use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Apply every pending migration in version order. Returns the versions applied.
pub async fn apply_migrations(pool: &PgPool) -> Result<Vec<i64>, AppError> {
    let before = applied_versions(pool).await?;
    MIGRATOR.run(pool).await?;
    let after = applied_versions(pool).await?;
    let applied: Vec<i64> = after.into_iter().filter(|v| !before.contains(v)).collect();
    for version in &applied {
        tracing::info!(version, "migration applied");
    }
    Ok(applied)
}

/// Revert the most recently applied migration, if any. Returns its version.
pub async fn revert_last(pool: &PgPool) -> Result<Option<i64>, AppError> {
    let applied = applied_versions(pool).await?;
    let Some((&latest, earlier)) = applied.split_last() else {
        return Ok(None);
    };
    let target = earlier.last().copied().unwrap_or(0);
    tracing::info!(version = latest, "reverting migration");
    MIGRATOR.undo(pool, target).await?;
    Ok(Some(latest))
}

async fn applied_versions(pool: &PgPool) -> Result<Vec<i64>, AppError> {
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;
    let mut versions: Vec<i64> = conn
        .list_applied_migrations()
        .await?
        .into_iter()
        .map(|m| m.version)
        .collect();
    versions.sort_unstable();
    Ok(versions)
}
