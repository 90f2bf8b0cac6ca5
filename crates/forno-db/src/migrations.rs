//! # Database Migrations
//!
//! Schema migrations for the sales ledger, embedded at compile time from
//! `migrations/sqlite/` so the binary never depends on runtime SQL files.
//!
//! ## Adding New Migrations
//!
//! 1. Add a file under `migrations/sqlite/` with the next sequence number,
//!    named `NNN_description.sql` (e.g. `002_add_customer_index.sql`)
//! 2. Write idempotent SQL (`IF NOT EXISTS` where possible)
//! 3. **NEVER** modify an existing migration - its checksum is recorded

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies any migrations that have not run against this database yet.
///
/// Idempotent: sqlx tracks applied migrations (with checksums) in its
/// `_sqlx_migrations` table and runs each pending one in its own
/// transaction, in filename order.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!(embedded = MIGRATOR.migrations.len(), "Applying pending migrations");
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Returns `(embedded, applied)` migration counts, for diagnostics.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
        .unwrap_or(0);

    Ok((MIGRATOR.migrations.len(), applied as usize))
}
