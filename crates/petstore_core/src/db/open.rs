//! Connection bootstrap for the pet database.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Apply the pragmas the store relies on.
//! - Create the `kind`/`pet` tables before returning the connection.
//!
//! # Invariants
//! - Returned connections enforce foreign keys (`pet.kind_id -> kind.id`).
//! - Returned connections wait up to `BUSY_TIMEOUT` on a locked database
//!   and then surface `SQLITE_BUSY` to the caller.

use super::schema::ensure_schema;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) a pet database file and ensures its tables exist.
///
/// # Side effects
/// - Creates the file when it does not exist yet.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=db_open module=db status=start mode=file path={}",
        path.display()
    );

    let connection = Connection::open(path).map_err(|err| {
        error!(
            "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        err
    })?;

    finish_open(connection, "file", started_at)
}

/// Opens a private in-memory pet database with the full schema applied.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let connection = Connection::open_in_memory().map_err(|err| {
        error!(
            "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        err
    })?;

    finish_open(connection, "memory", started_at)
}

fn finish_open(
    connection: Connection,
    mode: &'static str,
    started_at: Instant,
) -> DbResult<Connection> {
    match configure(&connection) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(connection)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn configure(connection: &Connection) -> DbResult<()> {
    connection.execute_batch("PRAGMA foreign_keys = ON;")?;
    connection.busy_timeout(BUSY_TIMEOUT)?;
    ensure_schema(connection)?;
    Ok(())
}
