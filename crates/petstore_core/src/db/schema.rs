//! `kind`/`pet` table definitions.
//!
//! # Invariants
//! - DDL uses `IF NOT EXISTS`; existing tables and rows are left untouched.
//! - `PRAGMA user_version` is neither read nor written, so files stamped by
//!   other tools open normally.

use super::DbResult;
use rusqlite::Connection;

/// DDL for the `kind` and `pet` tables.
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `kind` and `pet` tables when they are missing.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
