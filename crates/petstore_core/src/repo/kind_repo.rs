//! Kind repository contract and SQLite implementation.
//!
//! # Invariants
//! - Listing follows storage order (`ORDER BY id`, i.e. insertion order).
//! - Deleting a kind still referenced by a pet fails with the SQLite
//!   foreign-key error; no cascade or pre-check happens here.

use crate::model::kind::{Kind, KindId, NewKind};
use crate::repo::RepoResult;
use rusqlite::{params, Connection, OptionalExtension, Row};

const KIND_SELECT_SQL: &str = "SELECT id, name, food, sound FROM kind";

/// Repository interface for kind CRUD operations.
pub trait KindRepository {
    fn list_kinds(&self) -> RepoResult<Vec<Kind>>;
    fn get_kind(&self, id: KindId) -> RepoResult<Option<Kind>>;
    fn create_kind(&self, kind: &NewKind) -> RepoResult<KindId>;
    fn update_kind(&self, id: KindId, kind: &NewKind) -> RepoResult<()>;
    fn delete_kind(&self, id: KindId) -> RepoResult<()>;
}

/// SQLite-backed kind repository.
pub struct SqliteKindRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKindRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KindRepository for SqliteKindRepository<'_> {
    fn list_kinds(&self) -> RepoResult<Vec<Kind>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{KIND_SELECT_SQL} ORDER BY id ASC;"))?;
        let kinds = stmt
            .query_map([], parse_kind_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(kinds)
    }

    fn get_kind(&self, id: KindId) -> RepoResult<Option<Kind>> {
        let kind = self
            .conn
            .query_row(
                &format!("{KIND_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_kind_row,
            )
            .optional()?;
        Ok(kind)
    }

    fn create_kind(&self, kind: &NewKind) -> RepoResult<KindId> {
        self.conn.execute(
            "INSERT INTO kind (name, food, sound) VALUES (?1, ?2, ?3);",
            params![kind.name, kind.food, kind.sound],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_kind(&self, id: KindId, kind: &NewKind) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE kind SET name = ?1, food = ?2, sound = ?3 WHERE id = ?4;",
            params![kind.name, kind.food, kind.sound, id],
        )?;
        Ok(())
    }

    fn delete_kind(&self, id: KindId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM kind WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_kind_row(row: &Row<'_>) -> rusqlite::Result<Kind> {
    Ok(Kind {
        id: row.get("id")?,
        name: row.get("name")?,
        food: row.get("food")?,
        sound: row.get("sound")?,
    })
}
