//! Shared pet store handle.
//!
//! # Responsibility
//! - Own the single SQLite connection for a pet database.
//! - Validate caller drafts and delegate one statement per call to the
//!   kind/pet repositories.
//!
//! # Invariants
//! - A `PetStore` only exists after the connection opened and migrated
//!   successfully; there is no uninitialized state to misuse.
//! - Clones share one connection. Each call holds the connection lock for
//!   exactly one statement and autocommits.
//! - Errors are logged and returned unchanged; nothing is retried.

use crate::db::{open_db, open_db_in_memory};
use crate::model::kind::{Kind, KindDraft, KindId};
use crate::model::pet::{Pet, PetDraft, PetId, PetWithKind};
use crate::repo::kind_repo::{KindRepository, SqliteKindRepository};
use crate::repo::pet_repo::{PetRepository, SqlitePetRepository};
use crate::repo::RepoResult;
use log::{debug, error};
use parking_lot::{Mutex, MutexGuard};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Thread-safe handle over one pet database connection.
#[derive(Clone)]
pub struct PetStore {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl PetStore {
    /// Opens (or creates) the database file at `path` and applies the schema.
    ///
    /// Calling this again for the same path yields an independent store;
    /// the earlier one keeps working until its last clone is dropped.
    pub fn initialize(path: impl AsRef<Path>) -> RepoResult<Self> {
        let path = path.as_ref();
        let conn = open_db(path)?;
        Ok(Self::from_connection(conn, Some(path.to_path_buf())))
    }

    /// Opens a private in-memory store.
    pub fn in_memory() -> RepoResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self::from_connection(conn, None))
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        }
    }

    /// Backing file path, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }

    /// Lists every pet that has a resolvable kind, joined with that kind.
    pub fn get_pets(&self) -> RepoResult<Vec<PetWithKind>> {
        let conn = self.lock();
        SqlitePetRepository::new(&conn).list_pets_with_kind()
    }

    /// Reads one pet row without joining its kind.
    pub fn get_pet(&self, id: PetId) -> RepoResult<Option<Pet>> {
        let conn = self.lock();
        SqlitePetRepository::new(&conn).get_pet(id)
    }

    /// Inserts a pet and returns its assigned id.
    ///
    /// # Errors
    /// - `Validation` when `name`, `kind_id` or `owner` is absent.
    /// - `Db` constraint violation when `kind_id` references no kind.
    pub fn create_pet(&self, draft: &PetDraft) -> RepoResult<PetId> {
        let pet = draft.validate()?;
        let conn = self.lock();
        let id = SqlitePetRepository::new(&conn)
            .create_pet(&pet)
            .inspect_err(|err| log_write_error("create_pet", err))?;
        debug!("event=pet_create module=store status=ok pet_id={id} kind_id={}", pet.kind_id);
        Ok(id)
    }

    /// Overwrites every field of pet `id`; a missing id is not an error.
    pub fn update_pet(&self, id: PetId, draft: &PetDraft) -> RepoResult<()> {
        let pet = draft.validate()?;
        let conn = self.lock();
        SqlitePetRepository::new(&conn)
            .update_pet(id, &pet)
            .inspect_err(|err| log_write_error("update_pet", err))?;
        debug!("event=pet_update module=store status=ok pet_id={id}");
        Ok(())
    }

    pub fn delete_pet(&self, id: PetId) -> RepoResult<()> {
        let conn = self.lock();
        SqlitePetRepository::new(&conn)
            .delete_pet(id)
            .inspect_err(|err| log_write_error("delete_pet", err))?;
        debug!("event=pet_delete module=store status=ok pet_id={id}");
        Ok(())
    }

    /// Lists all kinds in insertion order.
    pub fn get_kinds(&self) -> RepoResult<Vec<Kind>> {
        let conn = self.lock();
        SqliteKindRepository::new(&conn).list_kinds()
    }

    pub fn get_kind(&self, id: KindId) -> RepoResult<Option<Kind>> {
        let conn = self.lock();
        SqliteKindRepository::new(&conn).get_kind(id)
    }

    /// Inserts a kind and returns its assigned id.
    pub fn create_kind(&self, draft: &KindDraft) -> RepoResult<KindId> {
        let kind = draft.validate()?;
        let conn = self.lock();
        let id = SqliteKindRepository::new(&conn)
            .create_kind(&kind)
            .inspect_err(|err| log_write_error("create_kind", err))?;
        debug!("event=kind_create module=store status=ok kind_id={id}");
        Ok(id)
    }

    /// Overwrites every field of kind `id`; a missing id is not an error.
    pub fn update_kind(&self, id: KindId, draft: &KindDraft) -> RepoResult<()> {
        let kind = draft.validate()?;
        let conn = self.lock();
        SqliteKindRepository::new(&conn)
            .update_kind(id, &kind)
            .inspect_err(|err| log_write_error("update_kind", err))?;
        debug!("event=kind_update module=store status=ok kind_id={id}");
        Ok(())
    }

    /// Deletes kind `id`.
    ///
    /// # Errors
    /// - `Db` constraint violation while any pet still references the kind.
    pub fn delete_kind(&self, id: KindId) -> RepoResult<()> {
        let conn = self.lock();
        SqliteKindRepository::new(&conn)
            .delete_kind(id)
            .inspect_err(|err| log_write_error("delete_kind", err))?;
        debug!("event=kind_delete module=store status=ok kind_id={id}");
        Ok(())
    }
}

fn log_write_error(operation: &str, err: &crate::repo::RepoError) {
    error!(
        "event=store_write module=store status=error op={} constraint={} error={}",
        operation,
        err.is_constraint_violation(),
        err
    );
}
