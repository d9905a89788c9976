//! Pet repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Pet CRUD against the `pet` table.
//! - The joined pet listing (`pet INNER JOIN kind`).
//!
//! # Invariants
//! - Listing excludes pets whose `kind_id` does not resolve to a kind row.
//! - Single-pet reads touch the `pet` table only and expose `kind_id`.

use crate::model::kind::KindId;
use crate::model::pet::{NewPet, Pet, PetId, PetWithKind};
use crate::repo::RepoResult;
use rusqlite::{params, Connection, OptionalExtension, Row};

const PET_WITH_KIND_SELECT_SQL: &str = "SELECT
    pet.id,
    pet.name,
    pet.age,
    pet.owner,
    pet.kind_id,
    kind.name AS kind_name,
    kind.food,
    kind.sound
FROM pet
JOIN kind ON pet.kind_id = kind.id";

/// Repository interface for pet CRUD operations.
pub trait PetRepository {
    fn list_pets_with_kind(&self) -> RepoResult<Vec<PetWithKind>>;
    fn get_pet(&self, id: PetId) -> RepoResult<Option<Pet>>;
    fn create_pet(&self, pet: &NewPet) -> RepoResult<PetId>;
    fn update_pet(&self, id: PetId, pet: &NewPet) -> RepoResult<()>;
    fn delete_pet(&self, id: PetId) -> RepoResult<()>;
}

/// SQLite-backed pet repository.
pub struct SqlitePetRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePetRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PetRepository for SqlitePetRepository<'_> {
    fn list_pets_with_kind(&self) -> RepoResult<Vec<PetWithKind>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{PET_WITH_KIND_SELECT_SQL} ORDER BY pet.id ASC;"))?;
        let pets = stmt
            .query_map([], parse_pet_with_kind_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pets)
    }

    fn get_pet(&self, id: PetId) -> RepoResult<Option<Pet>> {
        let pet = self
            .conn
            .query_row(
                "SELECT id, name, age, owner, kind_id FROM pet WHERE id = ?1;",
                [id],
                parse_pet_row,
            )
            .optional()?;
        Ok(pet)
    }

    fn create_pet(&self, pet: &NewPet) -> RepoResult<PetId> {
        self.conn.execute(
            "INSERT INTO pet (name, age, kind_id, owner) VALUES (?1, ?2, ?3, ?4);",
            params![pet.name, pet.age, pet.kind_id, pet.owner],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_pet(&self, id: PetId, pet: &NewPet) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE pet SET name = ?1, age = ?2, kind_id = ?3, owner = ?4 WHERE id = ?5;",
            params![pet.name, pet.age, pet.kind_id, pet.owner, id],
        )?;
        Ok(())
    }

    fn delete_pet(&self, id: PetId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM pet WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_pet_row(row: &Row<'_>) -> rusqlite::Result<Pet> {
    Ok(Pet {
        id: row.get("id")?,
        name: row.get("name")?,
        age: row.get("age")?,
        owner: row.get("owner")?,
        kind_id: row.get::<_, KindId>("kind_id")?,
    })
}

fn parse_pet_with_kind_row(row: &Row<'_>) -> rusqlite::Result<PetWithKind> {
    Ok(PetWithKind {
        id: row.get("id")?,
        name: row.get("name")?,
        age: row.get("age")?,
        owner: row.get("owner")?,
        kind_id: row.get("kind_id")?,
        kind_name: row.get("kind_name")?,
        food: row.get("food")?,
        sound: row.get("sound")?,
    })
}
