//! Technology store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide existence, lookup, bulk insert and bulk delete APIs over the
//!   `technology` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert_all` persists either every row of a batch or none.
//! - Read paths reject rows with blank names instead of masking them.

use crate::db::DbError;
use crate::model::technology::{NewTechnology, Technology, TechnologyId};
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TECHNOLOGY_SELECT_SQL: &str = "SELECT id, name, description FROM technology";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store interface for technology records.
pub trait TechnologyRepository {
    /// Returns whether a technology with this exact name is stored.
    fn exists_by_name(&self, name: &str) -> RepoResult<bool>;
    /// Returns whether a technology row with this id is stored.
    fn exists_by_id(&self, id: TechnologyId) -> RepoResult<bool>;
    /// Inserts all rows in one transaction and returns them with assigned
    /// ids, in input order.
    fn insert_all(&self, rows: &[NewTechnology]) -> RepoResult<Vec<Technology>>;
    /// Returns the stored technologies whose id is in `ids`, ordered by id.
    fn find_by_ids(&self, ids: &[TechnologyId]) -> RepoResult<Vec<Technology>>;
    /// Deletes all rows whose id is in `ids`; returns the deleted count.
    fn delete_by_ids(&self, ids: &[TechnologyId]) -> RepoResult<usize>;
}

/// SQLite-backed technology store.
pub struct SqliteTechnologyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTechnologyRepository<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TechnologyRepository for SqliteTechnologyRepository<'_> {
    fn exists_by_name(&self, name: &str) -> RepoResult<bool> {
        let found = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM technology WHERE name = ?1);",
            params![name],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(found != 0)
    }

    fn exists_by_id(&self, id: TechnologyId) -> RepoResult<bool> {
        let found = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM technology WHERE id = ?1);",
            params![id],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(found != 0)
    }

    fn insert_all(&self, rows: &[NewTechnology]) -> RepoResult<Vec<Technology>> {
        let tx = self.conn.unchecked_transaction()?;
        let mut stored = Vec::with_capacity(rows.len());
        {
            let mut stmt =
                tx.prepare("INSERT INTO technology (name, description) VALUES (?1, ?2);")?;
            for row in rows {
                stmt.execute(params![row.name, row.description])?;
                stored.push(Technology {
                    id: tx.last_insert_rowid(),
                    name: row.name.clone(),
                    description: row.description.clone(),
                });
            }
        }
        tx.commit()?;
        Ok(stored)
    }

    fn find_by_ids(&self, ids: &[TechnologyId]) -> RepoResult<Vec<Technology>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = id_placeholders(ids.len());
        let mut stmt = self.conn.prepare(&format!(
            "{TECHNOLOGY_SELECT_SQL} WHERE id IN ({placeholders}) ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query(params_from_iter(ids.iter()))?;
        let mut found = Vec::new();
        while let Some(row) = rows.next()? {
            found.push(parse_technology_row(row)?);
        }

        Ok(found)
    }

    fn delete_by_ids(&self, ids: &[TechnologyId]) -> RepoResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let placeholders = id_placeholders(ids.len());
        let deleted = self.conn.execute(
            &format!("DELETE FROM technology WHERE id IN ({placeholders});"),
            params_from_iter(ids.iter()),
        )?;

        Ok(deleted)
    }
}

/// Builds a `?1, ?2, ...` placeholder list for dynamic `IN` clauses.
pub(crate) fn id_placeholders(count: usize) -> String {
    (1..=count)
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_technology_row(row: &Row<'_>) -> RepoResult<Technology> {
    let id: TechnologyId = row.get(0)?;
    let name: String = row.get(1)?;
    if name.is_empty() {
        return Err(RepoError::InvalidData(format!(
            "blank name in technology row {id}"
        )));
    }

    Ok(Technology {
        id,
        name,
        description: row.get(2)?,
    })
}
