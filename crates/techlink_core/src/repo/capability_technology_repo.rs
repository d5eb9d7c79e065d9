//! Capability/technology link store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide link lookup, bulk insert and bulk delete APIs over the
//!   `capability_technology` table.
//!
//! # Invariants
//! - `insert_relations` persists either every pair of a batch or none.
//! - `capability_ids_by_technologies` returns each owning capability once.

use crate::model::association::CapabilityTechnology;
use crate::model::technology::{CapabilityId, TechnologyId};
use crate::repo::technology_repo::{id_placeholders, RepoResult};
use rusqlite::{params, params_from_iter, Connection};

/// Store interface for capability/technology link rows.
pub trait CapabilityTechnologyRepository {
    /// Returns every link row referencing `capability_id`.
    fn relations_by_capability(
        &self,
        capability_id: CapabilityId,
    ) -> RepoResult<Vec<CapabilityTechnology>>;
    /// Returns the distinct capability ids linked to any of the given
    /// technologies.
    fn capability_ids_by_technologies(
        &self,
        technology_ids: &[TechnologyId],
    ) -> RepoResult<Vec<CapabilityId>>;
    /// Inserts one link row per technology id in one transaction; returns
    /// the inserted count.
    fn insert_relations(
        &self,
        capability_id: CapabilityId,
        technology_ids: &[TechnologyId],
    ) -> RepoResult<usize>;
    /// Deletes every link row referencing any of the given technologies;
    /// returns the deleted count.
    fn delete_by_technologies(&self, technology_ids: &[TechnologyId]) -> RepoResult<usize>;
}

/// SQLite-backed link store.
pub struct SqliteCapabilityTechnologyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCapabilityTechnologyRepository<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CapabilityTechnologyRepository for SqliteCapabilityTechnologyRepository<'_> {
    fn relations_by_capability(
        &self,
        capability_id: CapabilityId,
    ) -> RepoResult<Vec<CapabilityTechnology>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, id_capability, id_technology
             FROM capability_technology
             WHERE id_capability = ?1
             ORDER BY id_technology ASC;",
        )?;

        let mut rows = stmt.query(params![capability_id])?;
        let mut links = Vec::new();
        while let Some(row) = rows.next()? {
            links.push(CapabilityTechnology {
                id: row.get(0)?,
                capability_id: row.get(1)?,
                technology_id: row.get(2)?,
            });
        }

        Ok(links)
    }

    fn capability_ids_by_technologies(
        &self,
        technology_ids: &[TechnologyId],
    ) -> RepoResult<Vec<CapabilityId>> {
        if technology_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = id_placeholders(technology_ids.len());
        let mut stmt = self.conn.prepare(&format!(
            "SELECT DISTINCT id_capability
             FROM capability_technology
             WHERE id_technology IN ({placeholders})
             ORDER BY id_capability ASC;"
        ))?;

        let mut rows = stmt.query(params_from_iter(technology_ids.iter()))?;
        let mut capability_ids = Vec::new();
        while let Some(row) = rows.next()? {
            capability_ids.push(row.get(0)?);
        }

        Ok(capability_ids)
    }

    fn insert_relations(
        &self,
        capability_id: CapabilityId,
        technology_ids: &[TechnologyId],
    ) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO capability_technology (id_capability, id_technology)
                 VALUES (?1, ?2);",
            )?;
            for technology_id in technology_ids {
                stmt.execute(params![capability_id, technology_id])?;
            }
        }
        tx.commit()?;
        Ok(technology_ids.len())
    }

    fn delete_by_technologies(&self, technology_ids: &[TechnologyId]) -> RepoResult<usize> {
        if technology_ids.is_empty() {
            return Ok(0);
        }

        let placeholders = id_placeholders(technology_ids.len());
        let deleted = self.conn.execute(
            &format!("DELETE FROM capability_technology WHERE id_technology IN ({placeholders});"),
            params_from_iter(technology_ids.iter()),
        )?;

        Ok(deleted)
    }
}
