//! Capability/technology association use-case service.
//!
//! # Responsibility
//! - Orchestrate link creation and capability-scoped technology lookups.
//! - Delegate persistence to the two store implementations.
//!
//! # Invariants
//! - Capability existence means "at least one link row references it".
//! - All incoming ids must pass every check before any link row is written.

use crate::model::technology::{CapabilityId, Technology, TechnologyId};
use crate::repo::capability_technology_repo::CapabilityTechnologyRepository;
use crate::repo::technology_repo::TechnologyRepository;
use crate::service::technology_service::log_outcome;
use crate::service::validation::{
    check_association_count, check_no_duplicate_ids, check_no_overlap,
};
use crate::service::{BusinessError, ServiceResult};
use log::info;
use std::collections::{BTreeMap, HashSet};
use std::time::Instant;
use uuid::Uuid;

/// Use-case service for capability/technology links.
pub struct CapabilityTechnologyService<T: TechnologyRepository, C: CapabilityTechnologyRepository>
{
    technologies: T,
    relations: C,
}

impl<T: TechnologyRepository, C: CapabilityTechnologyRepository>
    CapabilityTechnologyService<T, C>
{
    /// Creates a service using the provided store implementations.
    pub fn new(technologies: T, relations: C) -> Self {
        Self {
            technologies,
            relations,
        }
    }

    /// Associates a batch of technologies with one capability.
    ///
    /// # Contract
    /// - Ids must be distinct, non-empty, and every one must reference a
    ///   stored technology.
    /// - None may already be linked to the capability, and the resulting
    ///   total must stay within the 3..=20 bound.
    /// - On success one link row per id is inserted in one transaction.
    pub fn associate(
        &self,
        capability_id: CapabilityId,
        technology_ids: &[TechnologyId],
    ) -> ServiceResult<()> {
        let message_id = Uuid::new_v4();
        let started_at = Instant::now();
        info!(
            "event=capability_associate module=service status=start message_id={message_id} capability_id={capability_id} ids={}",
            technology_ids.len()
        );

        let result = self.associate_inner(capability_id, technology_ids);
        log_outcome("capability_associate", message_id, started_at, &result);
        result
    }

    fn associate_inner(
        &self,
        capability_id: CapabilityId,
        technology_ids: &[TechnologyId],
    ) -> ServiceResult<()> {
        check_no_duplicate_ids(technology_ids)?;
        if technology_ids.is_empty() {
            return Err(BusinessError::InvalidParameters);
        }

        for id in technology_ids {
            if !self.technologies.exists_by_id(*id)? {
                return Err(BusinessError::TechnologyNotFound);
            }
        }

        let existing: Vec<TechnologyId> = self
            .relations
            .relations_by_capability(capability_id)?
            .iter()
            .map(|link| link.technology_id)
            .collect();
        let existing_set: HashSet<TechnologyId> = existing.iter().copied().collect();

        check_no_overlap(&existing_set, technology_ids)?;
        check_association_count(existing.len(), technology_ids.len())?;

        self.relations
            .insert_relations(capability_id, technology_ids)?;
        Ok(())
    }

    /// Returns the full technology records linked to one capability.
    ///
    /// Fails with [`BusinessError::CapabilityNotFound`] when no link row
    /// references `capability_id`.
    pub fn find_by_capability(
        &self,
        capability_id: CapabilityId,
    ) -> ServiceResult<Vec<Technology>> {
        let message_id = Uuid::new_v4();
        let started_at = Instant::now();
        info!(
            "event=capability_find module=service status=start message_id={message_id} capability_id={capability_id}"
        );

        let result = self.find_by_capability_inner(capability_id);
        log_outcome("capability_find", message_id, started_at, &result);
        result
    }

    fn find_by_capability_inner(
        &self,
        capability_id: CapabilityId,
    ) -> ServiceResult<Vec<Technology>> {
        let linked: Vec<TechnologyId> = self
            .relations
            .relations_by_capability(capability_id)?
            .iter()
            .map(|link| link.technology_id)
            .collect();
        if linked.is_empty() {
            return Err(BusinessError::CapabilityNotFound);
        }

        Ok(self.technologies.find_by_ids(&linked)?)
    }

    /// Returns a per-capability map of linked technologies.
    ///
    /// Lookups run independently per id, but any single missing capability
    /// fails the whole call.
    pub fn find_by_capabilities(
        &self,
        capability_ids: &[CapabilityId],
    ) -> ServiceResult<BTreeMap<CapabilityId, Vec<Technology>>> {
        let message_id = Uuid::new_v4();
        let started_at = Instant::now();
        info!(
            "event=capability_find_batch module=service status=start message_id={message_id} ids={}",
            capability_ids.len()
        );

        let result = (|| {
            let mut by_capability = BTreeMap::new();
            for capability_id in capability_ids {
                by_capability.insert(*capability_id, self.find_by_capability_inner(*capability_id)?);
            }
            Ok(by_capability)
        })();
        log_outcome("capability_find_batch", message_id, started_at, &result);
        result
    }
}
