//! Technology use-case service.
//!
//! # Responsibility
//! - Orchestrate creation, lookup and batch deletion of technologies.
//! - Delegate persistence to the two store implementations.
//!
//! # Invariants
//! - Every validation runs before the first write of an operation.
//! - Deletion removes link rows before technology rows.

use crate::model::technology::{Technology, TechnologyDraft, TechnologyId};
use crate::repo::capability_technology_repo::CapabilityTechnologyRepository;
use crate::repo::technology_repo::TechnologyRepository;
use crate::service::validation::{
    check_length, check_no_duplicate_names, check_required_fields,
};
use crate::service::{BusinessError, ServiceResult};
use log::{error, info};
use std::time::Instant;
use uuid::Uuid;

/// Use-case service for technology records.
pub struct TechnologyService<T: TechnologyRepository, C: CapabilityTechnologyRepository> {
    technologies: T,
    relations: C,
}

impl<T: TechnologyRepository, C: CapabilityTechnologyRepository> TechnologyService<T, C> {
    /// Creates a service using the provided store implementations.
    pub fn new(technologies: T, relations: C) -> Self {
        Self {
            technologies,
            relations,
        }
    }

    /// Creates a batch of technologies submitted together.
    ///
    /// # Contract
    /// - The whole batch is rejected on a repeated name, a missing field, a
    ///   length violation, or an already-registered name.
    /// - On success every entry is persisted in one transaction and returned
    ///   with its assigned id, in input order.
    pub fn create_technologies(
        &self,
        drafts: &[TechnologyDraft],
    ) -> ServiceResult<Vec<Technology>> {
        let message_id = Uuid::new_v4();
        let started_at = Instant::now();
        info!(
            "event=technology_create module=service status=start message_id={message_id} batch_size={}",
            drafts.len()
        );

        let result = self.create_technologies_inner(drafts);
        log_outcome("technology_create", message_id, started_at, &result);
        result
    }

    fn create_technologies_inner(
        &self,
        drafts: &[TechnologyDraft],
    ) -> ServiceResult<Vec<Technology>> {
        check_no_duplicate_names(drafts)?;

        let mut accepted = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let technology = check_required_fields(draft)?;
            check_length(&technology)?;
            if self.technologies.exists_by_name(&technology.name)? {
                return Err(BusinessError::TechnologyAlreadyExists);
            }
            accepted.push(technology);
        }

        Ok(self.technologies.insert_all(&accepted)?)
    }

    /// Returns the stored technologies whose id is in `ids`.
    ///
    /// Fails with [`BusinessError::TechnologyNotFound`] when the result set
    /// is empty.
    pub fn get_technologies_by_ids(
        &self,
        ids: &[TechnologyId],
    ) -> ServiceResult<Vec<Technology>> {
        let message_id = Uuid::new_v4();
        let started_at = Instant::now();
        info!(
            "event=technology_get module=service status=start message_id={message_id} ids={}",
            ids.len()
        );

        let result = (|| {
            let found = self.technologies.find_by_ids(ids)?;
            if found.is_empty() {
                return Err(BusinessError::TechnologyNotFound);
            }
            Ok(found)
        })();
        log_outcome("technology_get", message_id, started_at, &result);
        result
    }

    /// Deletes a batch of technologies together with their link rows.
    ///
    /// # Contract
    /// - Permitted only when the batch maps to at most one capability;
    ///   otherwise fails with [`BusinessError::MultipleCapabilitiesRelated`].
    /// - A batch owned by zero capabilities deletes only technology rows.
    pub fn delete_technologies(&self, ids: &[TechnologyId]) -> ServiceResult<()> {
        let message_id = Uuid::new_v4();
        let started_at = Instant::now();
        info!(
            "event=technology_delete module=service status=start message_id={message_id} ids={}",
            ids.len()
        );

        let result = (|| {
            let owners = self.relations.capability_ids_by_technologies(ids)?;
            if owners.len() > 1 {
                return Err(BusinessError::MultipleCapabilitiesRelated);
            }
            self.relations.delete_by_technologies(ids)?;
            self.technologies.delete_by_ids(ids)?;
            Ok(())
        })();
        log_outcome("technology_delete", message_id, started_at, &result);
        result
    }
}

pub(crate) fn log_outcome<V>(
    event: &str,
    message_id: Uuid,
    started_at: Instant,
    result: &ServiceResult<V>,
) {
    match result {
        Ok(_) => info!(
            "event={event} module=service status=ok message_id={message_id} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event={event} module=service status=error message_id={message_id} duration_ms={} error_code={} error={err}",
            started_at.elapsed().as_millis(),
            err.code()
        ),
    }
}
