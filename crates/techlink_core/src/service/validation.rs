//! Business rule checks shared by the services.
//!
//! # Responsibility
//! - Keep every validation rule a stateless free function: a check either
//!   passes silently or fails with one typed reason.
//!
//! # Invariants
//! - No function here touches storage; callers supply current state.
//! - Name is checked before description; the upper association bound is
//!   checked before the lower one.

use crate::model::technology::{NewTechnology, TechnologyDraft, TechnologyId};
use crate::service::BusinessError;
use std::collections::HashSet;

/// Maximum accepted technology name length, in characters.
pub const NAME_MAX_CHARS: usize = 50;
/// Maximum accepted technology description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 90;
/// Minimum technologies a capability must end up associated with.
pub const CAPABILITY_MIN_TECHNOLOGIES: usize = 3;
/// Maximum technologies a capability may end up associated with.
pub const CAPABILITY_MAX_TECHNOLOGIES: usize = 20;

/// Requires both draft fields to be present, yielding the insertable shape.
pub fn check_required_fields(draft: &TechnologyDraft) -> Result<NewTechnology, BusinessError> {
    match (&draft.name, &draft.description) {
        (Some(name), Some(description)) => Ok(NewTechnology {
            name: name.clone(),
            description: description.clone(),
        }),
        _ => Err(BusinessError::InvalidParameters),
    }
}

/// Enforces the name and description length bounds, name first.
pub fn check_length(technology: &NewTechnology) -> Result<(), BusinessError> {
    if technology.name.chars().count() > NAME_MAX_CHARS {
        return Err(BusinessError::NameTooLong);
    }
    if technology.description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(BusinessError::DescriptionTooLong);
    }
    Ok(())
}

/// Rejects a create batch that repeats a name (case-sensitive exact match).
///
/// Absent names do not participate; they are caught by the required-field
/// check.
pub fn check_no_duplicate_names(drafts: &[TechnologyDraft]) -> Result<(), BusinessError> {
    let mut seen = HashSet::new();
    for name in drafts.iter().filter_map(|draft| draft.name.as_deref()) {
        if !seen.insert(name) {
            return Err(BusinessError::DuplicateNames);
        }
    }
    Ok(())
}

/// Rejects an associate request that repeats a technology id.
pub fn check_no_duplicate_ids(ids: &[TechnologyId]) -> Result<(), BusinessError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(*id) {
            return Err(BusinessError::DuplicateTechnologyIds);
        }
    }
    Ok(())
}

/// Rejects incoming ids that are already linked to the capability.
pub fn check_no_overlap(
    existing: &HashSet<TechnologyId>,
    incoming: &[TechnologyId],
) -> Result<(), BusinessError> {
    if incoming.iter().any(|id| existing.contains(id)) {
        return Err(BusinessError::AlreadyAssociated);
    }
    Ok(())
}

/// Enforces the total association count bounds after a batch insert.
pub fn check_association_count(existing: usize, incoming: usize) -> Result<(), BusinessError> {
    let total = existing + incoming;
    if total > CAPABILITY_MAX_TECHNOLOGIES {
        return Err(BusinessError::TooManyAssociations);
    }
    if total < CAPABILITY_MIN_TECHNOLOGIES {
        return Err(BusinessError::TooFewAssociations);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech(name: &str, description: &str) -> NewTechnology {
        NewTechnology {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(check_length(&tech(&"n".repeat(50), &"d".repeat(90))).is_ok());
        assert!(matches!(
            check_length(&tech(&"n".repeat(51), "d")),
            Err(BusinessError::NameTooLong)
        ));
        assert!(matches!(
            check_length(&tech("n", &"d".repeat(91))),
            Err(BusinessError::DescriptionTooLong)
        ));
    }

    #[test]
    fn name_is_checked_before_description() {
        let err = check_length(&tech(&"n".repeat(51), &"d".repeat(91))).unwrap_err();
        assert!(matches!(err, BusinessError::NameTooLong));
    }

    #[test]
    fn required_fields_must_both_be_present() {
        let missing = TechnologyDraft {
            name: Some("Rust".to_string()),
            description: None,
        };
        assert!(matches!(
            check_required_fields(&missing),
            Err(BusinessError::InvalidParameters)
        ));

        let complete = TechnologyDraft::new("Rust", "systems language");
        let accepted = check_required_fields(&complete).unwrap();
        assert_eq!(accepted.name, "Rust");
    }

    #[test]
    fn duplicate_names_are_case_sensitive() {
        let distinct = vec![
            TechnologyDraft::new("Rust", "a"),
            TechnologyDraft::new("rust", "b"),
        ];
        assert!(check_no_duplicate_names(&distinct).is_ok());

        let repeated = vec![
            TechnologyDraft::new("Rust", "a"),
            TechnologyDraft::new("Rust", "b"),
        ];
        assert!(matches!(
            check_no_duplicate_names(&repeated),
            Err(BusinessError::DuplicateNames)
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        assert!(check_no_duplicate_ids(&[1, 2, 3]).is_ok());
        assert!(matches!(
            check_no_duplicate_ids(&[1, 2, 1]),
            Err(BusinessError::DuplicateTechnologyIds)
        ));
    }

    #[test]
    fn overlap_is_rejected_even_when_count_fits() {
        let existing: HashSet<i64> = [1, 2, 3].into_iter().collect();
        assert!(check_no_overlap(&existing, &[4, 5]).is_ok());
        assert!(matches!(
            check_no_overlap(&existing, &[4, 2]),
            Err(BusinessError::AlreadyAssociated)
        ));
    }

    #[test]
    fn association_count_boundaries() {
        assert!(matches!(
            check_association_count(0, 2),
            Err(BusinessError::TooFewAssociations)
        ));
        assert!(check_association_count(0, 3).is_ok());
        assert!(check_association_count(18, 2).is_ok());
        assert!(matches!(
            check_association_count(18, 3),
            Err(BusinessError::TooManyAssociations)
        ));
    }
}
