//! Case validation for the data-entry layer.
//!
//! The distribution engine never calls this: it computes with whatever it
//! is given. Front ends run [`validate_case`] before submitting a case so
//! that malformed input is rejected with a specific reason.
//!
//! [`validate_case`] checks the roster first, then the estate figures.
//! Roster checks, per entry:
//! - at least one heir
//! - heir ids non-empty and unique
//! - counts within `1..=Relationship::max_count()`
//! - at most one father, mother, and spouse entry
//!
//! Estate checks:
//! - monetary fields finite and non-negative
//! - bequest within one third of the estate after debts and funeral costs

use std::collections::HashSet;

use crate::constants::{AMOUNT_EPSILON, MAX_BEQUEST_FRACTION};
use crate::error::ValidationError;
use crate::types::{Deceased, Heir, Relationship};

/// Largest bequest the deceased may leave: one third of the estate after
/// debts and funeral expenses, floored at zero.
///
/// # Examples
///
/// ```
/// use mirath_core::types::Deceased;
/// use mirath_core::validation::max_bequest;
/// let d = Deceased { gross_estate: 100_000.0, debts: 10_000.0, ..Deceased::default() };
/// assert_eq!(max_bequest(&d), 30_000.0);
/// ```
pub fn max_bequest(deceased: &Deceased) -> f64 {
    let after_debts = (deceased.gross_estate - deceased.debts - deceased.funeral_expenses).max(0.0);
    MAX_BEQUEST_FRACTION.of(after_debts)
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount { field, value });
    }
    Ok(())
}

/// Validate the deceased's estate figures.
pub fn validate_deceased(deceased: &Deceased) -> Result<(), ValidationError> {
    check_amount("gross_estate", deceased.gross_estate)?;
    check_amount("debts", deceased.debts)?;
    check_amount("funeral_expenses", deceased.funeral_expenses)?;
    check_amount("bequest", deceased.bequest)?;

    let max = max_bequest(deceased);
    if deceased.bequest > max + AMOUNT_EPSILON {
        return Err(ValidationError::BequestTooLarge {
            bequest: deceased.bequest,
            max,
        });
    }
    Ok(())
}

/// Validate a heir roster.
pub fn validate_heirs(heirs: &[Heir]) -> Result<(), ValidationError> {
    if heirs.is_empty() {
        return Err(ValidationError::NoHeirs);
    }

    let mut ids = HashSet::new();
    let mut unique_seen: HashSet<Relationship> = HashSet::new();

    for heir in heirs {
        if heir.id.is_empty() {
            return Err(ValidationError::EmptyHeirId);
        }
        if !ids.insert(heir.id.as_str()) {
            return Err(ValidationError::DuplicateHeirId(heir.id.clone()));
        }

        let max = heir.relationship.max_count();
        if heir.count == 0 || heir.count > max {
            return Err(ValidationError::CountOutOfRange {
                id: heir.id.clone(),
                count: heir.count,
                max,
            });
        }

        if heir.relationship.is_unique() && !unique_seen.insert(heir.relationship) {
            return Err(ValidationError::DuplicateUniqueRelationship(
                heir.relationship.to_string(),
            ));
        }
    }
    Ok(())
}

/// Validate a full case.
pub fn validate_case(deceased: &Deceased, heirs: &[Heir]) -> Result<(), ValidationError> {
    validate_heirs(heirs)?;
    validate_deceased(deceased)
}
