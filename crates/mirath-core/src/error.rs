//! Error types for Mirath.
//!
//! The distribution engine itself is total. Errors only arise at the
//! boundaries: parsing caller-supplied tokens and validating a case before
//! it reaches the engine.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeirError {
    #[error("invalid heir category: {0}")] InvalidHeirCategory(String),
    #[error("invalid gender: {0}")] InvalidGender(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("no heirs supplied")] NoHeirs,
    #[error("{field} must be a finite non-negative amount, got {value}")] InvalidAmount { field: &'static str, value: f64 },
    #[error("bequest {bequest} exceeds one third of the estate after debts ({max})")] BequestTooLarge { bequest: f64, max: f64 },
    #[error("heir {id}: count {count} outside 1..={max}")] CountOutOfRange { id: String, count: u32, max: u32 },
    #[error("heir id must not be empty")] EmptyHeirId,
    #[error("duplicate heir id: {0}")] DuplicateHeirId(String),
    #[error("more than one {0} entry")] DuplicateUniqueRelationship(String),
}

#[derive(Error, Debug)]
pub enum InheritanceError {
    #[error(transparent)] Heir(#[from] HeirError),
    #[error(transparent)] Validation(#[from] ValidationError),
    #[error("case decoding: {0}")] Decode(String),
}

impl From<serde_json::Error> for InheritanceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
