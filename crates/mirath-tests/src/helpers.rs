//! Shared builders for scenario tests.

use mirath_core::constants::AMOUNT_EPSILON;
use mirath_core::traits::ShareCalculator;
use mirath_core::types::{CalculationSummary, Deceased, Gender, Heir, Relationship};
use mirath_engine::DistributionEngine;

pub fn husband() -> Heir {
    Heir::new("husband", Relationship::Spouse)
}

pub fn wife(id: &str) -> Heir {
    Heir::new(id, Relationship::Spouse).with_gender(Gender::Female)
}

/// `count` heirs of `relationship` in one entry, named after the category.
pub fn heirs(relationship: Relationship, count: u32) -> Heir {
    Heir::new(relationship.as_str(), relationship).with_count(count)
}

/// Compute with a bare estate (no debts, funeral costs or bequest).
pub fn distribute(estate: f64, roster: &[Heir]) -> CalculationSummary {
    DistributionEngine::new().compute(&Deceased::new(estate), roster)
}

/// Assert two amounts agree within [`AMOUNT_EPSILON`].
#[track_caller]
pub fn assert_amount(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < AMOUNT_EPSILON,
        "amount {actual} != expected {expected}"
    );
}
