//! Distribution engine implementing the [`ShareCalculator`] trait.
//!
//! Each stage delegates to its module; the stage ordering lives in the
//! trait's provided `compute`.

use mirath_core::fraction::Fraction;
use mirath_core::roster::{Roster, RosterContext};
use mirath_core::traits::ShareCalculator;
use mirath_core::types::{CalculationSummary, Case, Deceased, InheritanceResult};
use tracing::info_span;

use crate::{correction, estate, fixed, residuary};

/// The production Fara'id calculator.
///
/// Stateless; one instance can serve any number of cases, from any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct DistributionEngine;

impl DistributionEngine {
    /// Create a new DistributionEngine.
    pub fn new() -> Self {
        Self
    }

    /// Distribute a decoded [`Case`].
    pub fn compute_case(&self, case: &Case) -> CalculationSummary {
        let _span = info_span!("distribution", heirs = case.heirs.len()).entered();
        self.compute(&case.deceased, &case.heirs)
    }
}

impl ShareCalculator for DistributionEngine {
    fn net_estate(&self, deceased: &Deceased) -> f64 {
        estate::net_estate(deceased)
    }

    fn fixed_shares(
        &self,
        roster: &Roster,
        ctx: &RosterContext,
        net_estate: f64,
    ) -> Vec<InheritanceResult> {
        fixed::fixed_shares(roster, ctx, net_estate)
    }

    fn fixed_claim(&self, roster: &Roster, ctx: &RosterContext) -> Fraction {
        fixed::fixed_claim(roster, ctx)
    }

    fn residuary(
        &self,
        roster: &Roster,
        remaining: f64,
        net_estate: f64,
    ) -> Vec<InheritanceResult> {
        residuary::residuary(roster, remaining, net_estate)
    }

    fn reconcile(
        &self,
        results: Vec<InheritanceResult>,
        net_estate: f64,
    ) -> Vec<InheritanceResult> {
        correction::reconcile(results, net_estate)
    }
}
