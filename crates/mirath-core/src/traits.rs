//! Trait interface between the core types and the distribution engine.
//!
//! [`ShareCalculator`] names the four stages of a distribution. The
//! provided [`compute`](ShareCalculator::compute) method wires them together
//! in the fixed order; implementations (mirath-engine) supply the stages.

use crate::constants::amount_tolerance;
use crate::fraction::Fraction;
use crate::roster::{Roster, RosterContext};
use crate::types::{CalculationSummary, Deceased, Heir, InheritanceResult, Note};

/// Pure computation of an estate distribution.
///
/// Every method is deterministic and side-effect free. Implementations must
/// be `Send + Sync` so a single engine can serve concurrent callers.
pub trait ShareCalculator: Send + Sync {
    /// Gross estate less debts, funeral expenses and bequest, floored at zero.
    fn net_estate(&self, deceased: &Deceased) -> f64;

    /// Fixed (Fara'id) shares. Heirs whose fraction is zero are omitted.
    fn fixed_shares(
        &self,
        roster: &Roster,
        ctx: &RosterContext,
        net_estate: f64,
    ) -> Vec<InheritanceResult>;

    /// Exact sum of the fixed fractions claimed by the roster.
    ///
    /// Above one the fixed shares alone oversubscribe the estate.
    fn fixed_claim(&self, roster: &Roster, ctx: &RosterContext) -> Fraction;

    /// Split `remaining` among the controlling residuary class.
    ///
    /// Returns no results when no residuary class is present.
    fn residuary(
        &self,
        roster: &Roster,
        remaining: f64,
        net_estate: f64,
    ) -> Vec<InheritanceResult>;

    /// Scale the results down proportionally when they exceed `net_estate`.
    fn reconcile(&self, results: Vec<InheritanceResult>, net_estate: f64)
    -> Vec<InheritanceResult>;

    /// Full distribution for a caller-supplied case.
    ///
    /// Never fails. Heirs that are not alive or have a zero count are
    /// ignored. Results with a zero amount (only possible when the net
    /// estate is zero) are dropped.
    fn compute(&self, deceased: &Deceased, heirs: &[Heir]) -> CalculationSummary {
        let roster = Roster::snapshot(heirs);
        let ctx = RosterContext::from_roster(&roster);
        let net_estate = self.net_estate(deceased);

        let mut results = self.fixed_shares(&roster, &ctx, net_estate);
        let fixed_total: f64 = results.iter().map(|r| r.amount).sum();
        let remaining = net_estate - fixed_total;
        if remaining > 0.0 {
            results.extend(self.residuary(&roster, remaining, net_estate));
        }

        // Residuary heirs only ever split a positive remainder, so the
        // estate is oversubscribed exactly when the fixed fractions exceed one.
        let mut notes = Vec::new();
        let pre_total: f64 = results.iter().map(|r| r.amount).sum();
        if self.fixed_claim(&roster, &ctx) > Fraction::ONE && pre_total > 0.0 {
            notes.push(Note::AwlApplied {
                ratio: net_estate / pre_total,
            });
        }

        let mut results = self.reconcile(results, net_estate);
        results.retain(|r| r.amount > 0.0);

        let mut summary = CalculationSummary::new(net_estate, results, notes);
        if summary.remaining_amount > amount_tolerance(net_estate) {
            summary.notes.push(Note::RemainderUnclaimed {
                amount: summary.remaining_amount,
            });
        }
        summary
    }
}
