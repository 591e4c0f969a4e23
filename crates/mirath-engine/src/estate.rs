//! Net estate resolution.

use mirath_core::types::Deceased;
use tracing::debug;

/// `max(0, gross - debts - funeral - bequest)`.
///
/// The bequest cap is not enforced here; a negative intermediate is simply
/// clamped.
pub fn net_estate(deceased: &Deceased) -> f64 {
    let net = deceased.gross_estate
        - deceased.debts
        - deceased.funeral_expenses
        - deceased.bequest;
    let net = net.max(0.0);
    debug!(
        gross = deceased.gross_estate,
        debts = deceased.debts,
        funeral = deceased.funeral_expenses,
        bequest = deceased.bequest,
        net,
        "resolved net estate"
    );
    net
}
