//! Conservation correction (Awl).
//!
//! When the combined results claim more than the net estate, every amount
//! and share is multiplied by the same ratio `net_estate / total`. When they
//! claim less, nothing changes: the remainder is reported as undistributed
//! and is not returned to the fixed-share heirs.

use mirath_core::types::InheritanceResult;
use tracing::debug;

/// The Awl scaling ratio, or `None` when the results fit the estate.
pub fn awl_ratio(results: &[InheritanceResult], net_estate: f64) -> Option<f64> {
    let total: f64 = results.iter().map(|r| r.amount).sum();
    if total > net_estate && total > 0.0 {
        Some(net_estate / total)
    } else {
        None
    }
}

/// Scale `results` down proportionally if they exceed `net_estate`.
pub fn reconcile(results: Vec<InheritanceResult>, net_estate: f64) -> Vec<InheritanceResult> {
    let Some(ratio) = awl_ratio(&results, net_estate) else {
        return results;
    };
    debug!(ratio, entries = results.len(), "applying awl correction");
    results
        .into_iter()
        .map(|r| InheritanceResult {
            amount: r.amount * ratio,
            share: r.share * ratio,
            ..r
        })
        .collect()
}
