//! Residuary (Asabah) allocation.
//!
//! The remainder left after fixed shares goes to a single controlling
//! class: the first category of [`RESIDUARY_ORDER`] with a member in the
//! roster. Earlier categories strictly pre-empt later ones. The one mixed
//! pool is sons with daughters.

use mirath_core::constants::{FEMALE_RESIDUARY_WEIGHT, MALE_RESIDUARY_WEIGHT};
use mirath_core::roster::Roster;
use mirath_core::types::{Basis, Heir, InheritanceResult, Relationship, ShareKind};
use tracing::debug;

/// Residuary priority, highest first.
pub const RESIDUARY_ORDER: [Relationship; 8] = [
    Relationship::Son,
    Relationship::SonOfSon,
    Relationship::Father,
    Relationship::GrandfatherPaternal,
    Relationship::BrotherFull,
    Relationship::BrotherPaternal,
    Relationship::UnclePaternal,
    Relationship::CousinPaternal,
];

/// The highest-priority residuary category present, if any.
pub fn controlling_class(roster: &Roster) -> Option<Relationship> {
    RESIDUARY_ORDER.iter().copied().find(|&r| roster.has(r))
}

/// Entries sharing the residue, in roster order.
pub fn residuary_pool(roster: &Roster) -> Vec<&Heir> {
    let Some(class) = controlling_class(roster) else {
        return Vec::new();
    };
    roster
        .heirs()
        .iter()
        .filter(|h| {
            h.relationship == class
                || (class == Relationship::Son && h.relationship == Relationship::Daughter)
        })
        .collect()
}

/// `count * 2` for a male entry, `count * 1` for a female one.
pub fn residuary_weight(heir: &Heir) -> u64 {
    let per_head = if heir.is_male() {
        MALE_RESIDUARY_WEIGHT
    } else {
        FEMALE_RESIDUARY_WEIGHT
    };
    heir.count as u64 * per_head
}

/// Split `remaining` across the residuary pool by weight.
///
/// `share` on each result is relative to `net_estate`, not to the remainder.
pub fn residuary(roster: &Roster, remaining: f64, net_estate: f64) -> Vec<InheritanceResult> {
    let pool = residuary_pool(roster);
    let total_weight: u64 = pool.iter().map(|h| residuary_weight(h)).sum();
    if total_weight == 0 {
        debug!(remaining, "no residuary claimant");
        return Vec::new();
    }

    debug!(
        class = ?controlling_class(roster),
        members = pool.len(),
        total_weight,
        remaining,
        "allocating residue"
    );

    pool.into_iter()
        .map(|heir| {
            let amount = remaining * residuary_weight(heir) as f64 / total_weight as f64;
            let share = if net_estate > 0.0 {
                amount / net_estate
            } else {
                0.0
            };
            InheritanceResult {
                heir: heir.clone(),
                share,
                amount,
                basis: Basis::Asabah,
                kind: ShareKind::Residuary,
            }
        })
        .collect()
}
