//! Fixed-share (Fara'id) evaluation.
//!
//! Each relationship category maps to one rule function of the heir and the
//! precomputed [`RosterContext`]. Rules never look at the roster directly,
//! so their dependencies are exactly the context fields they read.
//!
//! Group rules (spouses of one gender, daughters, sisters, maternal
//! siblings, grandmothers) decide the group's total from its combined head
//! count and hand each entry `total * count / group_count`.

use mirath_core::constants::{EIGHTH, HALF, QUARTER, SIXTH, THIRD, TWO_THIRDS};
use mirath_core::fraction::Fraction;
use mirath_core::roster::{Roster, RosterContext};
use mirath_core::types::{Basis, Gender, Heir, InheritanceResult, Relationship, ShareKind};
use tracing::{debug, trace};

/// A fixed-share rule: the fraction of the net estate owed to one entry.
pub type FixedRule = fn(&Heir, &RosterContext) -> Fraction;

/// The rule governing `relationship`.
pub fn rule_for(relationship: Relationship) -> FixedRule {
    match relationship {
        Relationship::Spouse => spouse,
        Relationship::Father => father,
        Relationship::Mother => mother,
        Relationship::Daughter => daughter,
        Relationship::SisterFull => full_sister,
        Relationship::SisterPaternal => paternal_sister,
        Relationship::BrotherMaternal | Relationship::SisterMaternal => maternal_sibling,
        Relationship::GrandfatherPaternal => paternal_grandfather,
        Relationship::GrandmotherPaternal | Relationship::GrandmotherMaternal => grandmother,
        _ => no_fixed_share,
    }
}

/// Fraction of the net estate fixed for `heir`, zero if none applies.
pub fn fixed_fraction(heir: &Heir, ctx: &RosterContext) -> Fraction {
    rule_for(heir.relationship)(heir, ctx)
}

/// Exact total of every entry's fixed fraction.
pub fn fixed_claim(roster: &Roster, ctx: &RosterContext) -> Fraction {
    roster.heirs().iter().map(|h| fixed_fraction(h, ctx)).sum()
}

/// Half for a lone heir, two thirds shared by two or more.
fn half_or_two_thirds(group: u64) -> Fraction {
    match group {
        0 => Fraction::ZERO,
        1 => HALF,
        _ => TWO_THIRDS,
    }
}

fn spouse(heir: &Heir, ctx: &RosterContext) -> Fraction {
    let (total, group) = match heir.gender {
        Gender::Male if ctx.has_direct_descendants => (QUARTER, ctx.husbands),
        Gender::Male => (HALF, ctx.husbands),
        Gender::Female if ctx.has_direct_descendants => (EIGHTH, ctx.wives),
        Gender::Female => (QUARTER, ctx.wives),
    };
    total.portion(heir.count as u64, group)
}

/// Without descendants the father takes the residue instead.
fn father(_heir: &Heir, ctx: &RosterContext) -> Fraction {
    if ctx.has_direct_descendants {
        SIXTH
    } else {
        Fraction::ZERO
    }
}

fn mother(_heir: &Heir, ctx: &RosterContext) -> Fraction {
    if ctx.has_direct_descendants || ctx.has_siblings {
        SIXTH
    } else {
        THIRD
    }
}

/// Daughters with a son present share the residue with him.
fn daughter(heir: &Heir, ctx: &RosterContext) -> Fraction {
    if ctx.sons > 0 {
        return Fraction::ZERO;
    }
    half_or_two_thirds(ctx.daughters).portion(heir.count as u64, ctx.daughters)
}

fn full_sister(heir: &Heir, ctx: &RosterContext) -> Fraction {
    if !ctx.siblings_may_inherit() || ctx.full_brothers > 0 {
        return Fraction::ZERO;
    }
    half_or_two_thirds(ctx.full_sisters).portion(heir.count as u64, ctx.full_sisters)
}

fn paternal_sister(heir: &Heir, ctx: &RosterContext) -> Fraction {
    if !ctx.siblings_may_inherit() || ctx.paternal_brothers > 0 || ctx.full_sisters > 0 {
        return Fraction::ZERO;
    }
    half_or_two_thirds(ctx.paternal_sisters).portion(heir.count as u64, ctx.paternal_sisters)
}

/// Split by head count; brothers and sisters weigh the same here.
fn maternal_sibling(heir: &Heir, ctx: &RosterContext) -> Fraction {
    if !ctx.siblings_may_inherit() {
        return Fraction::ZERO;
    }
    let total = match ctx.maternal_siblings {
        0 => return Fraction::ZERO,
        1 => SIXTH,
        _ => THIRD,
    };
    total.portion(heir.count as u64, ctx.maternal_siblings)
}

fn paternal_grandfather(_heir: &Heir, ctx: &RosterContext) -> Fraction {
    if ctx.has_living_father || !ctx.has_direct_descendants {
        return Fraction::ZERO;
    }
    SIXTH
}

fn grandmother(heir: &Heir, ctx: &RosterContext) -> Fraction {
    if ctx.has_living_mother {
        return Fraction::ZERO;
    }
    SIXTH.portion(heir.count as u64, ctx.grandmothers)
}

fn no_fixed_share(_heir: &Heir, _ctx: &RosterContext) -> Fraction {
    Fraction::ZERO
}

/// Evaluate every entry's fixed share against `net_estate`.
///
/// Entries with a zero fraction are omitted. Output order follows the
/// roster.
pub fn fixed_shares(
    roster: &Roster,
    ctx: &RosterContext,
    net_estate: f64,
) -> Vec<InheritanceResult> {
    let mut results = Vec::new();
    for heir in roster.heirs() {
        let fraction = fixed_fraction(heir, ctx);
        trace!(heir = %heir.id, relationship = %heir.relationship, %fraction, "fixed share rule");
        if fraction.is_zero() {
            continue;
        }
        results.push(InheritanceResult {
            heir: heir.clone(),
            share: fraction.to_f64(),
            amount: fraction.of(net_estate),
            basis: Basis::for_fixed_share(heir.relationship),
            kind: ShareKind::Fixed,
        });
    }
    debug!(count = results.len(), "fixed shares evaluated");
    results
}
