//! Filtered heir roster and the roster-wide predicates the share rules read.
//!
//! [`Roster::snapshot`] drops entries that are not alive or have a zero
//! count. Nothing downstream ever sees the unfiltered list.
//! [`RosterContext`] evaluates every predicate once per distribution so the
//! individual rules take their dependencies explicitly.

use serde::{Deserialize, Serialize};

use crate::types::{Gender, Heir, Relationship};

/// Immutable snapshot of the eligible heirs, in caller order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    heirs: Vec<Heir>,
}

impl Roster {
    /// Copy the eligible entries out of a caller-owned list.
    pub fn snapshot(heirs: &[Heir]) -> Self {
        Self {
            heirs: heirs.iter().filter(|h| h.is_eligible()).cloned().collect(),
        }
    }

    pub fn heirs(&self) -> &[Heir] {
        &self.heirs
    }

    pub fn len(&self) -> usize {
        self.heirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heirs.is_empty()
    }

    /// Entries of one category.
    pub fn of(&self, relationship: Relationship) -> impl Iterator<Item = &Heir> + '_ {
        self.heirs
            .iter()
            .filter(move |h| h.relationship == relationship)
    }

    /// Whether at least one entry of `relationship` is present.
    pub fn has(&self, relationship: Relationship) -> bool {
        self.of(relationship).next().is_some()
    }

    /// Combined head count of all entries matching `pred`.
    pub fn head_count<F>(&self, pred: F) -> u64
    where
        F: Fn(&Heir) -> bool,
    {
        self.heirs
            .iter()
            .filter(|h| pred(h))
            .map(|h| h.count as u64)
            .sum()
    }

    /// Combined head count of one category.
    pub fn count_of(&self, relationship: Relationship) -> u64 {
        self.head_count(|h| h.relationship == relationship)
    }
}

/// Roster-wide facts consulted by the fixed-share rules.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterContext {
    pub has_direct_descendants: bool,
    pub has_living_father: bool,
    pub has_living_mother: bool,
    /// Any full, paternal, or maternal sibling.
    pub has_siblings: bool,
    pub sons: u64,
    pub daughters: u64,
    pub full_brothers: u64,
    pub full_sisters: u64,
    pub paternal_brothers: u64,
    pub paternal_sisters: u64,
    pub maternal_siblings: u64,
    pub grandmothers: u64,
    pub husbands: u64,
    pub wives: u64,
}

impl RosterContext {
    /// Evaluate every predicate against a snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use mirath_core::roster::{Roster, RosterContext};
    /// use mirath_core::types::{Heir, Relationship};
    /// let roster = Roster::snapshot(&[
    ///     Heir::new("f", Relationship::Father),
    ///     Heir::new("d", Relationship::DaughterOfSon),
    /// ]);
    /// let ctx = RosterContext::from_roster(&roster);
    /// assert!(ctx.has_direct_descendants);
    /// assert!(ctx.has_living_father);
    /// assert!(!ctx.has_siblings);
    /// ```
    pub fn from_roster(roster: &Roster) -> Self {
        let spouses = |g: Gender| {
            roster.head_count(|h| h.relationship == Relationship::Spouse && h.gender == g)
        };
        Self {
            has_direct_descendants: roster
                .heirs()
                .iter()
                .any(|h| h.relationship.is_direct_descendant()),
            has_living_father: roster.has(Relationship::Father),
            has_living_mother: roster.has(Relationship::Mother),
            has_siblings: roster.heirs().iter().any(|h| h.relationship.is_sibling()),
            sons: roster.count_of(Relationship::Son),
            daughters: roster.count_of(Relationship::Daughter),
            full_brothers: roster.count_of(Relationship::BrotherFull),
            full_sisters: roster.count_of(Relationship::SisterFull),
            paternal_brothers: roster.count_of(Relationship::BrotherPaternal),
            paternal_sisters: roster.count_of(Relationship::SisterPaternal),
            maternal_siblings: roster.head_count(|h| h.relationship.is_maternal_sibling()),
            grandmothers: roster.head_count(|h| h.relationship.is_grandmother()),
            husbands: spouses(Gender::Male),
            wives: spouses(Gender::Female),
        }
    }

    /// Siblings only take fixed shares with no father and no descendants.
    pub fn siblings_may_inherit(&self) -> bool {
        !self.has_living_father && !self.has_direct_descendants
    }
}
