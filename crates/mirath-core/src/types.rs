//! Core domain types: the deceased, the heir roster, and distribution results.
//!
//! All monetary values are `f64` amounts in the caller's currency unit.
//! Relationship and gender tokens are closed enums; the snake_case wire
//! tokens are the ones the data-entry layer emits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_HEIR_COUNT, MAX_SPOUSE_COUNT};
use crate::error::{HeirError, InheritanceError};

/// Deserialization goes through [`FromStr`], so an unknown token surfaces
/// as [`HeirError::InvalidGender`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = HeirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(HeirError::InvalidGender(other.to_string())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = HeirError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// The 18 relationship categories recognised by the rule set.
///
/// Deserialization goes through [`FromStr`] so an unknown token surfaces as
/// [`HeirError::InvalidHeirCategory`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Relationship {
    Spouse,
    Father,
    Mother,
    Son,
    Daughter,
    BrotherFull,
    SisterFull,
    BrotherPaternal,
    SisterPaternal,
    BrotherMaternal,
    SisterMaternal,
    GrandfatherPaternal,
    GrandmotherPaternal,
    GrandmotherMaternal,
    SonOfSon,
    DaughterOfSon,
    UnclePaternal,
    CousinPaternal,
}

/// Display grouping used by data-entry front ends.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipGroup {
    Immediate,
    Parents,
    Children,
    Siblings,
    Grandparents,
    Grandchildren,
    Extended,
}

impl Relationship {
    /// Every category, in data-entry order.
    pub const ALL: [Relationship; 18] = [
        Self::Spouse,
        Self::Father,
        Self::Mother,
        Self::Son,
        Self::Daughter,
        Self::BrotherFull,
        Self::SisterFull,
        Self::BrotherPaternal,
        Self::SisterPaternal,
        Self::BrotherMaternal,
        Self::SisterMaternal,
        Self::GrandfatherPaternal,
        Self::GrandmotherPaternal,
        Self::GrandmotherMaternal,
        Self::SonOfSon,
        Self::DaughterOfSon,
        Self::UnclePaternal,
        Self::CousinPaternal,
    ];

    /// The wire token, e.g. `"brother_full"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mirath_core::types::Relationship;
    /// assert_eq!(Relationship::SonOfSon.as_str(), "son_of_son");
    /// assert_eq!("son_of_son".parse::<Relationship>().unwrap(), Relationship::SonOfSon);
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spouse => "spouse",
            Self::Father => "father",
            Self::Mother => "mother",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::BrotherFull => "brother_full",
            Self::SisterFull => "sister_full",
            Self::BrotherPaternal => "brother_paternal",
            Self::SisterPaternal => "sister_paternal",
            Self::BrotherMaternal => "brother_maternal",
            Self::SisterMaternal => "sister_maternal",
            Self::GrandfatherPaternal => "grandfather_paternal",
            Self::GrandmotherPaternal => "grandmother_paternal",
            Self::GrandmotherMaternal => "grandmother_maternal",
            Self::SonOfSon => "son_of_son",
            Self::DaughterOfSon => "daughter_of_son",
            Self::UnclePaternal => "uncle_paternal",
            Self::CousinPaternal => "cousin_paternal",
        }
    }

    /// Gender implied by the category. Spouse defaults to male (husband).
    pub fn default_gender(&self) -> Gender {
        match self {
            Self::Mother
            | Self::Daughter
            | Self::SisterFull
            | Self::SisterPaternal
            | Self::SisterMaternal
            | Self::GrandmotherPaternal
            | Self::GrandmotherMaternal
            | Self::DaughterOfSon => Gender::Female,
            _ => Gender::Male,
        }
    }

    pub fn group(&self) -> RelationshipGroup {
        match self {
            Self::Spouse => RelationshipGroup::Immediate,
            Self::Father | Self::Mother => RelationshipGroup::Parents,
            Self::Son | Self::Daughter => RelationshipGroup::Children,
            Self::BrotherFull
            | Self::SisterFull
            | Self::BrotherPaternal
            | Self::SisterPaternal
            | Self::BrotherMaternal
            | Self::SisterMaternal => RelationshipGroup::Siblings,
            Self::GrandfatherPaternal | Self::GrandmotherPaternal | Self::GrandmotherMaternal => {
                RelationshipGroup::Grandparents
            }
            Self::SonOfSon | Self::DaughterOfSon => RelationshipGroup::Grandchildren,
            Self::UnclePaternal | Self::CousinPaternal => RelationshipGroup::Extended,
        }
    }

    /// Largest `count` a single entry of this category may carry.
    pub fn max_count(&self) -> u32 {
        match self {
            Self::Spouse => MAX_SPOUSE_COUNT,
            _ => MAX_HEIR_COUNT,
        }
    }

    /// Categories that may appear at most once in a roster.
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Father | Self::Mother | Self::Spouse)
    }

    pub fn is_sibling(&self) -> bool {
        self.group() == RelationshipGroup::Siblings
    }

    pub fn is_maternal_sibling(&self) -> bool {
        matches!(self, Self::BrotherMaternal | Self::SisterMaternal)
    }

    pub fn is_grandmother(&self) -> bool {
        matches!(self, Self::GrandmotherPaternal | Self::GrandmotherMaternal)
    }

    /// Sons, daughters, and the son's children.
    pub fn is_direct_descendant(&self) -> bool {
        matches!(
            self,
            Self::Son | Self::Daughter | Self::SonOfSon | Self::DaughterOfSon
        )
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = HeirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| HeirError::InvalidHeirCategory(s.to_string()))
    }
}

impl TryFrom<String> for Relationship {
    type Error = HeirError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Estate figures of the deceased, as supplied by the caller.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Deceased {
    /// Does not affect any rule; kept for completeness.
    #[serde(default)]
    pub gender: Gender,
    /// Gross estate before deductions.
    pub gross_estate: f64,
    #[serde(default)]
    pub debts: f64,
    #[serde(default)]
    pub funeral_expenses: f64,
    /// Bequest (wasiyyah). Capped at one third upstream, not by the engine.
    #[serde(default)]
    pub bequest: f64,
}

impl Deceased {
    pub fn new(gross_estate: f64) -> Self {
        Self {
            gross_estate,
            ..Self::default()
        }
    }
}

fn default_alive() -> bool {
    true
}

/// One roster entry: `count` relatives sharing a category and gender.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Heir {
    /// Opaque token, unique within a roster.
    pub id: String,
    pub relationship: Relationship,
    pub gender: Gender,
    pub count: u32,
    #[serde(default = "default_alive")]
    pub alive: bool,
}

impl Heir {
    /// A single living heir with the category's default gender.
    ///
    /// # Examples
    ///
    /// ```
    /// use mirath_core::types::{Gender, Heir, Relationship};
    /// let h = Heir::new("m1", Relationship::Mother);
    /// assert_eq!(h.gender, Gender::Female);
    /// assert_eq!(h.count, 1);
    /// assert!(h.alive);
    /// ```
    pub fn new(id: impl Into<String>, relationship: Relationship) -> Self {
        Self {
            id: id.into(),
            relationship,
            gender: relationship.default_gender(),
            count: 1,
            alive: true,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn deceased(mut self) -> Self {
        self.alive = false;
        self
    }

    /// Whether the entry takes part in the distribution at all.
    pub fn is_eligible(&self) -> bool {
        self.alive && self.count > 0
    }

    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }
}

/// Fixed citation codes. Translation into end-user text is the
/// presentation layer's job.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    #[serde(rename = "quran_4_11")]
    Quran4_11,
    #[serde(rename = "quran_4_12")]
    Quran4_12,
    #[serde(rename = "quran_4_176")]
    Quran4_176,
    HadithSahih,
    Jurisprudence,
    Asabah,
}

impl Basis {
    /// Citation for a fixed share awarded to `relationship`.
    pub fn for_fixed_share(relationship: Relationship) -> Self {
        match relationship {
            Relationship::Spouse
            | Relationship::BrotherMaternal
            | Relationship::SisterMaternal => Self::Quran4_12,
            Relationship::Father | Relationship::Mother | Relationship::Daughter => {
                Self::Quran4_11
            }
            Relationship::SisterFull | Relationship::SisterPaternal => Self::Quran4_176,
            Relationship::GrandmotherPaternal | Relationship::GrandmotherMaternal => {
                Self::HadithSahih
            }
            _ => Self::Jurisprudence,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Quran4_11 => "quran_4_11",
            Self::Quran4_12 => "quran_4_12",
            Self::Quran4_176 => "quran_4_176",
            Self::HadithSahih => "hadith_sahih",
            Self::Jurisprudence => "jurisprudence",
            Self::Asabah => "asabah",
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which stage produced a result. A father can appear twice: once with a
/// fixed sixth and once as the controlling residuary class.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShareKind {
    Fixed,
    Residuary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InheritanceResult {
    pub heir: Heir,
    /// Fraction of the net estate.
    pub share: f64,
    pub amount: f64,
    pub basis: Basis,
    pub kind: ShareKind,
}

impl InheritanceResult {
    /// Amount per person when the entry covers several heirs.
    pub fn amount_each(&self) -> f64 {
        if self.heir.count == 0 {
            return 0.0;
        }
        self.amount / self.heir.count as f64
    }
}

/// Advisory annotations attached to a summary.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Note {
    /// Shares exceeded the estate and were scaled by `ratio`.
    AwlApplied { ratio: f64 },
    /// Part of the estate has no claimant.
    RemainderUnclaimed { amount: f64 },
}

impl Note {
    pub fn code(&self) -> &'static str {
        match self {
            Self::AwlApplied { .. } => "awl_applied",
            Self::RemainderUnclaimed { .. } => "remainder_unclaimed",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalculationSummary {
    pub net_estate: f64,
    pub total_distributed: f64,
    pub remaining_amount: f64,
    pub results: Vec<InheritanceResult>,
    pub notes: Vec<Note>,
}

impl CalculationSummary {
    /// Assemble a summary from reconciled results.
    ///
    /// `remaining_amount` is clamped at zero so float rounding in the Awl
    /// rescale can never report a negative remainder.
    pub fn new(net_estate: f64, results: Vec<InheritanceResult>, notes: Vec<Note>) -> Self {
        let total_distributed: f64 = results.iter().map(|r| r.amount).sum();
        Self {
            net_estate,
            total_distributed,
            remaining_amount: (net_estate - total_distributed).max(0.0),
            results,
            notes,
        }
    }

    /// Every result for the roster entry `id` (fixed and residuary).
    pub fn results_for<'a>(
        &'a self,
        id: &'a str,
    ) -> impl Iterator<Item = &'a InheritanceResult> + 'a {
        self.results.iter().filter(move |r| r.heir.id == id)
    }

    /// Total amount awarded to the roster entry `id`.
    pub fn amount_for(&self, id: &str) -> f64 {
        self.results_for(id).map(|r| r.amount).sum()
    }

    pub fn awl_applied(&self) -> bool {
        self.notes.iter().any(|n| matches!(n, Note::AwlApplied { .. }))
    }
}

/// A complete case as exchanged with the data-entry layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Case {
    pub deceased: Deceased,
    #[serde(default)]
    pub heirs: Vec<Heir>,
}

impl Case {
    /// Decode a JSON case. Unknown relationship tokens fail here.
    pub fn from_json(s: &str) -> Result<Self, InheritanceError> {
        Ok(serde_json::from_str(s)?)
    }
}
