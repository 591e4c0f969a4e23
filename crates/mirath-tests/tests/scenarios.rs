//! Worked distribution cases, end to end through the engine.
//!
//! Amounts are chosen so every expected figure is a whole number.

use mirath_core::traits::ShareCalculator;
use mirath_core::types::{Basis, Deceased, Heir, Note, Relationship, ShareKind};
use mirath_engine::DistributionEngine;
use mirath_tests::helpers::*;

// --- single-heir and fixed-only cases ---

#[test]
fn wife_alone_leaves_three_quarters_unclaimed() {
    let s = distribute(120_000.0, &[wife("w")]);
    assert_eq!(s.results.len(), 1);
    assert_eq!(s.results[0].amount, 30_000.0);
    assert_eq!(s.results[0].basis, Basis::Quran4_12);
    assert_eq!(s.total_distributed, 30_000.0);
    assert_eq!(s.remaining_amount, 90_000.0);
}

#[test]
fn husband_alone_takes_exactly_half() {
    let s = distribute(77_777.0, &[husband()]);
    assert_eq!(s.results[0].share, 0.5);
    assert_eq!(s.results[0].amount, 77_777.0 / 2.0);
}

#[test]
fn two_full_sisters_take_two_thirds() {
    let s = distribute(90_000.0, &[heirs(Relationship::SisterFull, 2)]);
    assert_eq!(s.results.len(), 1);
    assert_eq!(s.results[0].amount, 60_000.0);
    assert_eq!(s.results[0].amount_each(), 30_000.0);
    assert_eq!(s.remaining_amount, 30_000.0);
}

#[test]
fn two_full_sisters_as_separate_entries() {
    let roster = [
        Heir::new("s1", Relationship::SisterFull),
        Heir::new("s2", Relationship::SisterFull),
    ];
    let s = distribute(90_000.0, &roster);
    assert_amount(s.amount_for("s1"), 30_000.0);
    assert_amount(s.amount_for("s2"), 30_000.0);
    assert_amount(s.remaining_amount, 30_000.0);
}

#[test]
fn mother_alone_takes_third_without_return() {
    let s = distribute(90_000.0, &[heirs(Relationship::Mother, 1)]);
    assert_amount(s.total_distributed, 30_000.0);
    assert_amount(s.remaining_amount, 60_000.0);
    assert!(s
        .notes
        .iter()
        .any(|n| matches!(n, Note::RemainderUnclaimed { .. })));
}

// --- fixed plus residuary ---

#[test]
fn father_and_two_sons() {
    let roster = [
        heirs(Relationship::Father, 1),
        heirs(Relationship::Son, 2),
    ];
    let s = distribute(120_000.0, &roster);
    assert_eq!(s.amount_for("father"), 20_000.0);
    let sons = s.results_for("son").next().unwrap();
    assert_eq!(sons.kind, ShareKind::Residuary);
    assert_eq!(sons.amount, 100_000.0);
    assert_eq!(sons.amount_each(), 50_000.0);
    assert_amount(s.remaining_amount, 0.0);
}

#[test]
fn two_sons_as_separate_entries_split_equally() {
    let roster = [
        heirs(Relationship::Father, 1),
        Heir::new("s1", Relationship::Son),
        Heir::new("s2", Relationship::Son),
    ];
    let s = distribute(120_000.0, &roster);
    assert_eq!(s.amount_for("s1"), 50_000.0);
    assert_eq!(s.amount_for("s2"), 50_000.0);
}

#[test]
fn nuclear_family() {
    // Wife 1/8, mother 1/6, father 1/6; son and daughter share the rest 2:1.
    let roster = [
        wife("w"),
        heirs(Relationship::Mother, 1),
        heirs(Relationship::Father, 1),
        heirs(Relationship::Son, 1),
        heirs(Relationship::Daughter, 1),
    ];
    let s = distribute(72_000.0, &roster);
    assert_amount(s.amount_for("w"), 9_000.0);
    assert_amount(s.amount_for("mother"), 12_000.0);
    assert_amount(s.amount_for("father"), 12_000.0);
    assert_amount(s.amount_for("son"), 26_000.0);
    assert_amount(s.amount_for("daughter"), 13_000.0);
    assert_amount(s.remaining_amount, 0.0);
    assert!(!s.awl_applied());
}

#[test]
fn deductions_come_off_before_distribution() {
    let deceased = Deceased {
        gross_estate: 150_000.0,
        debts: 20_000.0,
        funeral_expenses: 10_000.0,
        bequest: 20_000.0,
        ..Deceased::default()
    };
    let roster = [husband(), heirs(Relationship::Son, 1)];
    let s = DistributionEngine::new().compute(&deceased, &roster);
    assert_eq!(s.net_estate, 100_000.0);
    assert_eq!(s.amount_for("husband"), 25_000.0);
    assert_eq!(s.amount_for("son"), 75_000.0);
}

#[test]
fn parents_without_children() {
    let roster = [heirs(Relationship::Mother, 1), heirs(Relationship::Father, 1)];
    let s = distribute(90_000.0, &roster);
    assert_amount(s.amount_for("mother"), 30_000.0);
    let father: Vec<_> = s.results_for("father").collect();
    assert_eq!(father.len(), 1);
    assert_eq!(father[0].kind, ShareKind::Residuary);
    assert_amount(father[0].amount, 60_000.0);
}

#[test]
fn grandfather_stands_in_for_father() {
    let roster = [
        heirs(Relationship::GrandfatherPaternal, 1),
        heirs(Relationship::Son, 1),
    ];
    let s = distribute(60_000.0, &roster);
    assert_amount(s.amount_for("grandfather_paternal"), 10_000.0);
    assert_amount(s.amount_for("son"), 50_000.0);
}

#[test]
fn grandfather_takes_residue_without_descendants() {
    let roster = [wife("w"), heirs(Relationship::GrandfatherPaternal, 1)];
    let s = distribute(60_000.0, &roster);
    assert_amount(s.amount_for("w"), 15_000.0);
    let gf: Vec<_> = s.results_for("grandfather_paternal").collect();
    assert_eq!(gf.len(), 1);
    assert_eq!(gf[0].kind, ShareKind::Residuary);
    assert_amount(gf[0].amount, 45_000.0);
}

#[test]
fn grandmothers_share_a_sixth_uncle_takes_rest() {
    let roster = [
        heirs(Relationship::GrandmotherPaternal, 1),
        heirs(Relationship::GrandmotherMaternal, 1),
        heirs(Relationship::UnclePaternal, 1),
    ];
    let s = distribute(60_000.0, &roster);
    assert_amount(s.amount_for("grandmother_paternal"), 5_000.0);
    assert_amount(s.amount_for("grandmother_maternal"), 5_000.0);
    assert_amount(s.amount_for("uncle_paternal"), 50_000.0);
    assert_eq!(s.results[0].basis, Basis::HadithSahih);
}

#[test]
fn daughter_and_full_brother() {
    let roster = [heirs(Relationship::Daughter, 1), heirs(Relationship::BrotherFull, 1)];
    let s = distribute(40_000.0, &roster);
    assert_amount(s.amount_for("daughter"), 20_000.0);
    assert_amount(s.amount_for("brother_full"), 20_000.0);
}

#[test]
fn full_sister_excluded_by_daughter() {
    let roster = [heirs(Relationship::Daughter, 1), heirs(Relationship::SisterFull, 1)];
    let s = distribute(40_000.0, &roster);
    assert_amount(s.amount_for("daughter"), 20_000.0);
    assert_eq!(s.results_for("sister_full").count(), 0);
    assert_amount(s.remaining_amount, 20_000.0);
}

#[test]
fn only_sons_daughters_join_the_residue() {
    // A son's daughter does not join a son's son.
    let roster = [heirs(Relationship::SonOfSon, 1), heirs(Relationship::DaughterOfSon, 1)];
    let s = distribute(30_000.0, &roster);
    assert_amount(s.amount_for("son_of_son"), 30_000.0);
    assert_eq!(s.results_for("daughter_of_son").count(), 0);
}

#[test]
fn full_brother_excludes_paternal_brother_and_uncle() {
    let roster = [
        heirs(Relationship::UnclePaternal, 1),
        heirs(Relationship::BrotherPaternal, 2),
        heirs(Relationship::BrotherFull, 1),
    ];
    let s = distribute(10_000.0, &roster);
    assert_eq!(s.results.len(), 1);
    assert_eq!(s.results[0].heir.relationship, Relationship::BrotherFull);
    assert_amount(s.results[0].amount, 10_000.0);
}

#[test]
fn paternal_cousin_as_last_resort() {
    let s = distribute(5_000.0, &[heirs(Relationship::CousinPaternal, 3)]);
    assert_amount(s.total_distributed, 5_000.0);
    assert_eq!(s.results[0].basis, Basis::Asabah);
}

#[test]
fn four_wives_share_an_eighth() {
    let roster = [wife("w").with_count(4), heirs(Relationship::Son, 1)];
    let s = distribute(64_000.0, &roster);
    let wives = s.results_for("w").next().unwrap();
    assert_amount(wives.amount, 8_000.0);
    assert_amount(wives.amount_each(), 2_000.0);
    assert_amount(s.amount_for("son"), 56_000.0);
}

// --- Awl ---

#[test]
fn awl_husband_sisters_maternal_brother() {
    // 1/2 + 2/3 + 1/6 = 4/3, scaled by 3/4.
    let roster = [
        husband(),
        heirs(Relationship::SisterFull, 2),
        heirs(Relationship::BrotherMaternal, 1),
    ];
    let s = distribute(96_000.0, &roster);
    assert!(s.awl_applied());
    assert_amount(s.amount_for("husband"), 36_000.0);
    assert_amount(s.amount_for("sister_full"), 48_000.0);
    assert_amount(s.amount_for("brother_maternal"), 12_000.0);
    assert_amount(s.total_distributed, 96_000.0);
    assert!(s.remaining_amount >= 0.0);
}

#[test]
fn awl_with_daughters_and_parents() {
    // 1/4 + 2/3 + 1/6 + 1/6 = 5/4, scaled by 4/5.
    let roster = [
        husband(),
        heirs(Relationship::Daughter, 2),
        heirs(Relationship::Father, 1),
        heirs(Relationship::Mother, 1),
    ];
    let s = distribute(150_000.0, &roster);
    assert_amount(s.amount_for("husband"), 30_000.0);
    assert_amount(s.amount_for("daughter"), 80_000.0);
    assert_amount(s.amount_for("father"), 20_000.0);
    assert_amount(s.amount_for("mother"), 20_000.0);
    // The father's residuary claim never materialises: nothing is left.
    assert!(s.results_for("father").all(|r| r.kind == ShareKind::Fixed));
    let husband_share = s.results_for("husband").next().unwrap().share;
    assert!((husband_share - 0.2).abs() < 1e-12);
}

// --- roster filtering and purity ---

#[test]
fn dead_and_empty_entries_are_ignored() {
    let roster = [
        heirs(Relationship::Son, 1).deceased(),
        Heir::new("b", Relationship::BrotherFull).with_count(0),
        heirs(Relationship::Daughter, 1),
    ];
    let s = distribute(10_000.0, &roster);
    assert_eq!(s.results.len(), 1);
    assert_amount(s.amount_for("daughter"), 5_000.0);
    assert_amount(s.remaining_amount, 5_000.0);
}

#[test]
fn caller_roster_is_untouched() {
    let roster = vec![
        wife("w"),
        heirs(Relationship::Son, 2).deceased(),
        heirs(Relationship::Daughter, 3),
    ];
    let before = roster.clone();
    let _ = distribute(10_000.0, &roster);
    assert_eq!(roster, before);
}

#[test]
fn identical_inputs_identical_output() {
    let roster = [
        husband(),
        heirs(Relationship::SisterFull, 2),
        heirs(Relationship::Mother, 1),
    ];
    let a = distribute(123_456.78, &roster);
    let b = distribute(123_456.78, &roster);
    assert_eq!(a, b);
    assert_eq!(
        a.results.iter().map(|r| r.amount.to_bits()).collect::<Vec<_>>(),
        b.results.iter().map(|r| r.amount.to_bits()).collect::<Vec<_>>()
    );
}

#[test]
fn summary_serializes_with_wire_tokens() {
    let s = distribute(120_000.0, &[wife("w")]);
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["results"][0]["heir"]["relationship"], "spouse");
    assert_eq!(json["results"][0]["heir"]["gender"], "female");
    assert_eq!(json["results"][0]["basis"], "quran_4_12");
    assert_eq!(json["notes"][0]["code"], "remainder_unclaimed");
}
