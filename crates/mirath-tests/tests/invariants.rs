//! Property tests over arbitrary rosters.

use mirath_core::constants::AMOUNT_EPSILON;
use mirath_core::fraction::Fraction;
use mirath_core::roster::{Roster, RosterContext};
use mirath_core::traits::ShareCalculator;
use mirath_core::types::{Deceased, Gender, Heir, Note, Relationship, ShareKind};
use mirath_engine::DistributionEngine;
use mirath_tests::helpers::*;
use proptest::prelude::*;

fn arb_relationship() -> impl Strategy<Value = Relationship> {
    (0..Relationship::ALL.len()).prop_map(|i| Relationship::ALL[i])
}

fn arb_heir() -> impl Strategy<Value = Heir> {
    (arb_relationship(), 1u32..5, any::<bool>(), 0u32..1000).prop_map(
        |(relationship, count, female, tag)| {
            let mut heir = Heir::new(format!("{}-{tag}", relationship.as_str()), relationship)
                .with_count(count);
            if relationship == Relationship::Spouse && female {
                heir = heir.with_gender(Gender::Female);
            }
            heir
        },
    )
}

fn arb_roster() -> impl Strategy<Value = Vec<Heir>> {
    proptest::collection::vec(arb_heir(), 0..10)
}

fn tolerance(net: f64) -> f64 {
    AMOUNT_EPSILON.max(net * 1e-12)
}

proptest! {
    #[test]
    fn never_distributes_more_than_the_estate(
        gross in 0.0f64..1e9,
        roster in arb_roster(),
    ) {
        let s = distribute(gross, &roster);
        prop_assert!(s.total_distributed <= s.net_estate + tolerance(s.net_estate));
        prop_assert!(s.remaining_amount >= 0.0);
        let sum: f64 = s.results.iter().map(|r| r.amount).sum();
        prop_assert!((sum - s.total_distributed).abs() <= tolerance(s.net_estate));
    }

    #[test]
    fn awl_scales_every_claim_by_one_ratio(
        gross in 1.0f64..1e9,
        roster in arb_roster(),
    ) {
        let engine = DistributionEngine::new();
        let deceased = Deceased::new(gross);
        let snapshot = Roster::snapshot(&roster);
        let ctx = RosterContext::from_roster(&snapshot);
        let net = engine.net_estate(&deceased);

        let mut claims = engine.fixed_shares(&snapshot, &ctx, net);
        let fixed_total: f64 = claims.iter().map(|r| r.amount).sum();
        let remaining = net - fixed_total;
        if remaining > 0.0 {
            claims.extend(engine.residuary(&snapshot, remaining, net));
        }
        let claimed: f64 = claims.iter().map(|r| r.amount).sum();

        let s = engine.compute(&deceased, &roster);
        prop_assert_eq!(s.results.len(), claims.len());
        let ratio = if claimed > net { net / claimed } else { 1.0 };
        for (pre, post) in claims.iter().zip(&s.results) {
            prop_assert_eq!(&pre.heir, &post.heir);
            prop_assert!((post.amount - pre.amount * ratio).abs() <= tolerance(net));
        }
        let oversubscribed = engine.fixed_claim(&snapshot, &ctx) > Fraction::ONE;
        prop_assert_eq!(s.awl_applied(), oversubscribed);
        if oversubscribed {
            prop_assert!((s.total_distributed - net).abs() <= tolerance(net));
        }
    }

    #[test]
    fn notes_agree_on_large_estates(
        gross in 1e11f64..1e14,
        roster in arb_roster(),
    ) {
        let engine = DistributionEngine::new();
        let snapshot = Roster::snapshot(&roster);
        let ctx = RosterContext::from_roster(&snapshot);
        let s = distribute(gross, &roster);
        let unclaimed = s
            .notes
            .iter()
            .any(|n| matches!(n, Note::RemainderUnclaimed { .. }));
        prop_assert!(!(s.awl_applied() && unclaimed), "contradicting notes {:?}", s.notes);
        prop_assert_eq!(s.awl_applied(), engine.fixed_claim(&snapshot, &ctx) > Fraction::ONE);
    }

    #[test]
    fn splitting_a_group_does_not_change_its_total(
        gross in 1.0f64..1e7,
        relationship in prop::sample::select(vec![
            Relationship::Daughter,
            Relationship::SisterFull,
            Relationship::SisterMaternal,
            Relationship::GrandmotherPaternal,
            Relationship::Son,
        ]),
        count in 1u32..6,
    ) {
        let pooled = distribute(gross, &[heirs(relationship, count)]);
        let split: Vec<Heir> = (0..count)
            .map(|i| Heir::new(format!("h{i}"), relationship))
            .collect();
        let separate = distribute(gross, &split);
        prop_assert!(
            (pooled.total_distributed - separate.total_distributed).abs() <= tolerance(gross)
        );
        let each = separate.results.first().map_or(0.0, |r| r.amount);
        prop_assert!(separate
            .results
            .iter()
            .all(|r| (r.amount - each).abs() <= tolerance(gross)));
    }

    #[test]
    fn son_takes_twice_a_daughter(
        gross in 1.0f64..1e9,
        sons in 1u32..5,
        daughters in 1u32..5,
        with_wife in any::<bool>(),
    ) {
        let mut roster = vec![
            heirs(Relationship::Son, sons),
            heirs(Relationship::Daughter, daughters),
        ];
        if with_wife {
            roster.push(wife("w"));
        }
        let s = distribute(gross, &roster);
        let son = s.results_for("son").next().map(|r| r.amount_each()).unwrap_or_default();
        let daughter = s
            .results_for("daughter")
            .next()
            .map(|r| r.amount_each())
            .unwrap_or_default();
        prop_assert!((son - 2.0 * daughter).abs() <= tolerance(gross));
        prop_assert!(s
            .results
            .iter()
            .filter(|r| r.heir.relationship != Relationship::Spouse)
            .all(|r| r.kind == ShareKind::Residuary));
        prop_assert!(s.remaining_amount <= tolerance(gross));
    }

    #[test]
    fn ineligible_entries_never_appear(
        gross in 0.0f64..1e6,
        roster in arb_roster(),
        dead in proptest::collection::vec(arb_heir(), 0..4),
    ) {
        let mut full = roster.clone();
        full.extend(dead.into_iter().map(Heir::deceased));
        full.push(heirs(Relationship::Son, 0));
        let with_ineligible = distribute(gross, &full);
        let without = distribute(gross, &roster);
        prop_assert_eq!(with_ineligible, without);
    }
}
