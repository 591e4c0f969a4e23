//! Plain-text rendering of distribution summaries.

use std::fmt::Write as _;

use mirath_core::types::{CalculationSummary, Note, Relationship, ShareKind};

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

fn percent(share: f64) -> String {
    format!("{:.2}%", share * 100.0)
}

/// Render a summary as an aligned table followed by totals and notes.
pub fn summary_text(summary: &CalculationSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Net estate:        {}", money(summary.net_estate));
    let _ = writeln!(out, "Total distributed: {}", money(summary.total_distributed));
    let _ = writeln!(out, "Remaining:         {}", money(summary.remaining_amount));
    let _ = writeln!(out);

    if summary.results.is_empty() {
        let _ = writeln!(out, "No heir receives a share.");
    } else {
        let _ = writeln!(
            out,
            "{:<12} {:<22} {:>5} {:>9} {:>15} {:>15}  {}",
            "ID", "RELATIONSHIP", "COUNT", "SHARE", "AMOUNT", "EACH", "BASIS"
        );
        for r in &summary.results {
            let basis = match r.kind {
                ShareKind::Fixed => r.basis.code().to_string(),
                ShareKind::Residuary => format!("{} (residuary)", r.basis.code()),
            };
            let _ = writeln!(
                out,
                "{:<12} {:<22} {:>5} {:>9} {:>15} {:>15}  {}",
                r.heir.id,
                r.heir.relationship.as_str(),
                r.heir.count,
                percent(r.share),
                money(r.amount),
                money(r.amount_each()),
                basis
            );
        }
    }

    if !summary.notes.is_empty() {
        let _ = writeln!(out);
        for note in &summary.notes {
            let detail = match note {
                Note::AwlApplied { ratio } => format!("shares scaled by {ratio:.6}"),
                Note::RemainderUnclaimed { amount } => {
                    format!("{} has no claimant", money(*amount))
                }
            };
            let _ = writeln!(out, "note: {}: {}", note.code(), detail);
        }
    }
    out
}

/// One line per relationship token: token, default gender, group.
pub fn relationships_text() -> String {
    let mut out = String::new();
    for r in Relationship::ALL {
        let _ = writeln!(
            out,
            "{:<22} {:<7} {:?}",
            r.as_str(),
            r.default_gender().as_str(),
            r.group()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirath_core::traits::ShareCalculator;
    use mirath_core::types::{Deceased, Gender, Heir};
    use mirath_engine::DistributionEngine;

    #[test]
    fn formats_amounts_and_percentages() {
        assert_eq!(money(30_000.0), "30000.00");
        assert_eq!(percent(0.25), "25.00%");
        assert_eq!(percent(1.0 / 6.0), "16.67%");
    }

    #[test]
    fn wife_only_summary() {
        let heirs = [Heir::new("w", Relationship::Spouse).with_gender(Gender::Female)];
        let s = DistributionEngine::new().compute(&Deceased::new(120_000.0), &heirs);
        let text = summary_text(&s);
        assert!(text.contains("Net estate:        120000.00"));
        assert!(text.contains("Remaining:         90000.00"));
        assert!(text.contains("quran_4_12"));
        assert!(text.contains("note: remainder_unclaimed: 90000.00 has no claimant"));
    }

    #[test]
    fn empty_summary() {
        let s = DistributionEngine::new().compute(&Deceased::new(10.0), &[]);
        assert!(summary_text(&s).contains("No heir receives a share."));
    }

    #[test]
    fn lists_every_relationship() {
        let text = relationships_text();
        assert_eq!(text.lines().count(), 18);
        assert!(text.lines().any(|l| l.starts_with("grandmother_maternal")));
    }
}
