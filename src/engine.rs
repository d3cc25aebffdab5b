//! Core statement-building engine.
//!
//! Walks an invoice's performances in order, resolves each play and its
//! genre, prices the line, and accumulates totals. Building is atomic: a
//! single bad play id or genre fails the whole invoice, and no partial
//! statement is produced.

use crate::error::Result;
use crate::invoice::Invoice;
use crate::money::Money;
use crate::play::PlayCatalog;
use log::debug;
use serde::Serialize;

/// One priced performance on a statement.
#[derive(Debug, Clone, Serialize)]
pub struct StatementLine {
    /// Play display name
    pub play_name: String,

    /// Attendee count
    pub audience: u32,

    /// Amount owed for this performance, in minor units
    pub amount: Money,
}

/// Aggregate totals across all statement lines.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StatementTotals {
    /// Sum of all line amounts
    pub total_amount: Money,

    /// Sum of all per-line volume credits
    pub volume_credits: u32,
}

/// A fully priced statement: the structured output consumed by renderers.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    /// Customer display name from the invoice
    pub customer: String,

    /// Priced lines in invoice order
    pub lines: Vec<StatementLine>,

    /// Aggregate totals
    pub totals: StatementTotals,
}

/// Prices every performance on the invoice against the catalog.
///
/// Pure function of its arguments: the same invoice and catalog always
/// yield the same statement, in invoice order. Fails with
/// [`UnknownPlayId`](crate::StatementError::UnknownPlayId) or
/// [`UnknownPlayType`](crate::StatementError::UnknownPlayType) on the first
/// bad reference, returning no partial statement.
pub fn build_statement(invoice: &Invoice, plays: &PlayCatalog) -> Result<Statement> {
    let mut lines = Vec::with_capacity(invoice.performances.len());
    let mut totals = StatementTotals::default();

    for performance in &invoice.performances {
        let play = plays.resolve(&performance.play_id)?;
        let genre = play.genre()?;

        let amount = genre.amount(performance.audience);
        let credits = genre.volume_credits(performance.audience);

        debug!(
            "Priced {} ({} seats): {} minor units, {} credits",
            play.name, performance.audience, amount.minor_units(), credits
        );

        totals.total_amount += amount;
        totals.volume_credits += credits;
        lines.push(StatementLine {
            play_name: play.name.clone(),
            audience: performance.audience,
            amount,
        });
    }

    Ok(Statement {
        customer: invoice.customer.clone(),
        lines,
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatementError;
    use crate::invoice::Performance;
    use crate::play::Play;

    fn catalog() -> PlayCatalog {
        let mut plays = PlayCatalog::new();
        plays.insert("hamlet", Play::new("Hamlet", "tragedy"));
        plays.insert("as-like", Play::new("As You Like It", "comedy"));
        plays.insert("othello", Play::new("Othello", "tragedy"));
        plays
    }

    fn invoice(performances: Vec<Performance>) -> Invoice {
        Invoice {
            customer: "BigCo".to_string(),
            performances,
        }
    }

    fn perf(play_id: &str, audience: u32) -> Performance {
        Performance {
            play_id: play_id.to_string(),
            audience,
        }
    }

    #[test]
    fn test_empty_invoice_yields_zero_totals() {
        let statement = build_statement(&invoice(vec![]), &catalog()).unwrap();

        assert!(statement.lines.is_empty());
        assert_eq!(statement.totals.total_amount, Money::ZERO);
        assert_eq!(statement.totals.volume_credits, 0);
    }

    #[test]
    fn test_lines_follow_invoice_order() {
        let statement = build_statement(
            &invoice(vec![perf("othello", 10), perf("hamlet", 20), perf("othello", 30)]),
            &catalog(),
        )
        .unwrap();

        let names: Vec<&str> = statement.lines.iter().map(|l| l.play_name.as_str()).collect();
        assert_eq!(names, ["Othello", "Hamlet", "Othello"]);
    }

    #[test]
    fn test_totals_match_line_sums() {
        let statement = build_statement(
            &invoice(vec![perf("hamlet", 55), perf("as-like", 35), perf("othello", 40)]),
            &catalog(),
        )
        .unwrap();

        let line_sum: Money = statement.lines.iter().map(|l| l.amount).sum();
        assert_eq!(statement.totals.total_amount, line_sum);
    }

    #[test]
    fn test_reference_invoice_fixture() {
        let statement = build_statement(
            &invoice(vec![perf("hamlet", 55), perf("as-like", 35)]),
            &catalog(),
        )
        .unwrap();

        assert_eq!(statement.lines[0].amount, Money::from_minor(65_000));
        assert_eq!(statement.lines[1].amount, Money::from_minor(58_000));
        assert_eq!(statement.totals.total_amount, Money::from_minor(123_000));
        assert_eq!(statement.totals.volume_credits, 37);
    }

    #[test]
    fn test_unknown_play_id_fails_whole_invoice() {
        let err = build_statement(
            &invoice(vec![perf("hamlet", 55), perf("macbeth", 10)]),
            &catalog(),
        )
        .unwrap_err();

        match err {
            StatementError::UnknownPlayId { play_id } => assert_eq!(play_id, "macbeth"),
            other => panic!("expected UnknownPlayId, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_play_type_fails_whole_invoice() {
        let mut plays = catalog();
        plays.insert("henry-v", Play::new("Henry V", "history"));

        let err = build_statement(
            &invoice(vec![perf("hamlet", 55), perf("henry-v", 50)]),
            &plays,
        )
        .unwrap_err();

        match err {
            StatementError::UnknownPlayType { play, kind } => {
                assert_eq!(play, "Henry V");
                assert_eq!(kind, "history");
            }
            other => panic!("expected UnknownPlayType, got {other:?}"),
        }
    }

    #[test]
    fn test_determinism() {
        let inv = invoice(vec![perf("hamlet", 55), perf("as-like", 35)]);
        let plays = catalog();

        let first = build_statement(&inv, &plays).unwrap();
        let second = build_statement(&inv, &plays).unwrap();

        assert_eq!(first.totals.total_amount, second.totals.total_amount);
        assert_eq!(first.totals.volume_credits, second.totals.volume_credits);
        assert_eq!(first.lines.len(), second.lines.len());
    }
}
