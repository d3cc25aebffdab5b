//! Plain-text statement rendering.
//!
//! Rendering is a pure formatting step over an already-priced [`Statement`]:
//! no genre dispatch, no catalog access, and it cannot fail on valid input.

use crate::engine::Statement;
use crate::money::CurrencyFormat;

/// Renders a statement as customer-facing text.
///
/// Layout:
///
/// ```text
/// Statement for BigCo
///   Hamlet: $650.00 (55 seats)
///   As You Like It: $580.00 (35 seats)
/// Amount owed is $1,230.00
/// You earned 37 credits
/// ```
pub fn render_plain_text(statement: &Statement, format: &CurrencyFormat) -> String {
    let mut out = format!("Statement for {}\n", statement.customer);

    for line in &statement.lines {
        out.push_str(&format!(
            "  {}: {} ({} seats)\n",
            line.play_name,
            format.format(line.amount),
            line.audience
        ));
    }

    out.push_str(&format!(
        "Amount owed is {}\n",
        format.format(statement.totals.total_amount)
    ));
    out.push_str(&format!(
        "You earned {} credits\n",
        statement.totals.volume_credits
    ));

    out
}
