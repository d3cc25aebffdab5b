//! Invoice input models.
//!
//! Field names mirror the `invoices.json` reference shape (`playID`), so an
//! invoice deserializes directly from the caller's data files. The engine
//! never mutates an invoice.

use serde::Deserialize;

/// One invoice line: a scheduled showing of a play with its attendance.
#[derive(Debug, Clone, Deserialize)]
pub struct Performance {
    /// Play identifier; must resolve in the supplied catalog
    #[serde(rename = "playID")]
    pub play_id: String,

    /// Attendee count
    pub audience: u32,
}

/// A billing request for one customer covering a sequence of performances.
///
/// Performance order is significant: it determines statement line order.
#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    /// Customer display name
    pub customer: String,

    /// Performances in display order
    pub performances: Vec<Performance>,
}
