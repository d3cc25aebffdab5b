//! Play reference data, genres, and per-genre pricing rules.
//!
//! The genre set is a closed enumeration: adding a genre means adding one
//! variant plus its amount and credit rules here, nothing else. The raw
//! `type` string from the catalog is kept on [`Play`] so an unrecognized
//! value can be reported verbatim instead of being rejected at load time.

use crate::error::{Result, StatementError};
use crate::money::Money;
use serde::Deserialize;
use std::collections::HashMap;

/// Pricing category of a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    /// Parses a catalog `type` string into a genre.
    ///
    /// Returns `None` for anything outside the recognized set; callers turn
    /// that into [`StatementError::UnknownPlayType`] with the play's name
    /// attached.
    pub fn from_kind(kind: &str) -> Option<Genre> {
        match kind {
            "tragedy" => Some(Genre::Tragedy),
            "comedy" => Some(Genre::Comedy),
            _ => None,
        }
    }

    /// Amount owed for one performance of this genre.
    pub fn amount(self, audience: u32) -> Money {
        match self {
            Genre::Tragedy => tragedy_amount(audience),
            Genre::Comedy => comedy_amount(audience),
        }
    }

    /// Volume credits earned for one performance of this genre.
    ///
    /// Every genre earns one credit per attendee above 30; comedies earn a
    /// bonus credit per five attendees on top.
    pub fn volume_credits(self, audience: u32) -> u32 {
        let base = audience.saturating_sub(30);
        match self {
            Genre::Tragedy => base,
            Genre::Comedy => base + audience / 5,
        }
    }
}

/// Tragedy pricing: flat 40000 plus 1000 per attendee above 30.
fn tragedy_amount(audience: u32) -> Money {
    let mut amount: i64 = 40_000;
    if audience > 30 {
        amount += 1_000 * i64::from(audience - 30);
    }
    Money::from_minor(amount)
}

/// Comedy pricing: flat 30000, a 10000 + 500-per-attendee-above-20 step,
/// and a 300-per-attendee surcharge regardless of audience size.
fn comedy_amount(audience: u32) -> Money {
    let mut amount: i64 = 30_000;
    if audience > 20 {
        amount += 10_000 + 500 * i64::from(audience - 20);
    }
    amount += 300 * i64::from(audience);
    Money::from_minor(amount)
}

/// A theatrical work as it appears in the play catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Play {
    /// Display name used on statement lines
    pub name: String,

    /// Raw genre string from the catalog (`tragedy`, `comedy`, ...)
    #[serde(rename = "type")]
    pub kind: String,
}

impl Play {
    /// Creates a play from a name and genre string.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Play {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Resolves this play's genre.
    ///
    /// Both pricing and credit computation go through this single point, so
    /// they cannot diverge on what counts as a valid genre.
    pub fn genre(&self) -> Result<Genre> {
        Genre::from_kind(&self.kind).ok_or_else(|| StatementError::UnknownPlayType {
            play: self.name.clone(),
            kind: self.kind.clone(),
        })
    }
}

/// Read-only mapping from play id to play, supplied by the caller.
///
/// Deserializes from a JSON object keyed by play id, matching the shape of
/// the `plays.json` reference file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog(HashMap<String, Play>);

impl PlayCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        PlayCatalog(HashMap::new())
    }

    /// Registers a play under the given id.
    pub fn insert(&mut self, play_id: impl Into<String>, play: Play) {
        self.0.insert(play_id.into(), play);
    }

    /// Looks up a play by id.
    ///
    /// Fails with [`StatementError::UnknownPlayId`] if absent. No fallback
    /// play is substituted; masking a bad reference would corrupt billing.
    pub fn resolve(&self, play_id: &str) -> Result<&Play> {
        self.0.get(play_id).ok_or_else(|| StatementError::UnknownPlayId {
            play_id: play_id.to_string(),
        })
    }

    /// Number of plays in the catalog.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the catalog holds no plays.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
