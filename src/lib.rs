//! # Statement Engine
//!
//! Prices theatrical performances from an invoice against a play catalog
//! and renders a customer-facing billing statement.
//!
//! ## Design Principles
//!
//! - **Integer minor units**: money is `i64` cents via [`Money`], no floats
//! - **Per-genre rules**: each [`Genre`] carries its own amount and credit
//!   functions; adding a genre touches only `play.rs`
//! - **Atomic statements**: one bad play id or genre fails the invoice with
//!   no partial output
//! - **Explicit formatting**: currency and locale travel as a
//!   [`CurrencyFormat`] value passed to the renderer, never global state
//!
//! ## Example
//!
//! ```
//! use statement_engine::{build_statement, render_plain_text, CurrencyFormat, Invoice, PlayCatalog};
//!
//! let plays: PlayCatalog = serde_json::from_str(
//!     r#"{"hamlet": {"name": "Hamlet", "type": "tragedy"}}"#,
//! ).unwrap();
//! let invoice: Invoice = serde_json::from_str(
//!     r#"{"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": 55}]}"#,
//! ).unwrap();
//!
//! let statement = build_statement(&invoice, &plays).unwrap();
//! let text = render_plain_text(&statement, &CurrencyFormat::default());
//! assert!(text.contains("Hamlet: $650.00 (55 seats)"));
//! ```

pub mod engine;
pub mod error;
pub mod invoice;
pub mod money;
pub mod play;
pub mod render;

pub use engine::{build_statement, Statement, StatementLine, StatementTotals};
pub use error::{Result, StatementError};
pub use invoice::{Invoice, Performance};
pub use money::{CurrencyFormat, Money};
pub use play::{Genre, Play, PlayCatalog};
pub use render::render_plain_text;
