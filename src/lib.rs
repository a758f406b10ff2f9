//! # Combination Studio
//!
//! Parse named categories of text options out of free-form text, select
//! options across categories, and derive a single formatted combination
//! string. An optional AI elaboration step sends the combination to an
//! OpenAI-compatible completion API, gated by per-user API-key storage
//! and a credit balance.
//!
//! ```text
//! raw text → catalog (parse) → session (selection, edits)
//!          → combination string → app (gating) → elaboration
//! ```
//!
//! The `catalog` module is the pure core: parsing, selection state, and
//! combination generation, all side-effect free. Everything around it is
//! glue over injected capabilities (`KeyStore`, `CreditLedger`,
//! `Elaborate`) so it can run against in-memory stand-ins in tests.

pub mod app;
pub mod catalog;
pub mod config;
pub mod credits;
pub mod elaboration;
pub mod secrets;
pub mod session;

pub use app::{App, AppError, Elaborated};
pub use catalog::{generate_combination, parse_text_input, Category, Selection};
pub use config::Config;
pub use session::Session;
