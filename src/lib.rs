//! Interactive formula input engine.
//!
//! Users compose an arithmetic expression out of typed tokens (numbers,
//! operators, and named variables resolved through an autocomplete lookup)
//! while the engine evaluates the sequence live. Rendering is left entirely
//! to the embedding surface; this crate owns the input classifier, the
//! token store, the evaluator, and the suggestion lookup client.
//!
//! The usual wiring: feed every input-change event to
//! [`FormulaSession::handle_input_change`], route the accept and erase keys
//! to [`FormulaSession::handle_accept`] and [`FormulaSession::handle_erase`],
//! drive a [`SuggestionClient`] from [`FormulaSession::suggestion_query`],
//! and render [`FormulaSession::result_display`] after each event.

pub mod eval;
pub mod input;
pub mod suggest;
pub mod token;

pub use eval::{EvalOutcome, ParseError, evaluate_tokens};
pub use input::{FormulaSession, InputScan, classify, scan_input};
pub use suggest::{LookupError, Suggestion, SuggestionClient};
pub use token::{FormulaStore, Token, TokenKind};
