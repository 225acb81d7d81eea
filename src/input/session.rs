//! The formula editing session.
//!
//! Owns the pending input text and the committed token sequence, and applies
//! the commit rules on every input and key event. All mutations happen
//! synchronously on the owning thread.

use tracing::debug;

use crate::eval::{EvalOutcome, evaluate_tokens};
use crate::suggest::Suggestion;
use crate::token::{FormulaStore, Token, TokenKind};

use super::classifier::{InputScan, classify, is_operator_char, scan_input};

/// One formula editing session: a token store plus the in-progress input.
#[derive(Debug, Default)]
pub struct FormulaSession {
    store: FormulaStore,
    pending: String,
}

impl FormulaSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed tokens in display and evaluation order.
    pub fn tokens(&self) -> &[Token] {
        self.store.tokens()
    }

    /// The in-progress, not-yet-committed input text.
    pub fn pending_input(&self) -> &str {
        &self.pending
    }

    /// Positional edits for hosts that wire per-token menus.
    pub fn store_mut(&mut self) -> &mut FormulaStore {
        &mut self.store
    }

    /// Apply one input-change event carrying the full new input string.
    ///
    /// A pure operator run commits as one token and a trailing operator
    /// splits the input; in both cases the input box clears. Anything else
    /// becomes the new pending text.
    pub fn handle_input_change(&mut self, raw: &str) {
        match scan_input(raw) {
            InputScan::OperatorRun => {
                self.store.add_token(Token::operator(raw), None);
                self.pending.clear();
            }
            InputScan::TrailingOperator { prefix, operator } => {
                if let Some(token) = Token::from_pending(&prefix) {
                    self.store.add_token(token, None);
                }
                self.store.add_token(Token::operator(operator.to_string()), None);
                self.pending.clear();
            }
            InputScan::Pending => {
                self.pending.clear();
                self.pending.push_str(raw);
            }
        }
    }

    /// Accept key: commit the trimmed pending input as one classified token
    /// and run an evaluation pass. Blank input commits nothing.
    pub fn handle_accept(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let Some(token) = Token::from_pending(&self.pending) else {
            return;
        };
        debug!(text = %token.text, kind = ?token.kind, "accept key committed pending input");
        self.store.add_token(token, None);
        self.pending.clear();

        let outcome = self.evaluate();
        debug!(result = %outcome.display(), "formula evaluated");
    }

    /// Erase key: with empty pending input, drop the last committed token.
    /// No-op when the sequence is empty too; character deletion inside
    /// non-empty pending text arrives as a regular input change.
    pub fn handle_erase(&mut self) {
        if self.pending.is_empty() {
            self.store.remove_last();
        }
    }

    /// Accept a lookup suggestion for the pending variable input.
    ///
    /// A trailing operator character in the pending input is peeled off and
    /// fused onto the front of the suggestion name rather than committed as
    /// its own operator token.
    pub fn accept_suggestion(&mut self, suggestion: &Suggestion) {
        let operator = self.pending.chars().next_back().filter(|c| is_operator_char(*c));
        self.store.add_token(Token::from_suggestion(suggestion, operator), None);
        self.pending.clear();
    }

    /// The query to look up, when the pending input is composing a variable.
    ///
    /// Operator runs and numerals never trigger a lookup, and neither does
    /// blank input.
    pub fn suggestion_query(&self) -> Option<&str> {
        let trimmed = self.pending.trim();
        if !trimmed.is_empty() && classify(trimmed) == TokenKind::Variable {
            Some(trimmed)
        } else {
            None
        }
    }

    /// Evaluate the committed sequence.
    pub fn evaluate(&self) -> EvalOutcome {
        evaluate_tokens(self.store.tokens())
    }

    /// The live result string shown next to the field: `"N/A"` while no
    /// tokens exist, otherwise the evaluation display.
    pub fn result_display(&self) -> String {
        if self.store.is_empty() {
            "N/A".to_string()
        } else {
            self.evaluate().display()
        }
    }
}
