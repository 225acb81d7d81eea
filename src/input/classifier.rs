//! Input classification for the formula field.
//!
//! Determines whether raw input text represents an operator, a number, or a
//! variable reference, and whether the current keystroke should commit the
//! pending input.

use lazy_static::lazy_static;
use regex::Regex;

use crate::token::TokenKind;

/// Characters that close the current token when typed.
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '^', '(', ')'];

lazy_static! {
    /// Matches strings composed entirely of operator characters.
    static ref OPERATOR_RUN: Regex = Regex::new(r"^[+\-*/^()]+$").unwrap();

    /// Matches integer-or-decimal numerals.
    static ref NUMBER: Regex = Regex::new(r"^\d+(\.\d+)?$").unwrap();
}

/// Check if `c` is one of the formula operator characters.
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Classify a text fragment as operator, number, or variable.
///
/// Anything that is neither an operator run nor a numeral counts as a
/// variable reference, including partial identifiers still being typed.
pub fn classify(input: &str) -> TokenKind {
    if OPERATOR_RUN.is_match(input) {
        TokenKind::Operator
    } else if NUMBER.is_match(input) {
        TokenKind::Number
    } else {
        TokenKind::Variable
    }
}

/// Decision taken for one input-change event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputScan {
    /// The whole string is operator characters and commits as one token.
    OperatorRun,
    /// The string ends with a single operator character; the prefix commits
    /// first (when non-blank), then the operator on its own.
    TrailingOperator { prefix: String, operator: char },
    /// No commit; the string stays in the input box.
    Pending,
}

/// Scan the raw input string after a keystroke.
///
/// Checked against the untrimmed string, in precedence order: a pure
/// operator run commits immediately, a trailing operator splits the input,
/// anything else stays pending.
pub fn scan_input(raw: &str) -> InputScan {
    if !raw.is_empty() && OPERATOR_RUN.is_match(raw) {
        return InputScan::OperatorRun;
    }

    let mut chars = raw.chars();
    if let Some(operator) = chars.next_back()
        && is_operator_char(operator)
    {
        return InputScan::TrailingOperator {
            prefix: chars.as_str().to_string(),
            operator,
        };
    }

    InputScan::Pending
}
