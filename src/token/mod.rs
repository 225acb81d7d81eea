//! Token model for the formula sequence.

mod store;

pub use store::FormulaStore;

use crate::input::classify;
use crate::suggest::Suggestion;

/// The kind of a committed formula token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A named variable resolved through the suggestion lookup.
    Variable,
    /// A numeric literal.
    Number,
    /// One or more operator characters, kept as literal text.
    Operator,
}

/// One atomic unit of the formula.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The literal text as typed or selected. Variable tokens built from a
    /// suggestion may carry a leading operator character (see
    /// [`Token::from_suggestion`]).
    pub text: String,
    /// Numeric payload for number and variable tokens. Operators never
    /// carry one; a missing variable value coerces to 0 at evaluation.
    pub value: Option<f64>,
    /// Stable identifier, carried through from the suggestion when present.
    pub id: Option<String>,
}

impl Token {
    /// An operator token. `text` may hold several operator characters when
    /// the whole input was an operator run.
    pub fn operator(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Operator,
            text: text.into(),
            value: None,
            id: None,
        }
    }

    /// A number token; `value` is the numeric parse of `text`.
    pub fn number(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = text.trim().parse().ok();
        Self {
            kind: TokenKind::Number,
            text,
            value,
            id: None,
        }
    }

    /// A variable token typed by hand, with no resolved value yet.
    pub fn variable(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Variable,
            text: text.into(),
            value: None,
            id: None,
        }
    }

    /// Classify trimmed pending input into a committed token.
    ///
    /// Returns `None` when the input trims to nothing.
    pub fn from_pending(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match classify(trimmed) {
            TokenKind::Operator => Self::operator(trimmed),
            TokenKind::Number => Self::number(trimmed),
            TokenKind::Variable => Self::variable(trimmed),
        })
    }

    /// Build a variable token from an accepted suggestion, optionally fusing
    /// a peeled-off operator character onto the front of its name.
    ///
    /// Non-numeric suggestion values coerce to 0.
    pub fn from_suggestion(suggestion: &Suggestion, operator: Option<char>) -> Self {
        let text = match operator {
            Some(op) => format!("{op}{}", suggestion.name),
            None => suggestion.name.clone(),
        };
        Self {
            kind: TokenKind::Variable,
            text,
            value: Some(suggestion.numeric_value().unwrap_or(0.0)),
            id: (!suggestion.id.is_empty()).then(|| suggestion.id.clone()),
        }
    }

    /// Check if this token is a variable reference.
    pub fn is_variable(&self) -> bool {
        self.kind == TokenKind::Variable
    }

    /// Check if this token is a numeric literal.
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    /// Check if this token is an operator.
    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_token_parses_value() {
        let token = Token::number("42.5");
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.value, Some(42.5));
    }

    #[test]
    fn test_from_pending_trims_and_classifies() {
        let token = Token::from_pending("  3.5  ").unwrap();
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.text, "3.5");
        assert_eq!(token.value, Some(3.5));

        let token = Token::from_pending(" revenue ").unwrap();
        assert_eq!(token.kind, TokenKind::Variable);
        assert_eq!(token.text, "revenue");
        assert_eq!(token.value, None);
    }

    #[test]
    fn test_from_pending_rejects_blank_input() {
        assert_eq!(Token::from_pending(""), None);
        assert_eq!(Token::from_pending("   "), None);
    }

    #[test]
    fn test_from_suggestion_fuses_operator_prefix() {
        let suggestion: Suggestion =
            serde_json::from_str(r#"{"name": "revenue", "category": "kpi", "value": 120, "id": "r1"}"#)
                .unwrap();

        let token = Token::from_suggestion(&suggestion, Some('*'));
        assert!(token.is_variable());
        assert_eq!(token.text, "*revenue");
        assert_eq!(token.value, Some(120.0));
        assert_eq!(token.id.as_deref(), Some("r1"));

        let token = Token::from_suggestion(&suggestion, None);
        assert_eq!(token.text, "revenue");
    }

    #[test]
    fn test_from_suggestion_coerces_non_numeric_value() {
        let suggestion: Suggestion =
            serde_json::from_str(r#"{"name": "label", "value": "n/a", "id": ""}"#).unwrap();

        let token = Token::from_suggestion(&suggestion, None);
        assert_eq!(token.value, Some(0.0));
        assert_eq!(token.id, None);
    }
}
