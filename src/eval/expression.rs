//! Projection of the token sequence into a flat expression.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::token::{Token, TokenKind};

use super::outcome::EvalOutcome;
use super::parser::parse_expression;

lazy_static! {
    /// Strips one dangling operator character (and surrounding whitespace)
    /// from the end of the projected expression, so an in-progress edit like
    /// `3 +` still evaluates.
    static ref TRAILING_OPERATOR: Regex = Regex::new(r"\s*[+\-*/^()]\s*$").unwrap();
}

/// Map one token to its evaluation atom: operands contribute their numeric
/// value (0 when unresolved), operators their literal text.
fn atom(token: &Token) -> String {
    match token.kind {
        TokenKind::Operator => token.text.clone(),
        TokenKind::Number | TokenKind::Variable => token.value.unwrap_or(0.0).to_string(),
    }
}

/// Project the token sequence into one flat expression string, atoms joined
/// by single spaces, with a dangling trailing operator trimmed off.
pub fn project_expression(tokens: &[Token]) -> String {
    let joined = tokens.iter().map(atom).collect::<Vec<_>>().join(" ");
    TRAILING_OPERATOR.replace(&joined, "").into_owned()
}

/// Evaluate the committed token sequence.
///
/// Never panics and never propagates an error past this boundary; failures
/// surface as [`EvalOutcome::Error`].
pub fn evaluate_tokens(tokens: &[Token]) -> EvalOutcome {
    let expression = project_expression(tokens);
    if expression.trim().is_empty() {
        return EvalOutcome::Empty;
    }
    match parse_expression(&expression) {
        Ok(value) => EvalOutcome::Value(value),
        Err(error) => {
            trace!(%expression, %error, "expression failed to evaluate");
            EvalOutcome::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_substitutes_values_and_keeps_operator_text() {
        let tokens = vec![
            Token::number("3"),
            Token::operator("+"),
            Token::number("4"),
        ];
        assert_eq!(project_expression(&tokens), "3 + 4");
    }

    #[test]
    fn test_projection_trims_one_dangling_operator() {
        let tokens = vec![Token::number("3"), Token::operator("+")];
        assert_eq!(project_expression(&tokens), "3");
    }

    #[test]
    fn test_unresolved_variable_projects_as_zero() {
        let tokens = vec![
            Token::variable("mystery"),
            Token::operator("+"),
            Token::number("4"),
        ];
        assert_eq!(project_expression(&tokens), "0 + 4");
        assert_eq!(evaluate_tokens(&tokens).value(), Some(4.0));
    }

    #[test]
    fn test_sequence_with_dangling_operator_evaluates() {
        let tokens = vec![Token::number("3"), Token::operator("+")];
        assert_eq!(evaluate_tokens(&tokens).value(), Some(3.0));
    }

    #[test]
    fn test_lone_operator_sequence_is_empty() {
        let tokens = vec![Token::operator("+")];
        assert_eq!(evaluate_tokens(&tokens), EvalOutcome::Empty);
        assert_eq!(evaluate_tokens(&[]), EvalOutcome::Empty);
    }

    #[test]
    fn test_adjacent_operators_error_after_trim() {
        // "3 * +" trims to "3 *", which has no right operand
        let tokens = vec![
            Token::number("3"),
            Token::operator("*"),
            Token::operator("+"),
        ];
        assert!(evaluate_tokens(&tokens).is_error());
    }

    #[test]
    fn test_multi_character_operator_tokens_flow_through() {
        // an operator-run commit like "(" + a number + ")" run
        let tokens = vec![
            Token::operator("("),
            Token::number("2"),
            Token::operator("+"),
            Token::number("3"),
            Token::operator(")*"),
            Token::number("4"),
        ];
        assert_eq!(evaluate_tokens(&tokens).value(), Some(20.0));
    }

    #[test]
    fn test_precedence_applies_to_projected_sequence() {
        let tokens = vec![
            Token::number("2"),
            Token::operator("+"),
            Token::number("3"),
            Token::operator("*"),
            Token::number("4"),
        ];
        assert_eq!(evaluate_tokens(&tokens).value(), Some(14.0));
    }
}
