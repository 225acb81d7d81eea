//! HTTP fetch for the suggestion endpoint.

use thiserror::Error;

use super::Suggestion;

/// Raised when the suggestion endpoint cannot be reached or decoded.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("error fetching suggestions: {0}")]
    Transport(#[source] Box<ureq::Error>),
    #[error("suggestion endpoint returned status {0}")]
    Status(u16),
    #[error("failed to read suggestion response: {0}")]
    Read(#[source] std::io::Error),
    #[error("malformed suggestion payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Fetch suggestions for `query` from the configured endpoint.
///
/// Empty and whitespace-only queries short-circuit to an empty list without
/// a network call. The query travels URL-encoded as the `query` parameter;
/// the response body is a JSON array of suggestion records.
pub fn fetch_suggestions(endpoint: &str, query: &str) -> Result<Vec<Suggestion>, LookupError> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let url = format!("{}?query={}", endpoint, urlencoding::encode(query));
    let response = ureq::Agent::new().get(&url).call().map_err(|err| match err {
        ureq::Error::Status(code, _) => LookupError::Status(code),
        other => LookupError::Transport(Box::new(other)),
    })?;

    let body = response.into_string().map_err(LookupError::Read)?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_short_circuits_without_network() {
        // the endpoint is unreachable on purpose; a blank query must not
        // touch it
        assert!(fetch_suggestions("http://invalid.test", "").unwrap().is_empty());
        assert!(fetch_suggestions("http://invalid.test", "   ").unwrap().is_empty());
    }
}
