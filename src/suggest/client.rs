//! Asynchronous suggestion client with last-request-wins delivery.

use std::collections::HashSet;
use std::thread;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tracing::{debug, warn};

use super::Suggestion;
use super::cache::SuggestionCache;
use super::fetch::{LookupError, fetch_suggestions};

/// Environment variable naming the autocomplete endpoint.
pub const ENDPOINT_ENV: &str = "FORMULATE_AUTOCOMPLETE_URL";

/// A completed lookup, tagged with the query that produced it.
#[derive(Debug)]
pub struct LookupReply {
    pub query: String,
    pub result: Result<Vec<Suggestion>, LookupError>,
}

/// Client for the variable lookup endpoint.
///
/// Cache hits resolve synchronously; misses run on a worker thread and are
/// collected with [`SuggestionClient::drain`]. Replies for queries the user
/// has already moved past are cached but never surfaced, so a stale
/// response cannot overwrite the suggestions for the current input.
pub struct SuggestionClient {
    endpoint: String,
    cache: SuggestionCache,
    in_flight: HashSet<String>,
    tx: flume::Sender<LookupReply>,
    rx: flume::Receiver<LookupReply>,
}

impl SuggestionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            endpoint: endpoint.into(),
            cache: SuggestionCache::new(),
            in_flight: HashSet::new(),
            tx,
            rx,
        }
    }

    /// Build a client from the `FORMULATE_AUTOCOMPLETE_URL` environment
    /// variable. `None` when it is unset or empty.
    pub fn from_env() -> Option<Self> {
        std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|endpoint| !endpoint.is_empty())
            .map(Self::new)
    }

    /// Request suggestions for `query`.
    ///
    /// Returns the cached result when one exists; otherwise spawns a fetch
    /// (deduplicating queries already in flight) and returns `None` until a
    /// matching reply is drained. Blank queries resolve to an empty list
    /// without any fetch.
    pub fn lookup(&mut self, query: &str) -> Option<Vec<Suggestion>> {
        if query.trim().is_empty() {
            return Some(Vec::new());
        }
        if let Some(hit) = self.cache.get(query) {
            return Some(hit.to_vec());
        }
        if self.in_flight.contains(query) {
            return None;
        }

        self.in_flight.insert(query.to_string());
        debug!(query, "fetching suggestions");

        let endpoint = self.endpoint.clone();
        let query = query.to_string();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = fetch_suggestions(&endpoint, &query);
            let _ = tx.send(LookupReply { query, result });
        });

        None
    }

    /// Collect completed lookups.
    ///
    /// Every successful reply populates the cache, but only a reply for
    /// `current_query` is handed back; the last one wins when several have
    /// completed. Errors surface for the current query and are warn-logged
    /// either way.
    pub fn drain(&mut self, current_query: &str) -> Option<Result<Vec<Suggestion>, LookupError>> {
        let mut latest = None;
        let replies: Vec<LookupReply> = self.rx.try_iter().collect();

        for reply in replies {
            self.in_flight.remove(&reply.query);
            match reply.result {
                Ok(mut suggestions) => {
                    rank_suggestions(&reply.query, &mut suggestions);
                    self.cache.insert(reply.query.clone(), suggestions.clone());
                    if reply.query == current_query {
                        latest = Some(Ok(suggestions));
                    }
                }
                Err(error) => {
                    warn!(query = %reply.query, %error, "suggestion lookup failed");
                    if reply.query == current_query {
                        latest = Some(Err(error));
                    }
                }
            }
        }

        latest
    }

    /// Check if a fetch for `query` is still running.
    pub fn is_in_flight(&self, query: &str) -> bool {
        self.in_flight.contains(query)
    }
}

/// Order suggestions by fuzzy-match score against the query, best first.
/// The sort is stable, so equally scored entries keep the endpoint's order.
fn rank_suggestions(query: &str, suggestions: &mut [Suggestion]) {
    let matcher = SkimMatcherV2::default();
    suggestions.sort_by_cached_key(|suggestion| {
        std::cmp::Reverse(matcher.fuzzy_match(&suggestion.name, query).unwrap_or(0))
    });
}
