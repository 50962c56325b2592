//! State of one search input and its suggestion list.

use tracing::{debug, trace};

use crate::domain::Suggestion;
use crate::geocode::GeocodeError;

/// What a keystroke leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Too short to search; the list is closed and nothing is sent.
    Closed,
    /// A lookup may follow once the field has been quiet for the debounce
    /// period. Only the latest generation is honoured.
    Scheduled { generation: u64 },
}

/// A lookup the field wants sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Sequence number the response must be resolved with
    pub seq: u64,
    pub text: String,
}

/// What to do with the list after a provider response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListUpdate {
    /// Paint [`SearchField::suggestions`]
    Show,
    /// Close the list (no results or the lookup failed)
    Close,
    /// The response was overtaken by a newer one and is dropped
    Stale,
}

/// One search input.
///
/// Two counters order the asynchronous work:
/// - `generation` bumps on every keystroke; a quiet-period tick only turns
///   into a lookup if no keystroke happened since it was scheduled.
/// - `issued`/`applied` number lookups; a response is applied only if it
///   is newer than the last applied one, so a slow old response can never
///   repaint over a newer list.
#[derive(Debug, Default)]
pub struct SearchField {
    query: String,
    generation: u64,
    issued: u64,
    applied: u64,
    suggestions: Vec<Suggestion>,
}

impl SearchField {
    /// Record a keystroke. Any open list is closed.
    pub fn input(&mut self, text: &str, min_chars: usize) -> InputOutcome {
        self.query = text.trim().to_string();
        self.generation += 1;
        self.suggestions.clear();

        if self.query.chars().count() < min_chars {
            // Responses still in flight belong to text that is gone.
            self.applied = self.issued;
            trace!(query = %self.query, "query too short");
            return InputOutcome::Closed;
        }

        InputOutcome::Scheduled {
            generation: self.generation,
        }
    }

    /// The debounce period for `generation` has elapsed.
    ///
    /// Returns the lookup to send, or `None` if more typing happened since.
    pub fn quiet(&mut self, generation: u64) -> Option<Lookup> {
        if generation != self.generation {
            trace!(generation, current = self.generation, "debounce superseded");
            return None;
        }

        self.issued += 1;
        debug!(seq = self.issued, query = %self.query, "search lookup issued");
        Some(Lookup {
            seq: self.issued,
            text: self.query.clone(),
        })
    }

    /// Apply a provider response for lookup `seq`.
    pub fn resolve(
        &mut self,
        seq: u64,
        result: Result<Vec<Suggestion>, GeocodeError>,
        max: usize,
    ) -> ListUpdate {
        if seq <= self.applied {
            debug!(seq, applied = self.applied, "stale search response dropped");
            return ListUpdate::Stale;
        }
        self.applied = seq;

        match result {
            Ok(mut suggestions) if !suggestions.is_empty() => {
                suggestions.truncate(max);
                self.suggestions = suggestions;
                ListUpdate::Show
            }
            Ok(_) => {
                self.suggestions.clear();
                ListUpdate::Close
            }
            Err(e) => {
                debug!(error = %e, "search failed, closing list");
                self.suggestions.clear();
                ListUpdate::Close
            }
        }
    }

    /// Candidates in the open list, empty when closed.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Take the candidate at `index` and close the list.
    ///
    /// Pending debounce ticks and in-flight lookups are invalidated so the
    /// list stays closed after a pick.
    pub fn pick(&mut self, index: usize) -> Option<Suggestion> {
        if index >= self.suggestions.len() {
            return None;
        }
        let chosen = self.suggestions.swap_remove(index);
        self.suggestions.clear();
        self.generation += 1;
        self.applied = self.issued;
        Some(chosen)
    }

    /// Close the list. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.suggestions.clear();
        was_open
    }
}
