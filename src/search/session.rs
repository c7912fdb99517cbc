//! Loading / success / failure state of the last submitted search

use serde_json::Value;

use crate::error::SearchError;

/// Identifies one submission. Issued in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Where the last search stands. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchOutcome {
    #[default]
    Idle,
    /// A search is outstanding. `previous` is the last successful result,
    /// kept on screen until the new one arrives.
    Loading { previous: Option<Value> },
    Success(Value),
    /// The cause is kept for logs; the view shows the fixed message.
    Failed(SearchError),
}

#[derive(Debug, Default)]
pub struct SearchSession {
    outcome: SearchOutcome,
    issued: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Loading { .. })
    }

    /// The value to display, if any.
    pub fn result(&self) -> Option<&Value> {
        match &self.outcome {
            SearchOutcome::Success(value) => Some(value),
            SearchOutcome::Loading { previous } => previous.as_ref(),
            SearchOutcome::Idle | SearchOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SearchError> {
        match &self.outcome {
            SearchOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Ticket of the most recent submission.
    pub fn latest(&self) -> Option<Ticket> {
        (self.issued > 0).then_some(Ticket(self.issued))
    }

    /// Enter `Loading`, dropping any previous error.
    ///
    /// Allowed while another search is still outstanding.
    pub fn begin(&mut self) -> Ticket {
        let previous = match std::mem::take(&mut self.outcome) {
            SearchOutcome::Success(value) => Some(value),
            SearchOutcome::Loading { previous } => previous,
            SearchOutcome::Idle | SearchOutcome::Failed(_) => None,
        };
        self.outcome = SearchOutcome::Loading { previous };
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Apply a completed search. Completions land in arrival order, so the
    /// last one to finish wins even if a newer search was started.
    pub fn finish(&mut self, ticket: Ticket, result: Result<Value, SearchError>) {
        if self.latest() != Some(ticket) {
            tracing::debug!(
                ticket = ticket.id(),
                latest = self.issued,
                "search finished after a newer one was submitted"
            );
        }

        self.outcome = match result {
            Ok(value) => {
                tracing::info!(ticket = ticket.id(), "search succeeded");
                SearchOutcome::Success(value)
            }
            Err(err) => {
                tracing::warn!(ticket = ticket.id(), error = %err, "search failed");
                SearchOutcome::Failed(err)
            }
        };
    }
}
