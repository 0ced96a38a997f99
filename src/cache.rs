use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::data_models::{SearchOutcome, SearchRequest};
use crate::ticket::{Ticket, TicketSequence};

#[derive(Debug, Clone)]
pub struct CachedOutcome {
    pub ticket: Ticket,
    pub fetched_at: DateTime<Utc>,
    pub outcome: Arc<SearchOutcome>,
}

/// Outcomes of recent searches, keyed by (query, method).
///
/// Page changes and the detail view read from here instead of calling the
/// backend again. A stored entry is only ever replaced by a response whose
/// ticket is newer, so a slow earlier request cannot overwrite a later one.
pub struct OutcomeCache {
    entries: DashMap<SearchRequest, CachedOutcome>,
    sequence: TicketSequence,
    capacity: usize,
    ttl: chrono::Duration,
}

impl OutcomeCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            sequence: TicketSequence::new(),
            capacity: capacity.max(1),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
        }
    }

    /// Ticket for a request about to be sent to the backend.
    pub fn issue_ticket(&self) -> Ticket {
        self.sequence.issue()
    }

    /// Fresh outcome for this request, if one is cached.
    pub fn get(&self, request: &SearchRequest) -> Option<Arc<SearchOutcome>> {
        let entry = self.entries.get(request)?;
        if Utc::now() - entry.fetched_at > self.ttl {
            tracing::debug!(query = %request.query, method = %request.method, "cached outcome expired");
            return None;
        }
        Some(entry.outcome.clone())
    }

    /// Stores the outcome unless a newer ticket already wrote this key.
    /// Returns whether the outcome was applied.
    pub fn store(&self, request: SearchRequest, ticket: Ticket, outcome: Arc<SearchOutcome>) -> bool {
        let applied = {
            let mut entry = self.entries.entry(request).or_insert_with(|| CachedOutcome {
                ticket,
                fetched_at: Utc::now(),
                outcome: outcome.clone(),
            });
            if entry.ticket > ticket {
                false
            } else {
                *entry = CachedOutcome {
                    ticket,
                    fetched_at: Utc::now(),
                    outcome,
                };
                true
            }
        };

        if applied {
            self.evict_overflow();
        } else {
            tracing::debug!(ticket = ticket.value(), "discarding stale search outcome");
        }
        applied
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Drops the entries written longest ago until we are back under capacity.
    fn evict_overflow(&self) {
        while self.entries.len() > self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|entry| entry.value().ticket)
                .map(|entry| entry.key().clone());
            match oldest {
                Some(key) => {
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }
}
