//! Generation counters that discard superseded responses.
//!
//! Each logical resource ("clubs", "plans", ...) gets a counter. A caller
//! takes a [`Ticket`] before sending, and asks [`Freshness::complete`] when
//! the response arrives. If a newer request for the same resource already
//! completed, the older result is stale and must be dropped.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    key: String,
    generation: u64,
}

impl Ticket {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Counter {
    issued: u64,
    completed: u64,
}

#[derive(Debug, Default)]
pub struct Freshness {
    counters: Mutex<HashMap<String, Counter>>,
}

impl Freshness {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_counter<R>(&self, key: &str, f: impl FnOnce(&mut Counter) -> R) -> R {
        // Counters stay monotonic even if a holder panicked
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(counters.entry(key.to_string()).or_default())
    }

    /// Hand out the next generation for `key`
    pub fn begin(&self, key: &str) -> Ticket {
        let generation = self.with_counter(key, |c| {
            c.issued += 1;
            c.issued
        });
        Ticket {
            key: key.to_string(),
            generation,
        }
    }

    /// True if a newer request for the same key has already completed
    pub fn is_superseded(&self, ticket: &Ticket) -> bool {
        self.with_counter(&ticket.key, |c| c.completed > ticket.generation)
    }

    /// Record completion. Returns false when the result should be discarded.
    pub fn complete(&self, ticket: &Ticket) -> bool {
        let fresh = self.with_counter(&ticket.key, |c| {
            if c.completed > ticket.generation {
                false
            } else {
                c.completed = ticket.generation;
                true
            }
        });
        if !fresh {
            debug!(
                key = %ticket.key,
                generation = ticket.generation,
                "Discarding superseded response"
            );
        }
        fresh
    }
}
