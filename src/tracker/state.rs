use std::time::Instant;

use crate::tracker::ExecutedKey;

/// Append-only, insertion-ordered log of executed keys.
///
/// Insertion order is meaningful: identifier lookups take the first match.
/// Keys are never removed within a request's lifetime.
#[derive(Debug, Clone, Default)]
pub struct ExecutedLog {
    keys: Vec<ExecutedKey>,
}

impl ExecutedLog {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[ExecutedKey] {
        &self.keys
    }

    pub fn contains(&self, key: &ExecutedKey) -> bool {
        self.keys.contains(key)
    }

    pub fn contains_identity(&self, identity: &str) -> bool {
        self.keys.iter().any(|key| key.matches_identity(identity))
    }

    /// First key recorded for `identity`, in insertion order.
    pub fn first_match(&self, identity: &str) -> Option<&ExecutedKey> {
        self.keys.iter().find(|key| key.matches_identity(identity))
    }

    pub(crate) fn push(&mut self, key: ExecutedKey) {
        self.keys.push(key);
    }
}

/// Per-request tracking state.
///
/// Build one at request start, hand it `&mut` into both hooks, drop it when
/// the request ends. Nothing survives across requests.
///
/// `interval_start` is `Some` only between a successful start event and its
/// matching end event; the end hook always resets it, so at most one timing
/// interval is open at a time.
#[derive(Debug, Clone, Default)]
pub struct TrackerState {
    executed: ExecutedLog,
    interval_start: Option<Instant>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no timing interval is open.
    pub fn is_idle(&self) -> bool {
        self.interval_start.is_none()
    }

    pub fn executed(&self) -> &ExecutedLog {
        &self.executed
    }

    pub(crate) fn executed_mut(&mut self) -> &mut ExecutedLog {
        &mut self.executed
    }

    /// Opens (or re-opens) the interval; a later start wins over an earlier
    /// one that was never closed.
    pub(crate) fn open_interval(&mut self, at: Instant) {
        self.interval_start = Some(at);
    }

    /// Closes the interval, returning its start if one was open.
    pub(crate) fn take_interval(&mut self) -> Option<Instant> {
        self.interval_start.take()
    }
}
