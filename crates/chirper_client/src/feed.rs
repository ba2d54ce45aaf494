//! Pure feed reducers.
//!
//! The live streams deliver two shapes of state: discrete events that
//! accumulate newest-first (chirps), and board snapshots where every frame
//! supersedes the last (circuit breakers). Both are plain values folded with
//! `(state, event) -> state` functions so components can hand them straight
//! to [`use_event_stream`](crate::use_event_stream).

/// Newest-first accumulation of discrete stream events.
///
/// Entries are never reordered: each event becomes the new head and the tail
/// preserves arrival order. Unbounded by default; [`EventLog::bounded`] is
/// the explicit windowing policy for callers that want one.
#[derive(Clone, Debug, PartialEq)]
pub struct EventLog<T> {
    entries: Vec<T>,
    bound: Option<usize>,
}

impl<T> Default for EventLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventLog<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            bound: None,
        }
    }

    /// A log that keeps at most `bound` entries, dropping the oldest.
    pub fn bounded(bound: usize) -> Self {
        Self {
            entries: Vec::new(),
            bound: Some(bound),
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> EventLog<T> {
    /// Pure reducer: the new event becomes the head.
    pub fn push(&self, event: T) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(event);
        entries.extend_from_slice(&self.entries);
        if let Some(bound) = self.bound {
            entries.truncate(bound);
        }
        Self {
            entries,
            bound: self.bound,
        }
    }
}

/// Board state where each stream frame replaces the whole board.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<T> {
    entries: Vec<T>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Snapshot<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Pure reducer: no accumulation across frames.
    pub fn replace(&self, entries: Vec<T>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_newest_first_in_arrival_order() {
        let log = (1..=5).fold(EventLog::new(), |log, n| log.push(n));
        assert_eq!(log.len(), 5);
        assert_eq!(log.entries(), &[5, 4, 3, 2, 1]);
    }

    #[test]
    fn push_does_not_mutate_the_previous_state() {
        let first = EventLog::new().push("a");
        let second = first.push("b");
        assert_eq!(first.entries(), &["a"]);
        assert_eq!(second.entries(), &["b", "a"]);
    }

    #[test]
    fn bounded_log_drops_the_oldest() {
        let log = (1..=5).fold(EventLog::bounded(3), |log, n| log.push(n));
        assert_eq!(log.entries(), &[5, 4, 3]);
    }

    #[test]
    fn snapshot_replaces_wholesale() {
        let board = Snapshot::new().replace(vec!["a", "b"]);
        let board = board.replace(vec!["c"]);
        assert_eq!(board.entries(), &["c"]);
    }

    #[test]
    fn snapshot_accepts_an_empty_frame() {
        let board = Snapshot::new().replace(vec![1, 2, 3]).replace(Vec::new());
        assert!(board.is_empty());
    }
}
