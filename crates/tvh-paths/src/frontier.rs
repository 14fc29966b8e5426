//! Priority queue and label tables shared by both traversals.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tvh_core::{Distance, Timing};

use crate::semantics::{Label, Semantics};

/// Min-queue of payloads keyed by distance. Equal keys pop in push order.
pub(crate) struct Frontier<T: Timing, P> {
    heap: BinaryHeap<Entry<T, P>>,
    pushed: u64,
}

impl<T: Timing, P> Frontier<T, P> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub(crate) fn push(&mut self, key: Distance<T>, payload: P) {
        self.heap.push(Entry {
            key,
            seq: self.pushed,
            payload,
        });
        self.pushed += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(Distance<T>, P)> {
        self.heap.pop().map(|entry| (entry.key, entry.payload))
    }

    /// Number of entries pushed so far.
    pub(crate) fn pushed(&self) -> u64 {
        self.pushed
    }
}

struct Entry<T: Timing, P> {
    key: Distance<T>,
    seq: u64,
    payload: P,
}

impl<T: Timing, P> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Timing, P> Eq for Entry<T, P> {}

impl<T: Timing, P> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Timing, P> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest key first.
        other
            .key
            .total_order(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Mutually non-dominated labels recorded for one vertex.
#[derive(Debug, Clone)]
pub(crate) struct ParetoSet<T> {
    labels: Vec<Label<T>>,
}

impl<T> Default for ParetoSet<T> {
    fn default() -> Self {
        Self { labels: Vec::new() }
    }
}

impl<T: Timing> ParetoSet<T> {
    /// Records `label` unless a recorded label dominates it, evicting the
    /// labels it dominates. Returns whether it was recorded.
    pub(crate) fn insert(&mut self, label: Label<T>, semantics: &Semantics<T>) -> bool {
        if self
            .labels
            .iter()
            .any(|recorded| semantics.dominates(recorded, &label))
        {
            return false;
        }
        self.labels
            .retain(|recorded| !semantics.dominates(&label, recorded));
        self.labels.push(label);
        true
    }

    pub(crate) fn contains(&self, label: &Label<T>) -> bool {
        self.labels.contains(label)
    }
}

#[cfg(test)]
mod tests {
    use tvh_core::DistanceType;

    use super::*;

    #[test]
    fn pops_smallest_key_first_and_ties_in_push_order() {
        let mut frontier = Frontier::<i64, &str>::new();
        frontier.push(Distance::Hops(3), "c");
        frontier.push(Distance::Hops(1), "a");
        frontier.push(Distance::Hops(1), "b");
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop().map(|(_, p)| p)).collect();
        assert_eq!(order, ["a", "b", "c"]);
        assert_eq!(frontier.pushed(), 3);
    }

    #[test]
    fn pareto_set_evicts_dominated_labels() {
        let semantics = Semantics::new(DistanceType::Shortest, None);
        let mut set = ParetoSet::default();
        let slow = Label { hops: 3, start: 1i64, last: 5 };
        let quick = Label { hops: 1, start: 2i64, last: 2 };
        assert!(set.insert(slow, &semantics));
        assert!(!set.insert(slow, &semantics));
        assert!(set.insert(quick, &semantics));
        assert!(!set.contains(&slow));
        assert!(set.contains(&quick));
    }
}
