//! Per-metric rules for starting, extending and comparing walks.

use std::cmp::Ordering;

use tvh_core::{Distance, DistanceType, Timing};

/// State of a time-respecting walk ending at some vertex or hyperedge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Label<T> {
    pub(crate) hops: u32,
    pub(crate) start: T,
    pub(crate) last: T,
}

/// Distance rules selected once per traversal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Semantics<T> {
    metric: DistanceType,
    floor: Option<T>,
}

impl<T: Timing> Semantics<T> {
    pub(crate) fn new(metric: DistanceType, floor: Option<T>) -> Self {
        Self { metric, floor }
    }

    /// Label of the one-hop walk leaving the source through a hyperedge with
    /// timing `timing`, if the floor admits it.
    pub(crate) fn first_hop(&self, timing: T) -> Option<Label<T>> {
        if self.floor.is_some_and(|floor| timing.precedes(&floor)) {
            return None;
        }
        Some(Label {
            hops: 1,
            start: timing,
            last: timing,
        })
    }

    /// Extends `label` with a hyperedge of timing `timing`. Timings must
    /// strictly increase along a walk.
    pub(crate) fn extend(&self, label: &Label<T>, timing: T) -> Option<Label<T>> {
        if !label.last.precedes(&timing) {
            return None;
        }
        Some(Label {
            hops: label.hops.saturating_add(1),
            start: label.start,
            last: timing,
        })
    }

    pub(crate) fn distance(&self, label: &Label<T>) -> Distance<T> {
        match self.metric {
            DistanceType::Shortest => Distance::Hops(label.hops),
            DistanceType::Fastest => Distance::Duration(label.last.elapsed_since(label.start)),
            DistanceType::Foremost => Distance::Arrival(label.last),
        }
    }

    /// Returns whether `candidate` has a strictly smaller distance than
    /// `incumbent`.
    pub(crate) fn is_better(&self, candidate: &Label<T>, incumbent: &Label<T>) -> bool {
        self.distance(candidate).total_order(&self.distance(incumbent)) == Ordering::Less
    }

    /// Returns whether every continuation of `other` is matched, at no larger
    /// distance, by a continuation of `label`. Equal labels dominate each
    /// other.
    pub(crate) fn dominates(&self, label: &Label<T>, other: &Label<T>) -> bool {
        let no_later = label.last.total_order(&other.last) != Ordering::Greater;
        match self.metric {
            DistanceType::Shortest => no_later && label.hops <= other.hops,
            DistanceType::Fastest => {
                no_later && label.start.total_order(&other.start) != Ordering::Less
            }
            DistanceType::Foremost => no_later,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_is_inclusive() {
        let semantics = Semantics::new(DistanceType::Foremost, Some(3i64));
        assert!(semantics.first_hop(2).is_none());
        assert_eq!(semantics.first_hop(3).map(|label| label.last), Some(3));
        assert!(Semantics::<i64>::new(DistanceType::Foremost, None).first_hop(-7).is_some());
    }

    #[test]
    fn extension_requires_strictly_later_timing() {
        let semantics = Semantics::new(DistanceType::Shortest, None);
        let label = semantics.first_hop(5i64).unwrap();
        assert!(semantics.extend(&label, 5).is_none());
        let next = semantics.extend(&label, 6).unwrap();
        assert_eq!((next.hops, next.start, next.last), (2, 5, 6));
    }

    #[test]
    fn fastest_prefers_later_departures() {
        let semantics = Semantics::new(DistanceType::Fastest, None);
        let early = Label { hops: 1, start: 1i64, last: 4 };
        let late = Label { hops: 3, start: 3i64, last: 4 };
        assert!(semantics.dominates(&late, &early));
        assert!(!semantics.dominates(&early, &late));
        assert!(semantics.is_better(&late, &early));
        assert_eq!(semantics.distance(&late), Distance::Duration(1));
    }

    #[test]
    fn shortest_keeps_incomparable_labels() {
        let semantics = Semantics::new(DistanceType::Shortest, None);
        let few_hops_late = Label { hops: 1, start: 9i64, last: 9 };
        let many_hops_early = Label { hops: 2, start: 1i64, last: 2 };
        assert!(!semantics.dominates(&few_hops_late, &many_hops_early));
        assert!(!semantics.dominates(&many_hops_early, &few_hops_late));
        assert!(semantics.dominates(&few_hops_late, &few_hops_late));
    }
}
