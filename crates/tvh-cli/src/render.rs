//! JSON rendering of distances computed over calendar timings.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDateTime, TimeDelta};
use serde_json::Value;
use tvh_core::Distance;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Hops as an integer, durations as seconds, arrivals as ISO-8601.
pub fn distance_value(distance: &Distance<NaiveDateTime>) -> Value {
    match distance {
        Distance::Hops(hops) => Value::from(*hops),
        Distance::Duration(delta) => Value::from(seconds(delta)),
        Distance::Arrival(instant) => Value::from(timestamp(instant)),
    }
}

/// Renders a distance map with participants in lexicographic order.
pub fn distance_table(
    distances: &HashMap<String, Distance<NaiveDateTime>>,
) -> BTreeMap<String, Value> {
    distances
        .iter()
        .map(|(participant, distance)| (participant.clone(), distance_value(distance)))
        .collect()
}

/// Whole seconds plus the nanosecond remainder, which carries the sign of
/// the delta.
fn seconds(delta: &TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}

pub fn timestamp(instant: &NaiveDateTime) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}
