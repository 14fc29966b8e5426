//! Distance metrics and the values they produce.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, TvhError};
use crate::timing::{Timing, TotalOrder};

/// Selects which temporal distance a traversal minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceType {
    /// Fewest hyperedge hops along a time-respecting walk.
    Shortest,
    /// Smallest gap between the first and the last hop of a walk.
    Fastest,
    /// Earliest arrival time.
    Foremost,
}

impl DistanceType {
    /// Every supported distance type, in declaration order.
    pub const ALL: [DistanceType; 3] = [
        DistanceType::Shortest,
        DistanceType::Fastest,
        DistanceType::Foremost,
    ];

    /// Returns the lowercase name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceType::Shortest => "shortest",
            DistanceType::Fastest => "fastest",
            DistanceType::Foremost => "foremost",
        }
    }
}

impl Display for DistanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceType {
    type Err = TvhError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "shortest" => Ok(DistanceType::Shortest),
            "fastest" => Ok(DistanceType::Fastest),
            "foremost" => Ok(DistanceType::Foremost),
            _ => Err(TvhError::Decode(
                ErrorInfo::new("invalid-distance-type", "unknown distance type")
                    .with_context("value", value)
                    .with_hint("expected one of: shortest, fastest, foremost"),
            )),
        }
    }
}

/// Final distance of a reached vertex, in the unit of its metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance<T: Timing> {
    /// Hop count of a shortest walk.
    Hops(u32),
    /// Duration of a fastest walk.
    Duration(T::Duration),
    /// Arrival instant of a foremost walk.
    Arrival(T),
}

impl<T: Timing> Distance<T> {
    /// Orders two distances. Values of different metrics order by variant.
    pub fn total_order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Hops(a), Distance::Hops(b)) => a.cmp(b),
            (Distance::Duration(a), Distance::Duration(b)) => a.total_order(b),
            (Distance::Arrival(a), Distance::Arrival(b)) => a.total_order(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Returns the hop count for [`Distance::Hops`].
    pub fn as_hops(&self) -> Option<u32> {
        match self {
            Distance::Hops(hops) => Some(*hops),
            _ => None,
        }
    }

    /// Returns the duration for [`Distance::Duration`].
    pub fn as_duration(&self) -> Option<T::Duration> {
        match self {
            Distance::Duration(duration) => Some(*duration),
            _ => None,
        }
    }

    /// Returns the arrival instant for [`Distance::Arrival`].
    pub fn as_arrival(&self) -> Option<T> {
        match self {
            Distance::Arrival(instant) => Some(*instant),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Distance::Hops(_) => 0,
            Distance::Duration(_) => 1,
            Distance::Arrival(_) => 2,
        }
    }
}
