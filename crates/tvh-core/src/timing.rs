//! Timing scalars and the durations measured between them.

use std::cmp::Ordering;
use std::fmt::Debug;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

/// Copyable scalar with a total order, usable as a priority key.
///
/// Floating point implementations use IEEE 754 `totalOrder`, so `NaN` sorts
/// after every finite value instead of poisoning comparisons.
pub trait TotalOrder: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Compares two values.
    fn total_order(&self, other: &Self) -> Ordering;

    /// Returns whether `self` sorts strictly before `other`.
    fn precedes(&self, other: &Self) -> bool {
        self.total_order(other) == Ordering::Less
    }
}

/// The instant attached to a hyperedge.
///
/// Timings must be totally ordered and subtracting an earlier timing from a
/// later one yields a [`Timing::Duration`].
pub trait Timing: TotalOrder {
    /// Length of the interval between two timings.
    type Duration: TotalOrder;

    /// Returns `self - start`. Callers guarantee `start` does not follow `self`.
    fn elapsed_since(self, start: Self) -> Self::Duration;
}

macro_rules! integer_timing {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TotalOrder for $ty {
                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }

            impl Timing for $ty {
                type Duration = $ty;

                fn elapsed_since(self, start: Self) -> Self::Duration {
                    self - start
                }
            }
        )*
    };
}

integer_timing!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_timing {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TotalOrder for $ty {
                fn total_order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }

            impl Timing for $ty {
                type Duration = $ty;

                fn elapsed_since(self, start: Self) -> Self::Duration {
                    self - start
                }
            }
        )*
    };
}

float_timing!(f32, f64);

macro_rules! calendar_timing {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TotalOrder for $ty {
                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }

            impl Timing for $ty {
                type Duration = TimeDelta;

                fn elapsed_since(self, start: Self) -> Self::Duration {
                    self - start
                }
            }
        )*
    };
}

calendar_timing!(NaiveDateTime, NaiveDate, DateTime<Utc>, TimeDelta);
