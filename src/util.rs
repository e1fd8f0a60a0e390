//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use cgmath::num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Float> Interval<T> {
    /// The smallest interval containing every value, or `None` if there are none.
    ///
    /// NaN values are ignored.
    pub fn enclosing(values: impl IntoIterator<Item = T>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<Self>, v| match acc {
                None => Some(Self::new(v, v)),
                Some(i) => Some(Self::new(i.min.min(v), i.max.max(v))),
            })
    }

    /// The smallest interval containing both intervals.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: T::min(self.min, other.min),
            max: T::max(self.max, other.max),
        }
    }

    /// Widens the interval by `margin` on both ends.
    pub fn padded(&self, margin: T) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}
