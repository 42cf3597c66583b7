use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Add, Sub};

/// A JSON number from a COCO file.
///
/// Integers stay integers through `+` and `-`; any float operand makes the
/// result a float. Equality (`==`) is structural, so `Int(5) != Float(5.0)`;
/// use [`Coord::numeric_eq`] to compare values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coord {
    Int(i64),
    Float(f64),
}

impl Coord {
    pub const ONE: Coord = Coord::Int(1);

    pub fn as_f64(self) -> f64 {
        match self {
            Coord::Int(v) => v as f64,
            Coord::Float(v) => v,
        }
    }

    /// Numeric ordering; `None` only when a NaN is involved.
    pub fn numeric_cmp(self, other: Coord) -> Option<Ordering> {
        match (self, other) {
            (Coord::Int(a), Coord::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }

    pub fn numeric_eq(self, other: Coord) -> bool {
        self.numeric_cmp(other) == Some(Ordering::Equal)
    }

    pub fn is_at_least(self, other: Coord) -> bool {
        matches!(
            self.numeric_cmp(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        match (self, rhs) {
            (Coord::Int(a), Coord::Int(b)) => a
                .checked_add(b)
                .map(Coord::Int)
                .unwrap_or(Coord::Float(a as f64 + b as f64)),
            (a, b) => Coord::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        match (self, rhs) {
            (Coord::Int(a), Coord::Int(b)) => a
                .checked_sub(b)
                .map(Coord::Int)
                .unwrap_or(Coord::Float(a as f64 - b as f64)),
            (a, b) => Coord::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl From<i64> for Coord {
    fn from(v: i64) -> Self {
        Coord::Int(v)
    }
}

impl From<u32> for Coord {
    fn from(v: u32) -> Self {
        Coord::Int(i64::from(v))
    }
}

impl From<f64> for Coord {
    fn from(v: f64) -> Self {
        Coord::Float(v)
    }
}
