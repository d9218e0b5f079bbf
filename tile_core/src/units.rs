//! # Unit Types
//!
//! Type-safe wrappers for the three length units the tile engine mixes:
//! rooms are entered in meters, tiles in centimeters, grout spacing in
//! millimeters. The counter converts everything to centimeters before any
//! arithmetic; these newtypes make that conversion explicit while keeping
//! JSON serialization as plain numbers.
//!
//! ## Example
//!
//! ```rust
//! use tile_core::units::{Centimeters, Meters, Millimeters};
//!
//! let room = Meters(5.0);
//! let room_cm: Centimeters = room.into();
//! assert_eq!(room_cm.0, 500.0);
//!
//! let grout: Centimeters = Millimeters(2.0).into();
//! assert_eq!(grout.0, 0.2);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in meters (room dimensions)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters (tile dimensions, internal working unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimeters (grout spacing)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in square meters (room area)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * 10.0)
    }
}

impl Meters {
    /// Area of a rectangle with this length and the given width
    pub fn area(self, width: Meters) -> SquareMeters {
        SquareMeters(self.0 * width.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SquareMeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_centimeters() {
        let cm: Centimeters = Meters(4.0).into();
        assert_eq!(cm.0, 400.0);
    }

    #[test]
    fn test_millimeters_to_centimeters() {
        let cm: Centimeters = Millimeters(2.0).into();
        assert_eq!(cm.0, 0.2);
    }

    #[test]
    fn test_room_area() {
        let area = Meters(5.0).area(Meters(4.0));
        assert_eq!(area.0, 20.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Centimeters(30.0);
        let b = Centimeters(0.2);
        assert_eq!((a + b).0, 30.2);
        assert_eq!((a - b).0, 29.8);
        assert_eq!((a * 2.0).0, 60.0);
        assert_eq!((a / 2.0).0, 15.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(5.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "5.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
