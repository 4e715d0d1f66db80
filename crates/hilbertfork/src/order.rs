//! Validated curve orders.
//!
//! Every public entry point takes an [`Order`], so the range check happens
//! once at the boundary and the refinement code can assume a sane value.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// Largest accepted order. The curve of this order has `4^15 = 2^30` points.
pub const MAX_ORDER: u32 = 14;

/// Recursion depth of a curve approximation, in `0..=MAX_ORDER`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Order(u32);

impl Order {
    /// The base cap.
    pub const ZERO: Self = Self(0);

    /// Validate `order` against [`MAX_ORDER`].
    pub fn new(order: u32) -> Result<Self> {
        if order > MAX_ORDER {
            return Err(Error::InvalidOrder(format!(
                "{order} exceeds the maximum supported order {MAX_ORDER}"
            )));
        }
        Ok(Self(order))
    }

    /// The raw order.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Number of points on the curve, `4^(order+1)`.
    pub fn point_count(self) -> usize {
        1usize << (2 * (self.0 + 1))
    }

    /// Number of caps on the curve, `4^order`.
    pub fn cap_count(self) -> usize {
        1usize << (2 * self.0)
    }

    /// Number of grid cells along each side of the unit square, `2^(order+1)`.
    ///
    /// Every point of the curve sits at the centre of one such cell.
    pub fn grid_side(self) -> u32 {
        1u32 << (self.0 + 1)
    }

    /// Distance between consecutive points, `1 / 2^(order+1)`.
    pub fn step(self) -> f64 {
        1.0 / f64::from(self.grid_side())
    }

    /// The following order, or `None` at [`MAX_ORDER`].
    pub fn next_order(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Order> for u32 {
    fn from(order: Order) -> Self {
        order.0
    }
}

impl TryFrom<u32> for Order {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Order {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::InvalidOrder(format!(
                "{value} is negative; orders start at 0"
            )));
        }
        let value = u32::try_from(value).map_err(|_| {
            Error::InvalidOrder(format!(
                "{value} exceeds the maximum supported order {MAX_ORDER}"
            ))
        })?;
        Self::new(value)
    }
}

impl TryFrom<i32> for Order {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<f64> for Order {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(Error::InvalidOrder(format!("{value} is not an integer")));
        }
        if value < 0.0 {
            return Err(Error::InvalidOrder(format!(
                "{value} is negative; orders start at 0"
            )));
        }
        if value > f64::from(MAX_ORDER) {
            return Err(Error::InvalidOrder(format!(
                "{value} exceeds the maximum supported order {MAX_ORDER}"
            )));
        }
        // Integral and within 0..=MAX_ORDER, so the cast is exact.
        Self::new(value as u32)
    }
}

impl TryFrom<&str> for Order {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(v) => Self::try_from(v),
            Err(_) => match trimmed.parse::<f64>() {
                // Numeric but not an integer literal, e.g. "1.5" or "-0.5".
                Ok(v) if v.is_finite() && v.fract() != 0.0 => {
                    Err(Error::InvalidOrder(format!("{trimmed} is not an integer")))
                }
                _ => Err(Error::InvalidOrder(format!(
                    "'{trimmed}' is not a non-negative integer"
                ))),
            },
        }
    }
}
