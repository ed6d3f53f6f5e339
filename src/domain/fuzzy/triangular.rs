//! Triangular fuzzy number value object and its component-wise arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// A triangular fuzzy number `(l, m, u)`.
///
/// `l` is the pessimistic bound, `m` the most likely value and `u` the
/// optimistic bound. Numbers looked up from a linguistic scale satisfy
/// `l <= m <= u`; derived numbers (ratios against a reference) need not,
/// so construction does not check the ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangularFuzzyNumber {
    pub l: f64,
    pub m: f64,
    pub u: f64,
}

impl TriangularFuzzyNumber {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a number without checking the ordering of its components.
    pub const fn new(l: f64, m: f64, u: f64) -> Self {
        Self { l, m, u }
    }

    /// Applies `f` to every component.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.l), f(self.m), f(self.u))
    }

    /// Combines two numbers component by component.
    pub fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.l, other.l), f(self.m, other.m), f(self.u, other.u))
    }

    /// Component-wise maximum.
    pub fn component_max(self, other: Self) -> Self {
        self.zip_with(other, f64::max)
    }

    /// Component-wise minimum.
    pub fn component_min(self, other: Self) -> Self {
        self.zip_with(other, f64::min)
    }

    /// Centroid defuzzification: `(l + m + u) / 3`.
    pub fn centroid(&self) -> f64 {
        (self.l + self.m + self.u) / 3.0
    }

    /// True when every component of `self` is `>=` the matching component of `other`.
    pub fn dominates(&self, other: &Self) -> bool {
        self.l >= other.l && self.m >= other.m && self.u >= other.u
    }

    /// True when `l <= m <= u`.
    pub fn is_ordered(&self) -> bool {
        self.l <= self.m && self.m <= self.u
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.m.is_finite() && self.u.is_finite()
    }

    /// True when every component is within `tolerance` of `other`'s.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.l - other.l).abs() <= tolerance
            && (self.m - other.m).abs() <= tolerance
            && (self.u - other.u).abs() <= tolerance
    }
}

impl Add for TriangularFuzzyNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl AddAssign for TriangularFuzzyNumber {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Component-wise (not interval) product.
impl Mul for TriangularFuzzyNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl Sum for TriangularFuzzyNumber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a TriangularFuzzyNumber> for TriangularFuzzyNumber {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$}, {:.p$})", self.l, self.m, self.u, p = p),
            None => write!(f, "({}, {}, {})", self.l, self.m, self.u),
        }
    }
}
