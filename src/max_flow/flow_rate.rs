//!
//! FlowRateLike trait for generics of Flow amount
//!
//! usize and f64 implements FlowRateLike
//!

use std::iter::Sum;
use std::ops::{Add, Sub};

///
/// generic FlowRate
///
pub trait FlowRateLike:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Sum
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// similary equal
    fn sim_eq(self, rhs: Self) -> bool;
    /// difference allowed to be regarded as a same value
    fn eps() -> Self;
}

impl FlowRateLike for usize {
    fn zero() -> usize {
        0
    }
    fn sim_eq(self, rhs: Self) -> bool {
        // integer type does not need to consider the floating error
        self == rhs
    }
    fn eps() -> Self {
        0
    }
}

impl FlowRateLike for f64 {
    fn zero() -> Self {
        0.0
    }
    fn sim_eq(self, rhs: Self) -> bool {
        (self - rhs).abs() <= Self::eps()
    }
    fn eps() -> Self {
        0.000000001
    }
}
