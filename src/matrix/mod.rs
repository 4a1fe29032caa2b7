mod matrix;
pub use matrix::*;
mod vector;
pub use vector::*;

use std::ops::{Add, Mul, Sub};

/// Values a [`Matrix`] or [`Vector`] can hold: integers, floats and
/// [`Complex`](crate::complex::Complex) all qualify.
pub trait Element: Copy + Default + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> {}

impl<T> Element for T where T: Copy + Default + PartialEq + Add<Output = T> + Sub<Output = T> + Mul<Output = T> {}
