use std::f64::consts::TAU;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The two ways a point in the complex plane can be written down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// `a + bi`. Exactly one representation per point.
    Rectangular,
    /// An angle in radians followed by a modulus.
    Polar,
}

/// A complex number stored as its rectangular coefficients.
///
/// Modulus and argument are always derived from `(real, imaginary)` and never
/// cached. Every operation returns a new value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { real: 0.0, imaginary: 0.0 };
    pub const ONE: Complex = Complex { real: 1.0, imaginary: 0.0 };
    pub const I: Complex = Complex { real: 0.0, imaginary: 1.0 };

    /// Creates `real + imaginary·i`.
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Complex { real, imaginary }
    }

    /// Creates a complex number from two values interpreted according to `mode`.
    ///
    /// In [`Mode::Rectangular`] `a` is the real part and `b` the imaginary part.
    /// In [`Mode::Polar`] `a` is the angle in radians and `b` the modulus.
    pub fn with_mode(a: f64, b: f64, mode: Mode) -> Self {
        match mode {
            Mode::Rectangular => Complex::new(a, b),
            Mode::Polar => Complex::new(a.cos() * b, a.sin() * b),
        }
    }

    /// Creates a complex number from an angle in radians and a modulus.
    pub fn from_polar(angle: f64, modulus: f64) -> Self {
        Complex::with_mode(angle, modulus, Mode::Polar)
    }

    /// `e^(i·angle)`, the point on the unit circle at `angle`.
    pub fn unit(angle: f64) -> Self {
        Complex::new(angle.cos(), angle.sin())
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// The real part as a complex number on the real axis.
    pub fn real_part(&self) -> Complex {
        Complex::new(self.real, 0.0)
    }

    /// The imaginary part as a complex number on the imaginary axis.
    pub fn imaginary_part(&self) -> Complex {
        Complex::new(0.0, self.imaginary)
    }

    /// Distance from the origin.
    pub fn modulus(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Squared distance from the origin, without the square root.
    pub fn norm_sqr(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// Angle from the positive real axis, in `[0, 2π)`.
    ///
    /// The origin has argument 0.
    pub fn argument(&self) -> f64 {
        let theta = self.imaginary.atan2(self.real);
        if theta < 0.0 {
            // Tiny negative angles round up to exactly 2π.
            let wrapped = theta + TAU;
            if wrapped >= TAU { 0.0 } else { wrapped }
        } else {
            // atan2 yields -0.0 for (x > 0, -0.0).
            theta.abs()
        }
    }

    /// The reflection over the real axis: `a - bi`.
    pub fn conjugate(&self) -> Complex {
        Complex::new(self.real, -self.imaginary)
    }

    pub fn add(self, other: Complex) -> Complex {
        Complex::new(self.real + other.real, self.imaginary + other.imaginary)
    }

    /// Horizontal translation: only the real part moves.
    pub fn add_scalar(self, value: f64) -> Complex {
        Complex::new(self.real + value, self.imaginary)
    }

    pub fn subtract(self, other: Complex) -> Complex {
        Complex::new(self.real - other.real, self.imaginary - other.imaginary)
    }

    /// Horizontal translation: only the real part moves.
    pub fn subtract_scalar(self, value: f64) -> Complex {
        Complex::new(self.real - value, self.imaginary)
    }

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
    pub fn multiply(self, other: Complex) -> Complex {
        Complex::new(
            self.real * other.real - self.imaginary * other.imaginary,
            self.real * other.imaginary + self.imaginary * other.real,
        )
    }

    pub fn multiply_scalar(self, value: f64) -> Complex {
        Complex::new(self.real * value, self.imaginary * value)
    }

    /// Divides by another complex number.
    ///
    /// Fails with [`Error::DivisionByZero`] only when `other` is exactly the
    /// origin. The quotient is scaled by the larger of `|c|` and `|d|` (Smith's
    /// method) so tiny or huge divisors neither underflow nor overflow.
    pub fn divide(self, other: Complex) -> Result<Complex> {
        let (a, b) = (self.real, self.imaginary);
        let (c, d) = (other.real, other.imaginary);
        if c == 0.0 && d == 0.0 {
            return Err(Error::DivisionByZero);
        }
        if c.abs() >= d.abs() {
            let ratio = d / c;
            let denominator = c + d * ratio;
            Ok(Complex::new((a + b * ratio) / denominator, (b - a * ratio) / denominator))
        } else {
            let ratio = c / d;
            let denominator = c * ratio + d;
            Ok(Complex::new((a * ratio + b) / denominator, (b * ratio - a) / denominator))
        }
    }

    /// Divides both parts by a real number. IEEE semantics apply for zero.
    pub fn divide_scalar(self, value: f64) -> Complex {
        Complex::new(self.real / value, self.imaginary / value)
    }

    /// Euler's formula: `e^(a + bi) = e^a · (cos b + i sin b)`.
    pub fn exp(c: Complex) -> Complex {
        Complex::unit(c.imaginary).multiply_scalar(c.real.exp())
    }

    /// True when both parts differ by less than `epsilon`.
    pub fn approx_eq(&self, other: &Complex, epsilon: f64) -> bool {
        (self.real - other.real).abs() < epsilon && (self.imaginary - other.imaginary).abs() < epsilon
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} + {:.*}i", p, self.real, p, self.imaginary),
            None => write!(f, "{:.6} + {:.6}i", self.real, self.imaginary),
        }
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Complex::new(real, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Complex::new(real, imaginary)
    }
}

impl From<num_complex::Complex<f64>> for Complex {
    fn from(c: num_complex::Complex<f64>) -> Self {
        Complex::new(c.re, c.im)
    }
}

impl From<Complex> for num_complex::Complex<f64> {
    fn from(c: Complex) -> Self {
        num_complex::Complex::new(c.real, c.imaginary)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::add(self, rhs)
    }
}

impl Add<f64> for Complex {
    type Output = Complex;
    fn add(self, rhs: f64) -> Complex {
        self.add_scalar(rhs)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        self.subtract(rhs)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;
    fn sub(self, rhs: f64) -> Complex {
        self.subtract_scalar(rhs)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        self.multiply(rhs)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    fn mul(self, rhs: f64) -> Complex {
        self.multiply_scalar(rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;
    fn div(self, rhs: f64) -> Complex {
        self.divide_scalar(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex::new(-self.real, -self.imaginary)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, Complex::add)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.copied().sum()
    }
}
