// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 The washi developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, ToPrimitive, Zero};
use rug::{Integer, Rational};

use crate::numeric::scalar::{Scalar, Sqrt};

/// Extra bits of resolution kept when a square root leaves the rationals.
const SQRT_PRECISION: u32 = 128;

/// Arbitrary-precision rational coordinate, the canonical discipline.
///
/// Every comparison is exact and decidable: two coordinates are equal iff
/// they are the same rational number, so the reflexivity and involution
/// laws of the kernel hold with no tolerance anywhere. The price is that
/// square roots of non-square rationals (and with them the angle
/// bisectors of most direction pairs) are not representable; see
/// [`Sqrt::sqrt`] on this type for the contract.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exact(pub Rational);

impl<'a, 'b> Add<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn add(self, rhs: &'b Exact) -> Exact {
        // in-place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        Exact(result)
    }
}

impl<'a, 'b> Sub<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn sub(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result -= &rhs.0;
        Exact(result)
    }
}

impl<'a, 'b> Mul<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn mul(self, rhs: &'b Exact) -> Exact {
        let mut result = self.0.clone();
        result *= &rhs.0;
        Exact(result)
    }
}

impl<'a, 'b> Div<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn div(self, rhs: &'b Exact) -> Exact {
        // rug panics on a zero divisor; callers guard with is_zero first
        let mut result = self.0.clone();
        result /= &rhs.0;
        Exact(result)
    }
}

impl Add for Exact {
    type Output = Exact;

    fn add(self, rhs: Exact) -> Exact {
        Exact(self.0 + rhs.0)
    }
}

impl Sub for Exact {
    type Output = Exact;

    fn sub(self, rhs: Exact) -> Exact {
        Exact(self.0 - rhs.0)
    }
}

impl Mul for Exact {
    type Output = Exact;

    fn mul(self, rhs: Exact) -> Exact {
        Exact(self.0 * rhs.0)
    }
}

impl Div for Exact {
    type Output = Exact;

    fn div(self, rhs: Exact) -> Exact {
        Exact(self.0 / rhs.0)
    }
}

impl Neg for Exact {
    type Output = Exact;

    fn neg(self) -> Exact {
        Exact(-self.0)
    }
}

impl Zero for Exact {
    fn zero() -> Self {
        Exact(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for Exact {
    fn one() -> Self {
        Exact(Rational::from(1))
    }
}

impl Sqrt for Exact {
    /// Exact when numerator and denominator are both perfect squares,
    /// otherwise a deterministic approximation carrying `SQRT_PRECISION`
    /// bits below the integer part. Panics on a negative radicand.
    fn sqrt(&self) -> Self {
        match self.0.cmp0() {
            Ordering::Less => panic!("square root of a negative rational"),
            Ordering::Equal => return Exact::zero(),
            Ordering::Greater => {}
        }
        let (num, den) = self.0.clone().into_numer_denom();
        if num.is_perfect_square() && den.is_perfect_square() {
            return Exact(Rational::from((num.sqrt(), den.sqrt())));
        }
        // sqrt(n/d) = sqrt(n*d)/d, scaled by 2^(2*SQRT_PRECISION) before
        // the integer square root truncates
        let scaled = Integer::from(&num * &den) << (2 * SQRT_PRECISION);
        Exact(Rational::from((scaled.sqrt(), den << SQRT_PRECISION)))
    }
}

impl ToPrimitive for Exact {
    fn to_i64(&self) -> Option<i64> {
        self.0.clone().trunc().into_numer_denom().0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.clone().trunc().into_numer_denom().0.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl From<i32> for Exact {
    fn from(value: i32) -> Self {
        Exact(Rational::from(value))
    }
}

impl From<f64> for Exact {
    /// Every finite double is a dyadic rational, so the conversion is
    /// exact. Panics on NaN or infinity.
    fn from(value: f64) -> Self {
        match Rational::from_f64(value) {
            Some(value) => Exact(value),
            None => panic!("cannot represent {value} as a rational"),
        }
    }
}

impl Scalar for Exact {
    fn from_num_den(num: i32, den: i32) -> Self {
        Exact(Rational::from((num, den)))
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
