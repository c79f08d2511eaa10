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
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, ToPrimitive, Zero};

use crate::numeric::scalar::{Scalar, Sqrt};

/// Decimal digits kept when two `Rounded` values are compared.
pub const ROUND_DIGITS: u32 = 9;

const SCALE: f64 = 1e9;

/// Tolerant `f64` coordinate, the opt-in discipline.
///
/// Arithmetic runs at full double precision; every comparison, ordering
/// and hash first snaps the value onto a grid of [`ROUND_DIGITS`] decimal
/// digits. Two values in the same grid cell are the same coordinate, so
/// equality stays a true equivalence relation and `Eq`, `Ord` and `Hash`
/// agree with each other, which is the contract the paper's point and
/// crease sets rely on. Use this discipline when folds produce irrational
/// coordinates, e.g. the angle bisectors of diagonal creases.
#[derive(Clone, Copy, Debug)]
pub struct Rounded(pub f64);

impl Rounded {
    /// The grid value this coordinate compares, orders and hashes as.
    pub fn snapped(&self) -> f64 {
        let snapped = (self.0 * SCALE).round() / SCALE;
        // collapse -0.0 so both zero signs share one grid cell
        if snapped == 0.0 { 0.0 } else { snapped }
    }
}

impl<'a, 'b> Add<&'b Rounded> for &'a Rounded {
    type Output = Rounded;

    fn add(self, rhs: &'b Rounded) -> Rounded {
        Rounded(self.0 + rhs.0)
    }
}

impl<'a, 'b> Sub<&'b Rounded> for &'a Rounded {
    type Output = Rounded;

    fn sub(self, rhs: &'b Rounded) -> Rounded {
        Rounded(self.0 - rhs.0)
    }
}

impl<'a, 'b> Mul<&'b Rounded> for &'a Rounded {
    type Output = Rounded;

    fn mul(self, rhs: &'b Rounded) -> Rounded {
        Rounded(self.0 * rhs.0)
    }
}

impl<'a, 'b> Div<&'b Rounded> for &'a Rounded {
    type Output = Rounded;

    fn div(self, rhs: &'b Rounded) -> Rounded {
        Rounded(self.0 / rhs.0)
    }
}

impl Add for Rounded {
    type Output = Rounded;

    fn add(self, rhs: Rounded) -> Rounded {
        Rounded(self.0 + rhs.0)
    }
}

impl Sub for Rounded {
    type Output = Rounded;

    fn sub(self, rhs: Rounded) -> Rounded {
        Rounded(self.0 - rhs.0)
    }
}

impl Mul for Rounded {
    type Output = Rounded;

    fn mul(self, rhs: Rounded) -> Rounded {
        Rounded(self.0 * rhs.0)
    }
}

impl Div for Rounded {
    type Output = Rounded;

    fn div(self, rhs: Rounded) -> Rounded {
        Rounded(self.0 / rhs.0)
    }
}

impl Neg for Rounded {
    type Output = Rounded;

    fn neg(self) -> Rounded {
        Rounded(-self.0)
    }
}

impl PartialEq for Rounded {
    fn eq(&self, other: &Rounded) -> bool {
        self.snapped().to_bits() == other.snapped().to_bits()
    }
}

impl Eq for Rounded {}

impl PartialOrd for Rounded {
    fn partial_cmp(&self, other: &Rounded) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rounded {
    fn cmp(&self, other: &Rounded) -> Ordering {
        self.snapped().total_cmp(&other.snapped())
    }
}

impl Hash for Rounded {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // same bits as the equality test, so equal values hash equal
        self.snapped().to_bits().hash(state);
    }
}

impl Zero for Rounded {
    fn zero() -> Self {
        Rounded(0.0)
    }

    fn is_zero(&self) -> bool {
        self.snapped() == 0.0
    }
}

impl One for Rounded {
    fn one() -> Self {
        Rounded(1.0)
    }
}

impl Sqrt for Rounded {
    fn sqrt(&self) -> Self {
        Rounded(self.0.sqrt())
    }
}

impl ToPrimitive for Rounded {
    fn to_i64(&self) -> Option<i64> {
        Some(self.snapped() as i64)
    }

    fn to_u64(&self) -> Option<u64> {
        Some(self.snapped() as u64)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl From<i32> for Rounded {
    fn from(value: i32) -> Self {
        Rounded(f64::from(value))
    }
}

impl From<f64> for Rounded {
    fn from(value: f64) -> Self {
        Rounded(value)
    }
}

impl Scalar for Rounded {
    fn from_num_den(num: i32, den: i32) -> Self {
        Rounded(f64::from(num) / f64::from(den))
    }
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapped())
    }
}
