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

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, ToPrimitive, Zero};

/// Square root under the precision contract of the implementing type.
pub trait Sqrt {
    fn sqrt(&self) -> Self;
}

/// Coordinate type of the geometry kernel.
///
/// Every geometric predicate in the kernel reduces to equality or ordering
/// on this type, so an implementation must keep `Eq`, `Ord` and `Hash`
/// mutually consistent. `Exact` compares full-precision rationals;
/// `Rounded` snaps to a fixed decimal grid before every comparison. One
/// instantiation of the kernel uses one discipline throughout.
///
/// Geometry impls additionally require the by-reference operators
/// (`for<'a> &'a T: Add<&'a T, Output = T>`, ...) so coordinates are not
/// cloned on every arithmetic step.
pub trait Scalar:
    Clone
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Sqrt
    + Zero
    + One
    + Eq
    + Ord
    + Hash
    + ToPrimitive
    + From<i32>
    + From<f64>
{
    /// Builds the scalar `num / den`; `den` must be non-zero.
    fn from_num_den(num: i32, den: i32) -> Self;

    /// Sine and cosine of an angle in radians.
    ///
    /// Evaluated in double precision and lifted into the scalar, which is
    /// the one deliberate precision escape hatch in the kernel. Rotation
    /// by an arbitrary angle is its only caller; the axiom constructions
    /// use the exact quarter turn `Vector2::perp` instead.
    fn sin_cos(radians: f64) -> (Self, Self) {
        let (sin, cos) = radians.sin_cos();
        (Self::from(sin), Self::from(cos))
    }
}
