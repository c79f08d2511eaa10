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

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Zero;

use crate::geometry::line::Line;
use crate::geometry::segment::LineSegment;
use crate::numeric::Scalar;
use crate::{FoldError, Result};

/// 2D point or free displacement.
///
/// One type serves both roles, as the fold constructions constantly turn
/// point differences into directions and back. Ordering is lexicographic
/// (`x`, then `y`); segment hashing uses it to canonicalize endpoints.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector2<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<T>,
        Y: Into<T>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl<T: Scalar> Vector2<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    pub fn dot(&self, other: &Vector2<T>) -> T {
        &(&self.x * &other.x) + &(&self.y * &other.y)
    }

    /// Scalar magnitude of the 3D cross product; zero iff the vectors
    /// are parallel, and its sign gives the orientation.
    pub fn cross(&self, other: &Vector2<T>) -> T {
        &(&self.x * &other.y) - &(&self.y * &other.x)
    }

    /// Euclidean length. See [`Sqrt`](crate::numeric::Sqrt) for the
    /// exactness contract.
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    pub fn scale(&self, s: &T) -> Vector2<T> {
        Vector2 {
            x: &self.x * s,
            y: &self.y * s,
        }
    }

    /// Divides both components, rejecting a zero divisor.
    pub fn divide(&self, s: &T) -> Result<Vector2<T>> {
        if s.is_zero() {
            return Err(FoldError::DivisionByZero);
        }
        Ok(Vector2 {
            x: &self.x / s,
            y: &self.y / s,
        })
    }

    /// Unit vector in this direction; `DivisionByZero` for the zero
    /// vector.
    pub fn normalized(&self) -> Result<Vector2<T>> {
        self.divide(&self.norm())
    }

    /// Counter-clockwise quarter turn, `(x, y) -> (-y, x)`.
    ///
    /// Exact in every discipline; the axiom constructions use this
    /// instead of [`rotate`](Vector2::rotate) so rational papers stay
    /// rational.
    pub fn perp(&self) -> Vector2<T> {
        Vector2 {
            x: -self.y.clone(),
            y: self.x.clone(),
        }
    }

    /// Counter-clockwise rotation by an angle in radians, via the 2x2
    /// rotation matrix with `Scalar::sin_cos` entries.
    pub fn rotate(&self, radians: f64) -> Vector2<T> {
        let (sin, cos) = T::sin_cos(radians);
        Vector2 {
            x: &(&self.x * &cos) - &(&self.y * &sin),
            y: &(&self.x * &sin) + &(&self.y * &cos),
        }
    }

    /// Projection of `self` onto `other`; `DivisionByZero` when `other`
    /// is the zero vector.
    pub fn project_onto_vector(&self, other: &Vector2<T>) -> Result<Vector2<T>> {
        let denom = other.dot(other);
        if denom.is_zero() {
            return Err(FoldError::DivisionByZero);
        }
        Ok(other.scale(&(self.dot(other) / denom)))
    }

    /// Foot of the perpendicular from `self` onto `line`. Infallible: a
    /// line's direction is never zero.
    pub fn project_onto_line(&self, line: &Line<T>) -> Vector2<T> {
        let rel = self - &line.p;
        let t = rel.dot(&line.d) / line.d.dot(&line.d);
        &line.p + &line.d.scale(&t)
    }

    /// Mirror image of `self` across `line`.
    pub fn reflect_across(&self, line: &Line<T>) -> Vector2<T> {
        &self.project_onto_line(line).scale(&T::from(2)) - self
    }

    /// Point-on-line test: `self` equals its own projection.
    pub fn lies_on_line(&self, line: &Line<T>) -> bool {
        *self == self.project_onto_line(line)
    }

    /// Point-on-segment test: on the segment's infinite line, with the
    /// parametric position `(self - p1)·d / d·d` inside `[0, 1]`.
    pub fn lies_on_line_segment(&self, seg: &LineSegment<T>) -> bool {
        let d = &seg.p2 - &seg.p1;
        let t = (self - &seg.p1).dot(&d) / d.dot(&d);
        t >= T::zero() && t <= T::one() && self.lies_on_line(&seg.line_through())
    }

    /// Distance from `self` to `line`: the norm of the rejection vector.
    pub fn distance_to_line(&self, line: &Line<T>) -> T {
        (self - &self.project_onto_line(line)).norm()
    }
}

impl<'a, 'b, T: Scalar> Add<&'b Vector2<T>> for &'a Vector2<T>
where
    for<'c> &'c T: Add<&'c T, Output = T>,
{
    type Output = Vector2<T>;

    fn add(self, rhs: &'b Vector2<T>) -> Vector2<T> {
        Vector2 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
        }
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Vector2<T>> for &'a Vector2<T>
where
    for<'c> &'c T: Sub<&'c T, Output = T>,
{
    type Output = Vector2<T>;

    fn sub(self, rhs: &'b Vector2<T>) -> Vector2<T> {
        Vector2 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
        }
    }
}

impl<T: Scalar> Add for Vector2<T>
where
    for<'c> &'c T: Add<&'c T, Output = T>,
{
    type Output = Vector2<T>;

    fn add(self, rhs: Vector2<T>) -> Vector2<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub for Vector2<T>
where
    for<'c> &'c T: Sub<&'c T, Output = T>,
{
    type Output = Vector2<T>;

    fn sub(self, rhs: Vector2<T>) -> Vector2<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Vector2<T>;

    fn neg(self) -> Vector2<T> {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Scalar> Zero for Vector2<T>
where
    for<'c> &'c T: Add<&'c T, Output = T>,
{
    fn zero() -> Self {
        Vector2 {
            x: T::zero(),
            y: T::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl<T: Scalar> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}
