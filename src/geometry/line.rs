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
use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::geometry::intersection::Intersection;
use crate::geometry::segment::LineSegment;
use crate::geometry::vector::Vector2;
use crate::numeric::Scalar;
use crate::{FoldError, Result};

/// Infinite line through `p` with direction `d`.
///
/// `d` is never the zero vector; the checked constructors enforce it, and
/// direct construction with a zero direction is a programming error.
/// Equality is geometric, not structural: two lines are equal iff they
/// describe the same point set, whatever anchor point and direction scale
/// they carry.
#[derive(Clone, Debug)]
pub struct Line<T: Scalar> {
    pub p: Vector2<T>,
    pub d: Vector2<T>,
}

impl<T: Scalar> Line<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    /// Line through `p` with direction `d`; `DegenerateLine` when `d` is
    /// zero.
    pub fn new(p: Vector2<T>, d: Vector2<T>) -> Result<Self> {
        if d.is_zero() {
            return Err(FoldError::DegenerateLine);
        }
        Ok(Line { p, d })
    }

    /// Line through two distinct points.
    pub fn from_points(a: &Vector2<T>, b: &Vector2<T>) -> Result<Self> {
        if a == b {
            return Err(FoldError::DistinctPointsRequired);
        }
        Ok(Line {
            p: a.clone(),
            d: b - a,
        })
    }

    /// The point `p + t*d`.
    pub fn point_at(&self, t: &T) -> Vector2<T> {
        &self.p + &self.d.scale(t)
    }

    pub fn parallel_to(&self, other: &Line<T>) -> bool {
        self.d.cross(&other.d).is_zero()
    }

    /// Geometric identity: parallel directions and a shared point.
    pub fn same_line(&self, other: &Line<T>) -> bool {
        self.parallel_to(other) && self.p.lies_on_line(other)
    }

    /// Mirror image across `mirror`: reflect `p` and `p + d` and rebuild
    /// the line through the two images.
    pub fn reflect_across(&self, mirror: &Line<T>) -> Line<T> {
        let p = self.p.reflect_across(mirror);
        let q = (&self.p + &self.d).reflect_across(mirror);
        Line { d: &q - &p, p }
    }

    /// Three-way line-line classification: the same line (`Infinite`),
    /// parallel and distinct (`None`), or one crossing (`Single`) found
    /// by a direct 2x2 solve.
    pub fn intersects_line(&self, other: &Line<T>) -> Intersection<T> {
        if self.same_line(other) {
            return Intersection::Infinite;
        }
        if self.parallel_to(other) {
            return Intersection::None;
        }
        // p + s*d = other.p + t*other.d, cross both sides with other.d
        let s = (&other.p - &self.p).cross(&other.d) / self.d.cross(&other.d);
        Intersection::Single(self.point_at(&s))
    }

    /// [`intersects_line`](Line::intersects_line) against the segment's
    /// line, with `Single` downgraded to `None` when the crossing lies
    /// outside the segment's bounds.
    pub fn intersects_line_segment(&self, seg: &LineSegment<T>) -> Intersection<T> {
        match self.intersects_line(&seg.line_through()) {
            Intersection::Single(point) if !point.lies_on_line_segment(seg) => {
                Intersection::None
            }
            outcome => outcome,
        }
    }
}

impl<T: Scalar> PartialEq for Line<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    fn eq(&self, other: &Line<T>) -> bool {
        self.same_line(other)
    }
}

impl<T: Scalar> Eq for Line<T> where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>
{
}

impl<T: Scalar> fmt::Display for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} + t*{})", self.p, self.d)
    }
}
