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
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};

use crate::geometry::intersection::Intersection;
use crate::geometry::line::Line;
use crate::geometry::vector::Vector2;
use crate::numeric::Scalar;
use crate::{FoldError, Result};

/// Bounded line between two distinct endpoints.
///
/// The endpoint pair is unordered: `(a to b)` and `(b to a)` are the same
/// crease, so equality is symmetric under the swap and hashing
/// canonicalizes the endpoints first.
#[derive(Clone, Debug)]
pub struct LineSegment<T: Scalar> {
    pub p1: Vector2<T>,
    pub p2: Vector2<T>,
}

impl<T: Scalar> LineSegment<T> {
    /// Segment between two distinct endpoints.
    pub fn new(p1: Vector2<T>, p2: Vector2<T>) -> Result<Self> {
        if p1 == p2 {
            return Err(FoldError::DistinctPointsRequired);
        }
        Ok(LineSegment { p1, p2 })
    }
}

impl<T: Scalar> LineSegment<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    /// The infinite line through `p1` with direction `p2 - p1`.
    /// Infallible: the endpoints are distinct by construction.
    pub fn line_through(&self) -> Line<T> {
        Line {
            p: self.p1.clone(),
            d: &self.p2 - &self.p1,
        }
    }

    pub fn midpoint(&self) -> Vector2<T> {
        (&self.p1 + &self.p2).scale(&T::from_num_den(1, 2))
    }

    pub fn length(&self) -> T {
        (&self.p2 - &self.p1).norm()
    }

    /// Mirror image across `mirror`, endpoint by endpoint.
    pub fn reflect_across(&self, mirror: &Line<T>) -> LineSegment<T> {
        LineSegment {
            p1: self.p1.reflect_across(mirror),
            p2: self.p2.reflect_across(mirror),
        }
    }

    /// Three-way segment-segment classification.
    ///
    /// Crossing lines meet in at most one in-bounds point. Collinear
    /// segments take the endpoint case analysis: a shared endpoint is a
    /// `Single` touch unless either far endpoint falls inside the other
    /// segment, and with no shared endpoint any contained endpoint means
    /// the segments run together over a stretch (`Infinite`).
    pub fn intersects_line_segment(&self, other: &LineSegment<T>) -> Intersection<T> {
        let line = self.line_through();
        let other_line = other.line_through();

        if !line.parallel_to(&other_line) {
            return match line.intersects_line(&other_line) {
                Intersection::Single(point)
                    if point.lies_on_line_segment(self)
                        && point.lies_on_line_segment(other) =>
                {
                    Intersection::Single(point)
                }
                _ => Intersection::None,
            };
        }
        if !line.same_line(&other_line) {
            return Intersection::None;
        }

        // collinear: try the four endpoint pairings
        let pairings = [
            (&self.p1, &self.p2, &other.p1, &other.p2),
            (&self.p1, &self.p2, &other.p2, &other.p1),
            (&self.p2, &self.p1, &other.p1, &other.p2),
            (&self.p2, &self.p1, &other.p2, &other.p1),
        ];
        for (shared, far, candidate, candidate_far) in pairings {
            if shared == candidate {
                if far.lies_on_line_segment(other) || candidate_far.lies_on_line_segment(self)
                {
                    return Intersection::Infinite;
                }
                return Intersection::Single(shared.clone());
            }
        }

        // no shared endpoint: overlap iff any endpoint sits inside the other
        if self.p1.lies_on_line_segment(other)
            || self.p2.lies_on_line_segment(other)
            || other.p1.lies_on_line_segment(self)
            || other.p2.lies_on_line_segment(self)
        {
            Intersection::Infinite
        } else {
            Intersection::None
        }
    }
}

impl<T: Scalar> PartialEq for LineSegment<T> {
    fn eq(&self, other: &LineSegment<T>) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2)
            || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl<T: Scalar> Eq for LineSegment<T> {}

impl<T: Scalar> Hash for LineSegment<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // canonical endpoint order, so swapped endpoints hash identically
        let (lo, hi) = if self.p1 <= self.p2 {
            (&self.p1, &self.p2)
        } else {
            (&self.p2, &self.p1)
        };
        lo.hash(state);
        hi.hash(state);
    }
}

impl<T: Scalar> fmt::Display for LineSegment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} to {})", self.p1, self.p2)
    }
}
