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

use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::geometry::{Intersection, Line, LineSegment, Vector2};
use crate::numeric::Scalar;
use crate::paper::OrigamiPaper;
use crate::{FoldError, Result};

impl<T: Scalar> OrigamiPaper<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    /// Fold through two distinct points.
    pub fn axiom_1(&self, p1: &Vector2<T>, p2: &Vector2<T>) -> Result<Line<T>> {
        Line::<T>::from_points(p1, p2)
    }

    /// Fold placing `p1` onto `p2`: the perpendicular bisector of the
    /// segment between them.
    pub fn axiom_2(&self, p1: &Vector2<T>, p2: &Vector2<T>) -> Result<Line<T>> {
        if p1 == p2 {
            return Err(FoldError::DistinctPointsRequired);
        }
        let midpoint = (p1 + p2).scale(&T::from_num_den(1, 2));
        Ok(Line {
            p: midpoint,
            d: (p2 - p1).perp(),
        })
    }

    /// Folds placing `seg1` onto `seg2`, zero, one or two of them.
    ///
    /// A fold qualifies only if reflecting `seg1` across it lands the
    /// image collinear-overlapping with `seg2`. Crossing segments offer
    /// two angle bisectors through the crossing point; built on an exact
    /// scalar, a bisector direction with an irrational length fails the
    /// reflection check and is dropped, while the rounded scalar accepts
    /// it within the snapping grid.
    pub fn axiom_3(&self, seg1: &LineSegment<T>, seg2: &LineSegment<T>) -> Result<Vec<Line<T>>> {
        if seg1 == seg2 {
            return Err(FoldError::DistinctSegmentsRequired);
        }
        if seg1.intersects_line_segment(seg2) == Intersection::Infinite {
            return Ok(Vec::new());
        }

        let line1 = seg1.line_through();
        let line2 = seg2.line_through();
        let mut folds = Vec::new();

        if line1.parallel_to(&line2) {
            // midway between the two carriers, same direction
            let foot = line1.p.project_onto_line(&line2);
            let candidate = Line {
                p: (&line1.p + &foot).scale(&T::from_num_den(1, 2)),
                d: line1.d.clone(),
            };
            if Self::aligns(seg1, seg2, &candidate) {
                folds.push(candidate);
            }
            return Ok(folds);
        }

        let crossing = match line1.intersects_line(&line2) {
            Intersection::Single(point) => point,
            _ => return Ok(folds),
        };
        let u1 = line1.d.normalized()?;
        let u2 = line2.d.normalized()?;
        for direction in [&u1 + &u2, &u1 - &u2] {
            if direction.is_zero() {
                continue;
            }
            let candidate = Line {
                p: crossing.clone(),
                d: direction,
            };
            if Self::aligns(seg1, seg2, &candidate) {
                folds.push(candidate);
            }
        }
        Ok(folds)
    }

    /// Fold through `p` perpendicular to `seg`.
    pub fn axiom_4(&self, p: &Vector2<T>, seg: &LineSegment<T>) -> Line<T> {
        Line {
            p: p.clone(),
            d: (&seg.p2 - &seg.p1).perp(),
        }
    }

    fn aligns(seg1: &LineSegment<T>, seg2: &LineSegment<T>, fold: &Line<T>) -> bool {
        seg1.reflect_across(fold).intersects_line_segment(seg2) == Intersection::Infinite
    }
}
