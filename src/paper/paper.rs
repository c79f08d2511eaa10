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

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::geometry::{Intersection, Line, LineSegment, Vector2};
use crate::numeric::{Exact, Scalar};

/// The square sheet: a fixed boundary plus every point and crease
/// accumulated by accepted folds.
///
/// Created once per session and mutated only by
/// [`add_all_intersections`](OrigamiPaper::add_all_intersections). The
/// point set always contains both endpoints of every crease; the crease
/// set never holds two copies of the same segment under the
/// order-insensitive equality; every crease lies within the boundary.
#[derive(Clone, Debug)]
pub struct OrigamiPaper<T: Scalar = Exact> {
    boundary: [LineSegment<T>; 4],
    points: FxHashSet<Vector2<T>>,
    creases: FxHashSet<LineSegment<T>>,
}

impl<T: Scalar> OrigamiPaper<T> {
    /// A fresh unit square: corners `(0,0) (1,0) (1,1) (0,1)`, with the
    /// four edges seeded as both boundary and creases.
    pub fn new() -> Self {
        let corners = [
            Vector2::new(T::zero(), T::zero()),
            Vector2::new(T::one(), T::zero()),
            Vector2::new(T::one(), T::one()),
            Vector2::new(T::zero(), T::one()),
        ];
        let boundary = [
            LineSegment {
                p1: corners[0].clone(),
                p2: corners[1].clone(),
            },
            LineSegment {
                p1: corners[1].clone(),
                p2: corners[2].clone(),
            },
            LineSegment {
                p1: corners[2].clone(),
                p2: corners[3].clone(),
            },
            LineSegment {
                p1: corners[3].clone(),
                p2: corners[0].clone(),
            },
        ];
        let creases = boundary.iter().cloned().collect();
        OrigamiPaper {
            boundary,
            points: corners.into_iter().collect(),
            creases,
        }
    }

    /// The four fixed boundary edges.
    pub fn boundary(&self) -> &[LineSegment<T>; 4] {
        &self.boundary
    }

    /// Every recorded point: corners, crease endpoints, crease crossings.
    pub fn points(&self) -> &FxHashSet<Vector2<T>> {
        &self.points
    }

    /// Every recorded crease, boundary edges included.
    pub fn creases(&self) -> &FxHashSet<LineSegment<T>> {
        &self.creases
    }
}

impl<T: Scalar> OrigamiPaper<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    /// Classifies `line` against the four boundary edges.
    ///
    /// `Infinite` with an empty point list when the line runs along an
    /// edge. Otherwise the distinct crossing points, under a `Single`
    /// classification carrying the first of them, or `None` when the
    /// line misses the sheet entirely.
    pub fn intersects_boundary(&self, line: &Line<T>) -> (Intersection<T>, Vec<Vector2<T>>) {
        let mut crossings: Vec<Vector2<T>> = Vec::new();
        for edge in &self.boundary {
            match line.intersects_line_segment(edge) {
                Intersection::Infinite => return (Intersection::Infinite, Vec::new()),
                Intersection::Single(point) => {
                    if !crossings.contains(&point) {
                        crossings.push(point);
                    }
                }
                Intersection::None => {}
            }
        }
        match crossings.first() {
            Some(first) => (Intersection::Single(first.clone()), crossings),
            None => (Intersection::None, crossings),
        }
    }

    /// Clips `fold` to the sheet and records it as a crease.
    ///
    /// The paper is left unchanged, without error, when the fold misses
    /// the sheet, touches only a corner, runs along an edge, or
    /// duplicates an existing crease. An accepted crease commits in one
    /// step together with its endpoints and every new crossing point
    /// found against the existing creases.
    pub fn add_all_intersections(&mut self, fold: &Line<T>) {
        let (classification, crossings) = self.intersects_boundary(fold);
        if !matches!(classification, Intersection::Single(_)) || crossings.len() < 2 {
            debug!(%fold, "fold rejected: no in-bounds crease");
            return;
        }
        let crease = LineSegment {
            p1: crossings[0].clone(),
            p2: crossings[1].clone(),
        };
        if self.creases.contains(&crease) {
            debug!(%crease, "fold rejected: duplicate crease");
            return;
        }

        let mut discovered = Vec::new();
        for existing in &self.creases {
            if let Intersection::Single(point) = crease.intersects_line_segment(existing) {
                discovered.push(point);
            }
        }

        self.points.insert(crease.p1.clone());
        self.points.insert(crease.p2.clone());
        for point in discovered {
            self.points.insert(point);
        }
        debug!(
            %crease,
            points = self.points.len(),
            creases = self.creases.len() + 1,
            "crease added"
        );
        self.creases.insert(crease);
    }
}

impl<T: Scalar> Default for OrigamiPaper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> fmt::Display for OrigamiPaper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "paper with {} points and {} creases",
            self.points.len(),
            self.creases.len()
        )
    }
}
