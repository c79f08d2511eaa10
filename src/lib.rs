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

//! Exact planar geometry for square-paper origami.
//!
//! `washi` models a unit-square sheet of paper and the four classical
//! single-fold construction axioms: the line through two points, the fold
//! placing one point onto another, the fold placing one crease line onto
//! another, and the fold through a point perpendicular to a crease. Every
//! accepted fold is clipped to the paper boundary and recorded, together
//! with each new intersection point it creates against existing creases.
//!
//! The kernel is generic over its coordinate type. [`Exact`] (arbitrary
//! precision rationals) makes every equality test decidable and is the
//! canonical choice; [`Rounded`] trades exactness for a fixed 9-digit
//! comparison grid and accepts folds whose coordinates leave the rational
//! plane. One instantiation uses one discipline throughout.
//!
//! ```
//! use washi::{Exact, OrigamiPaper, Vector2};
//!
//! let mut paper = OrigamiPaper::<Exact>::new();
//!
//! // Place the bottom-left corner onto the bottom-right one: the fold
//! // line is the vertical mid-line of the sheet.
//! let fold = paper.axiom_2(&Vector2::new(0, 0), &Vector2::new(1, 0))?;
//! paper.add_all_intersections(&fold);
//!
//! assert_eq!(paper.creases().len(), 5);
//! assert_eq!(paper.points().len(), 6);
//! # Ok::<(), washi::FoldError>(())
//! ```

pub mod geometry;
pub mod numeric;
pub mod paper;

pub use geometry::{Intersection, Line, LineSegment, Vector2};
pub use numeric::{Exact, Rounded, Scalar, Sqrt};
pub use paper::OrigamiPaper;

use thiserror::Error;

/// Shorthand for results carrying a [`FoldError`].
pub type Result<T> = std::result::Result<T, FoldError>;

/// Precondition violations raised by kernel operations.
///
/// A geometrically valid "no such fold exists" answer is never an error;
/// it is modeled as an empty result. These kinds mark misuse of an
/// operation's preconditions and are fatal to the single call that raised
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FoldError {
    /// A vector was divided (or normalized, or projected) by zero.
    #[error("cannot divide a vector by zero")]
    DivisionByZero,
    /// Axiom 1/2 or a segment constructor was given twice the same point.
    #[error("the two points must be distinct")]
    DistinctPointsRequired,
    /// Axiom 3 was given twice the same segment.
    #[error("the two line segments must be distinct")]
    DistinctSegmentsRequired,
    /// A line was built with a zero direction vector.
    #[error("a line requires a non-zero direction")]
    DegenerateLine,
}
