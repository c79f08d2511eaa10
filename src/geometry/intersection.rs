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

use crate::geometry::vector::Vector2;
use crate::numeric::Scalar;

/// Three-way outcome of every intersection routine in the kernel.
///
/// Lines and segments meet nowhere, in exactly one point, or along
/// infinitely many points (the same line, or collinear overlapping
/// segments). Every routine distinguishes all three cases; only
/// `Single` carries a point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intersection<T: Scalar> {
    /// No common point.
    None,
    /// Exactly one common point.
    Single(Vector2<T>),
    /// A common stretch of points: identical lines or overlapping
    /// collinear segments.
    Infinite,
}
