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

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use washi::{Exact, Intersection, Line, LineSegment, OrigamiPaper, Scalar, Vector2};

fn random_point(rng: &mut StdRng) -> Vector2<Exact> {
    Vector2::new(
        Exact::from_num_den(rng.random_range(-2..=4), 3),
        Exact::from_num_den(rng.random_range(-2..=4), 3),
    )
}

#[test]
fn test_fresh_sheet() {
    let paper = OrigamiPaper::<Exact>::new();
    assert_eq!(paper.points().len(), 4);
    assert_eq!(paper.creases().len(), 4);
    assert_eq!(paper.boundary().len(), 4);
    assert!(paper.points().contains(&Vector2::new(0, 0)));
    assert!(paper.points().contains(&Vector2::new(1, 0)));
    assert!(paper.points().contains(&Vector2::new(1, 1)));
    assert!(paper.points().contains(&Vector2::new(0, 1)));
    assert_eq!(paper.to_string(), "paper with 4 points and 4 creases");
}

#[test]
fn test_boundary_edges_are_creases() {
    let paper = OrigamiPaper::<Exact>::new();
    for edge in paper.boundary() {
        assert!(paper.creases().contains(edge));
    }
}

#[test]
fn test_boundary_classification_two_crossings() {
    let paper = OrigamiPaper::<Exact>::new();
    let vertical = Line::<Exact>::new(
        Vector2::new(Exact::from_num_den(1, 2), Exact::from(0)),
        Vector2::new(0, 1),
    )
    .unwrap();
    let (kind, crossings) = paper.intersects_boundary(&vertical);
    assert!(matches!(kind, Intersection::Single(_)));
    assert_eq!(crossings.len(), 2);
    assert!(crossings.contains(&Vector2::new(Exact::from_num_den(1, 2), Exact::from(0))));
    assert!(crossings.contains(&Vector2::new(Exact::from_num_den(1, 2), Exact::from(1))));
}

#[test]
fn test_boundary_classification_edge_line() {
    let paper = OrigamiPaper::<Exact>::new();
    let bottom = Line::<Exact>::new(Vector2::<Exact>::new(0, 0), Vector2::new(1, 0)).unwrap();
    let (kind, crossings) = paper.intersects_boundary(&bottom);
    assert_eq!(kind, Intersection::Infinite);
    assert!(crossings.is_empty());
}

#[test]
fn test_boundary_classification_miss() {
    let paper = OrigamiPaper::<Exact>::new();
    let outside = Line::<Exact>::new(Vector2::<Exact>::new(5, 0), Vector2::new(0, 1)).unwrap();
    let (kind, crossings) = paper.intersects_boundary(&outside);
    assert_eq!(kind, Intersection::None);
    assert!(crossings.is_empty());
}

#[test]
fn test_boundary_classification_corner_graze() {
    let paper = OrigamiPaper::<Exact>::new();
    let grazing = Line::<Exact>::new(Vector2::<Exact>::new(1, 0), Vector2::new(1, 1)).unwrap();
    let (kind, crossings) = paper.intersects_boundary(&grazing);
    assert_eq!(kind, Intersection::Single(Vector2::new(1, 0)));
    assert_eq!(crossings.len(), 1);
}

#[test]
fn test_diagonal_fold_adds_one_crease_no_points() {
    let mut paper = OrigamiPaper::<Exact>::new();
    let diagonal = Line::<Exact>::from_points(&Vector2::<Exact>::new(0, 0), &Vector2::new(1, 1)).unwrap();
    paper.add_all_intersections(&diagonal);
    assert_eq!(paper.creases().len(), 5);
    // both endpoints were corners already
    assert_eq!(paper.points().len(), 4);
    let crease = LineSegment::new(Vector2::<Exact>::new(0, 0), Vector2::new(1, 1)).unwrap();
    assert!(paper.creases().contains(&crease));
}

#[test]
fn test_mid_fold_records_edge_points() {
    let mut paper = OrigamiPaper::<Exact>::new();
    let fold = paper
        .axiom_2(&Vector2::new(0, 0), &Vector2::new(1, 0))
        .unwrap();
    paper.add_all_intersections(&fold);
    assert_eq!(paper.creases().len(), 5);
    assert_eq!(paper.points().len(), 6);
    assert!(paper
        .points()
        .contains(&Vector2::new(Exact::from_num_den(1, 2), Exact::from(0))));
    assert!(paper
        .points()
        .contains(&Vector2::new(Exact::from_num_den(1, 2), Exact::from(1))));
}

#[test]
fn test_fold_discovers_crease_crossings() {
    let mut paper = OrigamiPaper::<Exact>::new();
    let diagonal = Line::<Exact>::from_points(&Vector2::<Exact>::new(0, 0), &Vector2::new(1, 1)).unwrap();
    let anti = Line::<Exact>::from_points(&Vector2::new(0, 1), &Vector2::new(1, 0)).unwrap();
    paper.add_all_intersections(&diagonal);
    paper.add_all_intersections(&anti);
    assert_eq!(paper.creases().len(), 6);
    assert_eq!(paper.points().len(), 5);
    let center = Vector2::new(Exact::from_num_den(1, 2), Exact::from_num_den(1, 2));
    assert!(paper.points().contains(&center));
}

#[test]
fn test_duplicate_fold_rejected() {
    let mut paper = OrigamiPaper::<Exact>::new();
    let diagonal = Line::<Exact>::from_points(&Vector2::<Exact>::new(0, 0), &Vector2::new(1, 1)).unwrap();
    paper.add_all_intersections(&diagonal);
    paper.add_all_intersections(&diagonal);
    // same geometric line under another parameterization
    let reparameterized = Line::<Exact>::new(Vector2::new(3, 3), Vector2::new(-2, -2)).unwrap();
    paper.add_all_intersections(&reparameterized);
    assert_eq!(paper.creases().len(), 5);
    assert_eq!(paper.points().len(), 4);
}

#[test]
fn test_fold_missing_the_sheet_ignored() {
    let mut paper = OrigamiPaper::<Exact>::new();
    let outside = Line::<Exact>::new(Vector2::<Exact>::new(5, 0), Vector2::new(0, 1)).unwrap();
    paper.add_all_intersections(&outside);
    assert_eq!(paper.creases().len(), 4);
    assert_eq!(paper.points().len(), 4);
}

#[test]
fn test_fold_along_a_boundary_edge_ignored() {
    let mut paper = OrigamiPaper::<Exact>::new();
    let bottom = Line::<Exact>::new(Vector2::<Exact>::new(0, 0), Vector2::new(1, 0)).unwrap();
    paper.add_all_intersections(&bottom);
    assert_eq!(paper.creases().len(), 4);
    assert_eq!(paper.points().len(), 4);
}

#[test]
fn test_fold_touching_only_a_corner_ignored() {
    let mut paper = OrigamiPaper::<Exact>::new();
    let grazing = Line::<Exact>::new(Vector2::<Exact>::new(1, 0), Vector2::new(1, 1)).unwrap();
    paper.add_all_intersections(&grazing);
    assert_eq!(paper.creases().len(), 4);
    assert_eq!(paper.points().len(), 4);
}

#[test]
fn test_fold_entering_through_an_edge_and_a_corner() {
    let mut paper = OrigamiPaper::<Exact>::new();
    let half = Vector2::new(Exact::from_num_den(1, 2), Exact::from(0));
    let fold = Line::<Exact>::from_points(&half, &Vector2::new(1, 1)).unwrap();
    paper.add_all_intersections(&fold);
    assert_eq!(paper.creases().len(), 5);
    assert_eq!(paper.points().len(), 5);
    assert!(paper.points().contains(&half));
}

#[test]
fn test_random_folds_keep_the_state_consistent() {
    let mut rng = StdRng::seed_from_u64(29);
    let mut paper = OrigamiPaper::<Exact>::new();
    for _ in 0..40 {
        let p1 = random_point(&mut rng);
        let p2 = random_point(&mut rng);
        if p1 == p2 {
            continue;
        }
        let fold = paper.axiom_1(&p1, &p2).unwrap();
        paper.add_all_intersections(&fold);
    }
    for crease in paper.creases() {
        assert!(paper.points().contains(&crease.p1));
        assert!(paper.points().contains(&crease.p2));
        // crease endpoints always sit on the boundary
        assert!(paper
            .boundary()
            .iter()
            .any(|edge| crease.p1.lies_on_line_segment(edge)));
        assert!(paper
            .boundary()
            .iter()
            .any(|edge| crease.p2.lies_on_line_segment(edge)));
    }
}
