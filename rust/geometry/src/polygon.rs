// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D polygon primitives for the feasibility checker.
//!
//! Containment and distance queries are computed directly; the
//! disc-minus-polygon leakage area used in failure diagnostics goes
//! through the i_overlay boolean difference.

use crate::error::{Error, Result};
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use nalgebra::Point2;

/// Epsilon for floating point comparisons in 2D operations
const EPSILON_2D: f64 = 1e-9;

/// Minimum area threshold - boundaries smaller than this enclose nothing
const MIN_AREA_THRESHOLD: f64 = 1e-6;

/// Minimum number of boundary points for any geometric check
pub const MIN_BOUNDARY_POINTS: usize = 3;

/// Compute the signed area of a 2D contour (shoelace formula).
/// Positive = counter-clockwise, Negative = clockwise
pub fn signed_area(contour: &[Point2<f64>]) -> f64 {
    if contour.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    let n = contour.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area += contour[i].x * contour[j].y;
        area -= contour[j].x * contour[i].y;
    }

    area * 0.5
}

/// Check if a point is inside a contour using ray casting
pub fn point_in_polygon(point: &Point2<f64>, contour: &[Point2<f64>]) -> bool {
    if contour.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = contour.len();

    let mut j = n - 1;
    for i in 0..n {
        let pi = &contour[i];
        let pj = &contour[j];

        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Compute bounding box of a contour
pub fn polygon_bounds(contour: &[Point2<f64>]) -> Option<(Point2<f64>, Point2<f64>)> {
    if contour.is_empty() {
        return None;
    }

    let mut min = contour[0];
    let mut max = contour[0];

    for p in contour.iter().skip(1) {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    Some((min, max))
}

/// Distance from a point to a line segment
pub fn distance_to_segment(point: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < EPSILON_2D {
        return (point - a).norm();
    }

    let t = ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let projection = a + ab * t;
    (point - projection).norm()
}

/// Minimum distance from a point to the polygon boundary (all edges).
///
/// Combined with a containment test this decides disc feasibility
/// exactly: a disc of radius r fits inside a simple polygon iff its
/// center is inside and this distance is >= r.
pub fn min_distance_to_boundary(point: &Point2<f64>, contour: &[Point2<f64>]) -> f64 {
    let n = contour.len();
    let mut min_dist = f64::INFINITY;

    for i in 0..n {
        let j = (i + 1) % n;
        let d = distance_to_segment(point, &contour[i], &contour[j]);
        if d < min_dist {
            min_dist = d;
        }
    }

    min_dist
}

/// Validate that a boundary forms a simple polygon.
///
/// Rejects too few points, zero enclosed area, and self-intersection.
/// Touching or repeated consecutive vertices are tolerated; only proper
/// crossings between non-adjacent edges count as self-intersection.
pub fn validate_simple_polygon(contour: &[Point2<f64>]) -> Result<()> {
    if contour.len() < MIN_BOUNDARY_POINTS {
        return Err(Error::TooFewPoints {
            count: contour.len(),
            min: MIN_BOUNDARY_POINTS,
        });
    }

    if is_self_intersecting(contour) {
        return Err(Error::SelfIntersecting);
    }

    // A bow-tie cancels its own shoelace sum, so the crossing test
    // must run before this one.
    if signed_area(contour).abs() < MIN_AREA_THRESHOLD {
        return Err(Error::DegenerateArea);
    }

    Ok(())
}

/// Check whether any two non-adjacent edges properly cross
pub fn is_self_intersecting(contour: &[Point2<f64>]) -> bool {
    let n = contour.len();
    if n < 4 {
        return false;
    }

    for i in 0..n {
        let a1 = &contour[i];
        let a2 = &contour[(i + 1) % n];

        for j in (i + 1)..n {
            // Skip the edge itself and the two adjacent edges
            if j == i || (j + 1) % n == i || (i + 1) % n == j {
                continue;
            }

            let b1 = &contour[j];
            let b2 = &contour[(j + 1) % n];

            if segments_cross(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    false
}

fn orientation(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Proper crossing test: each segment strictly straddles the other's line
fn segments_cross(a1: &Point2<f64>, a2: &Point2<f64>, b1: &Point2<f64>, b2: &Point2<f64>) -> bool {
    let d1 = orientation(a1, a2, b1);
    let d2 = orientation(a1, a2, b2);
    let d3 = orientation(b1, b2, a1);
    let d4 = orientation(b1, b2, a2);

    (d1 * d2 < -EPSILON_2D) && (d3 * d4 < -EPSILON_2D)
}

/// Approximate a circle as a regular polygon with `segments` vertices
pub fn circle_polygon(center: &Point2<f64>, radius: f64, segments: usize) -> Vec<Point2<f64>> {
    (0..segments)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * (i as f64) / (segments as f64);
            Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Area of `subject` lying outside `clip` (boolean difference).
///
/// Used to quantify how far a candidate disc leaks past the boundary.
/// An empty difference means full containment and yields 0.0.
pub fn area_outside(subject: &[Point2<f64>], clip: &[Point2<f64>]) -> f64 {
    let subject_path: Vec<Vec<[f64; 2]>> = vec![contour_to_path(subject)];
    let clip_path: Vec<Vec<[f64; 2]>> = vec![contour_to_path(clip)];

    let shapes = subject_path.overlay(&clip_path, OverlayRule::Difference, FillRule::EvenOdd);

    // First contour per shape is the outer boundary, the rest are holes.
    let mut total = 0.0;
    for shape in &shapes {
        for (idx, contour) in shape.iter().enumerate() {
            let points: Vec<Point2<f64>> =
                contour.iter().map(|p| Point2::new(p[0], p[1])).collect();
            let area = signed_area(&points).abs();
            if idx == 0 {
                total += area;
            } else {
                total -= area;
            }
        }
    }

    total.max(0.0)
}

fn contour_to_path(contour: &[Point2<f64>]) -> Vec<[f64; 2]> {
    contour.iter().map(|p| [p.x, p.y]).collect()
}
