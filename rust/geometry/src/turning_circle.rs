// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Turning-circle feasibility check.
//!
//! Decides whether a wheelchair turning disc of 1500mm diameter can be
//! placed entirely inside a space boundary. The search is a uniform
//! 100mm grid over the bounding box shrunk by the disc radius; the first
//! candidate (x-major scan order) whose full disc is contained wins.
//! Grid resolution bounds the precision of both outcomes; the step size
//! and first-fit order are fixed because changing them changes pass/fail
//! results near the 1500mm margin.

use crate::error::Error;
use crate::polygon::{
    area_outside, circle_polygon, min_distance_to_boundary, point_in_polygon, polygon_bounds,
    signed_area, validate_simple_polygon,
};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use tillsyn_model::{Point2D, Space};

/// Required turning circle diameter (BFS 2024:1 Section 3:14)
pub const TURNING_CIRCLE_DIAMETER_MM: f64 = 1500.0;

/// Disc radius derived from the 1500mm diameter
pub const TURNING_CIRCLE_RADIUS_MM: f64 = TURNING_CIRCLE_DIAMETER_MM / 2.0;

/// Candidate grid spacing
pub const GRID_STEP_MM: f64 = 100.0;

/// Segment count for the disc approximation in leakage diagnostics
const DISC_SEGMENTS: usize = 64;

/// Outcome of one feasibility check.
///
/// `circle_center` is present iff the check passed; `details` always
/// carries a human-readable explanation (success confirmation or
/// failure diagnostic) sufficient to act on from the report alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    pub space_id: String,
    pub space_name: String,
    pub passed: bool,
    pub circle_diameter_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circle_center: Option<Point2D>,
    pub details: String,
}

impl FeasibilityResult {
    fn failed(space: &Space, details: String) -> Self {
        Self {
            space_id: space.id.clone(),
            space_name: space.name.clone(),
            passed: false,
            circle_diameter_mm: TURNING_CIRCLE_DIAMETER_MM,
            circle_center: None,
            details,
        }
    }

    fn passed(space: &Space, center: Point2<f64>) -> Self {
        Self {
            space_id: space.id.clone(),
            space_name: space.name.clone(),
            passed: true,
            circle_diameter_mm: TURNING_CIRCLE_DIAMETER_MM,
            circle_center: Some(Point2D::new(center.x, center.y)),
            details: format!(
                "Turning circle fits with center at ({:.1}, {:.1})",
                center.x, center.y
            ),
        }
    }
}

/// Check whether the 1500mm turning circle fits inside a space boundary.
///
/// Never panics and never returns an error: missing or malformed
/// boundaries come back as failed results with a diagnostic naming the
/// problem.
pub fn check_turning_circle(space: &Space) -> FeasibilityResult {
    let boundary = match space.boundary.as_deref() {
        Some(b) => b,
        None => return FeasibilityResult::failed(space, Error::MissingBoundary.to_string()),
    };

    let contour: Vec<Point2<f64>> = boundary.iter().map(|p| Point2::new(p.x, p.y)).collect();

    if let Err(err) = validate_simple_polygon(&contour) {
        return FeasibilityResult::failed(space, err.to_string());
    }

    // validate_simple_polygon guarantees a non-empty contour
    let (min, max) = polygon_bounds(&contour).expect("validated polygon has bounds");
    let radius = TURNING_CIRCLE_RADIUS_MM;

    // Track the inside-the-polygon candidate whose disc leaks the least,
    // for the failure diagnostic.
    let mut best_center: Option<Point2<f64>> = None;
    let mut min_leakage = f64::INFINITY;

    let mut x = min.x + radius;
    while x <= max.x - radius + 1e-9 {
        let mut y = min.y + radius;
        while y <= max.y - radius + 1e-9 {
            let center = Point2::new(x, y);

            if point_in_polygon(&center, &contour) {
                if min_distance_to_boundary(&center, &contour) >= radius {
                    // First fit wins; no search for an optimal center.
                    return FeasibilityResult::passed(space, center);
                }

                let disc = circle_polygon(&center, radius, DISC_SEGMENTS);
                let leakage = area_outside(&disc, &contour);
                if leakage < min_leakage {
                    min_leakage = leakage;
                    best_center = Some(center);
                }
            }

            y += GRID_STEP_MM;
        }
        x += GRID_STEP_MM;
    }

    let details = match best_center {
        Some(center) => format!(
            "No valid turning circle position found. Closest attempt at ({:.1}, {:.1}) \
             extends {:.1} mm² outside boundary. Space may be too narrow or obstructed.",
            center.x, center.y, min_leakage
        ),
        None => {
            let width = max.x - min.x;
            let height = max.y - min.y;
            format!(
                "Space dimensions ({:.1} x {:.1} mm) are too small for {:.0}mm turning circle. \
                 Minimum required: {:.0}mm in at least one direction.",
                width, height, TURNING_CIRCLE_DIAMETER_MM, TURNING_CIRCLE_DIAMETER_MM
            )
        }
    };

    FeasibilityResult::failed(space, details)
}

/// Check turning circles for a batch of spaces, preserving input order.
pub fn check_spaces(spaces: &[Space]) -> Vec<FeasibilityResult> {
    spaces.iter().map(check_turning_circle).collect()
}

/// Boundary area in mm², 0.0 when the boundary is absent or degenerate.
pub fn boundary_area_mm2(space: &Space) -> f64 {
    match space.boundary.as_deref() {
        Some(boundary) => {
            let contour: Vec<Point2<f64>> =
                boundary.iter().map(|p| Point2::new(p.x, p.y)).collect();
            signed_area(&contour).abs()
        }
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillsyn_model::SpaceType;

    fn rect_space(id: &str, width: f64, height: f64) -> Space {
        Space::new(id, id, SpaceType::Bathroom).with_boundary(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(width, 0.0),
            Point2D::new(width, height),
            Point2D::new(0.0, height),
        ])
    }

    #[test]
    fn test_large_rectangle_passes_with_inset_witness() {
        let space = rect_space("s1", 3000.0, 2500.0);
        let result = check_turning_circle(&space);
        assert!(result.passed, "{}", result.details);

        let center = result.circle_center.unwrap();
        assert!(center.x >= TURNING_CIRCLE_RADIUS_MM);
        assert!(center.x <= 3000.0 - TURNING_CIRCLE_RADIUS_MM);
        assert!(center.y >= TURNING_CIRCLE_RADIUS_MM);
        assert!(center.y <= 2500.0 - TURNING_CIRCLE_RADIUS_MM);
    }

    #[test]
    fn test_first_fit_is_deterministic() {
        let space = rect_space("s1", 3000.0, 2500.0);
        let a = check_turning_circle(&space);
        let b = check_turning_circle(&space);
        assert_eq!(a.circle_center, b.circle_center);
        // First grid candidate is the inset corner of the bounding box
        let center = a.circle_center.unwrap();
        assert_eq!((center.x, center.y), (750.0, 750.0));
    }

    #[test]
    fn test_narrow_rectangle_fails() {
        let space = rect_space("s2", 1200.0, 1800.0);
        let result = check_turning_circle(&space);
        assert!(!result.passed);
    }

    #[test]
    fn test_small_bbox_always_fails() {
        // Both bounding-box dimensions below the diameter: no shape helps
        let space = rect_space("s3", 1400.0, 1400.0);
        let result = check_turning_circle(&space);
        assert!(!result.passed);
    }

    #[test]
    fn test_exact_fit_square() {
        // 1600mm square leaves room for the 1500mm disc at grid points
        let space = rect_space("s4", 1600.0, 1600.0);
        let result = check_turning_circle(&space);
        assert!(result.passed, "{}", result.details);
    }

    #[test]
    fn test_l_shape_passes() {
        let space = Space::new("s5", "L-Shaped Bathroom", SpaceType::Bathroom).with_boundary(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3000.0, 0.0),
            Point2D::new(3000.0, 1500.0),
            Point2D::new(1500.0, 1500.0),
            Point2D::new(1500.0, 3000.0),
            Point2D::new(0.0, 3000.0),
        ]);
        let result = check_turning_circle(&space);
        assert!(result.passed, "{}", result.details);
    }

    #[test]
    fn test_narrow_corridor_fails_with_closest_attempt() {
        let space = Space::new("s6", "Hallway", SpaceType::Corridor).with_boundary(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(5000.0, 0.0),
            Point2D::new(5000.0, 1000.0),
            Point2D::new(0.0, 1000.0),
        ]);
        let result = check_turning_circle(&space);
        assert!(!result.passed);
        // 1000mm height < 1500mm: the radius-shrunk box is empty, so the
        // dimension fallback fires
        assert!(result.details.contains("too small"), "{}", result.details);
    }

    #[test]
    fn test_almost_fitting_reports_leakage() {
        // Plus-shaped room, 3000mm bounding box but 1000mm-wide arms:
        // candidates inside exist, yet every disc leaks past an arm wall
        let space = Space::new("s7", "Cross Room", SpaceType::Bathroom).with_boundary(vec![
            Point2D::new(1000.0, 0.0),
            Point2D::new(2000.0, 0.0),
            Point2D::new(2000.0, 1000.0),
            Point2D::new(3000.0, 1000.0),
            Point2D::new(3000.0, 2000.0),
            Point2D::new(2000.0, 2000.0),
            Point2D::new(2000.0, 3000.0),
            Point2D::new(1000.0, 3000.0),
            Point2D::new(1000.0, 2000.0),
            Point2D::new(0.0, 2000.0),
            Point2D::new(0.0, 1000.0),
            Point2D::new(1000.0, 1000.0),
        ]);
        let result = check_turning_circle(&space);
        assert!(!result.passed);
        assert!(
            result.details.contains("Closest attempt"),
            "{}",
            result.details
        );
        assert!(result.details.contains("mm²"), "{}", result.details);
    }

    #[test]
    fn test_missing_boundary() {
        let space = Space::new("s8", "Invalid Space", SpaceType::Bathroom);
        let result = check_turning_circle(&space);
        assert!(!result.passed);
        assert!(result.details.contains("No boundary data provided"));
    }

    #[test]
    fn test_two_points_names_count() {
        let space = Space::new("s9", "Invalid Polygon", SpaceType::Bathroom)
            .with_boundary(vec![Point2D::new(0.0, 0.0), Point2D::new(1000.0, 0.0)]);
        let result = check_turning_circle(&space);
        assert!(!result.passed);
        assert!(result.details.contains("only 2 points"), "{}", result.details);
        assert!(result.details.contains("minimum 3"), "{}", result.details);
    }

    #[test]
    fn test_self_intersecting_boundary() {
        let space = Space::new("s10", "Bow Tie", SpaceType::Bathroom).with_boundary(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3000.0, 3000.0),
            Point2D::new(3000.0, 0.0),
            Point2D::new(0.0, 3000.0),
        ]);
        let result = check_turning_circle(&space);
        assert!(!result.passed);
        assert!(
            result.details.contains("self-intersecting"),
            "{}",
            result.details
        );
    }

    #[test]
    fn test_alcove_shape_passes() {
        // Bathroom with an alcove cut into the right side
        let space = Space::new("s11", "Bathroom with Alcove", SpaceType::Bathroom).with_boundary(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(2500.0, 0.0),
                Point2D::new(2500.0, 1000.0),
                Point2D::new(2000.0, 1000.0),
                Point2D::new(2000.0, 2000.0),
                Point2D::new(2500.0, 2000.0),
                Point2D::new(2500.0, 3000.0),
                Point2D::new(0.0, 3000.0),
            ],
        );
        let result = check_turning_circle(&space);
        assert!(result.passed, "{}", result.details);
    }

    #[test]
    fn test_batch_preserves_order() {
        let spaces = vec![
            rect_space("a", 3000.0, 2500.0),
            rect_space("b", 1200.0, 1800.0),
        ];
        let results = check_spaces(&spaces);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].space_id, "a");
        assert!(results[0].passed);
        assert_eq!(results[1].space_id, "b");
        assert!(!results[1].passed);
    }

    #[test]
    fn test_result_serde_round_trip() {
        let space = rect_space("s12", 3000.0, 2500.0);
        let result = check_turning_circle(&space);
        let json = serde_json::to_string(&result).unwrap();
        let back: FeasibilityResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
