// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feasibility-checker behavior across room shapes and placements.

use tillsyn_geometry::{check_spaces, check_turning_circle, TURNING_CIRCLE_RADIUS_MM};
use tillsyn_model::{Point2D, Space, SpaceType};

fn room(id: &str, points: &[(f64, f64)]) -> Space {
    Space::new(id, id, SpaceType::Bathroom)
        .with_boundary(points.iter().map(|&(x, y)| Point2D::new(x, y)).collect())
}

#[test]
fn test_undersized_rooms_fail_regardless_of_shape() {
    // Every bounding box is under 1500mm in at least one direction
    let rooms = [
        room("square", &[(0.0, 0.0), (1400.0, 0.0), (1400.0, 1400.0), (0.0, 1400.0)]),
        room(
            "slab",
            &[(0.0, 0.0), (9000.0, 0.0), (9000.0, 1200.0), (0.0, 1200.0)],
        ),
        room("triangle", &[(0.0, 0.0), (1499.0, 0.0), (750.0, 1499.0)]),
    ];
    for r in &rooms {
        let result = check_turning_circle(r);
        assert!(!result.passed, "{} should fail", r.id);
        assert!(result.circle_center.is_none());
    }
}

#[test]
fn test_feasibility_is_translation_invariant() {
    let at_origin = room(
        "origin",
        &[(0.0, 0.0), (3000.0, 0.0), (3000.0, 2500.0), (0.0, 2500.0)],
    );
    let far_away = room(
        "offset",
        &[
            (250_000.0, -80_000.0),
            (253_000.0, -80_000.0),
            (253_000.0, -77_500.0),
            (250_000.0, -77_500.0),
        ],
    );
    assert!(check_turning_circle(&at_origin).passed);
    assert!(check_turning_circle(&far_away).passed);
}

#[test]
fn test_witness_center_keeps_clearance() {
    let result = check_turning_circle(&room(
        "bath",
        &[(0.0, 0.0), (3200.0, 0.0), (3200.0, 2600.0), (0.0, 2600.0)],
    ));
    assert!(result.passed);
    let center = result.circle_center.unwrap();
    // The witness must clear every wall by the disc radius
    assert!(center.x >= TURNING_CIRCLE_RADIUS_MM);
    assert!(center.x <= 3200.0 - TURNING_CIRCLE_RADIUS_MM);
    assert!(center.y >= TURNING_CIRCLE_RADIUS_MM);
    assert!(center.y <= 2600.0 - TURNING_CIRCLE_RADIUS_MM);
}

#[test]
fn test_l_shape_passes_in_the_wide_leg_only() {
    // 2000x2000 block joined to a 600mm-wide stub: the disc fits in
    // the block even though the stub alone could never hold it
    let result = check_turning_circle(&room(
        "l_shape",
        &[
            (0.0, 0.0),
            (2000.0, 0.0),
            (2000.0, 600.0),
            (2600.0, 600.0),
            (2600.0, 2000.0),
            (0.0, 2000.0),
        ],
    ));
    assert!(result.passed);
    let center = result.circle_center.unwrap();
    assert!(center.x <= 2000.0 - TURNING_CIRCLE_RADIUS_MM + 1e-9);
}

#[test]
fn test_missing_boundary_is_a_failed_result() {
    let space = Space::new("no_geo", "No Geometry", SpaceType::Bathroom);
    let result = check_turning_circle(&space);
    assert!(!result.passed);
    assert!(result.details.contains("boundary"));
}

#[test]
fn test_batch_preserves_order_and_ids() {
    let spaces = vec![
        room("a", &[(0.0, 0.0), (3000.0, 0.0), (3000.0, 2500.0), (0.0, 2500.0)]),
        room("b", &[(0.0, 0.0), (1000.0, 0.0), (1000.0, 1000.0), (0.0, 1000.0)]),
        Space::new("c", "c", SpaceType::Bathroom),
    ];
    let results = check_spaces(&spaces);
    let ids: Vec<_> = results.iter().map(|r| r.space_id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(
        results.iter().map(|r| r.passed).collect::<Vec<_>>(),
        [true, false, false]
    );
}
