// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Tillsyn Geometry
//!
//! Turning-circle feasibility checking for space boundaries, using
//! nalgebra for 2D math and i_overlay for the boolean-difference
//! leakage diagnostics.
//!
//! The public entry point is [`check_turning_circle`]: given a
//! [`tillsyn_model::Space`], it decides whether a 1500mm-diameter
//! wheelchair turning disc fits entirely inside the boundary polygon
//! and returns a [`FeasibilityResult`] with either a witness center or
//! a diagnostic. All malformed-input conditions come back as failed
//! results; the checker never panics across its public boundary.

pub mod error;
pub mod polygon;
pub mod turning_circle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};

pub use error::{Error, Result};
pub use turning_circle::{
    boundary_area_mm2, check_spaces, check_turning_circle, FeasibilityResult, GRID_STEP_MM,
    TURNING_CIRCLE_DIAMETER_MM, TURNING_CIRCLE_RADIUS_MM,
};
