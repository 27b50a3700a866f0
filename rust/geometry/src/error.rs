// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boundary conditions that prevent a feasibility check from running.
///
/// Malformed geometry is data, not a program fault: the feasibility
/// checker converts these into failed results carrying the same wording,
/// and never lets them escape its public boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No boundary data provided")]
    MissingBoundary,

    #[error("Boundary has only {count} points (minimum {min} required)")]
    TooFewPoints { count: usize, min: usize },

    #[error("Invalid polygon geometry: boundary encloses no area")]
    DegenerateArea,

    #[error("Invalid polygon geometry: boundary is self-intersecting")]
    SelfIntersecting,
}
