// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Tillsyn Model
//!
//! Space records and the optional-attribute contract shared by the
//! geometry checker and the rule engine.
//!
//! A [`Space`] is produced upstream by a building-model extractor: a
//! stable id, a display name, a classified [`SpaceType`], a 2D boundary
//! polygon in millimeters, and an open-ended set of optional scalar
//! attributes. Attribute absence is meaningful (the extractor does not
//! yet supply the value) and must never be conflated with a failing
//! measurement, so every accessor returns `Option`.
//!
//! ```rust
//! use tillsyn_model::{Space, SpaceType, Point2D};
//!
//! let space = Space::new("space_001", "Main Bathroom", SpaceType::Bathroom)
//!     .with_boundary(vec![
//!         Point2D::new(0.0, 0.0),
//!         Point2D::new(3000.0, 0.0),
//!         Point2D::new(3000.0, 2500.0),
//!         Point2D::new(0.0, 2500.0),
//!     ]);
//! assert!(space.validate().is_ok());
//! assert_eq!(space.attributes.corridor_width_mm(), None);
//! ```

pub mod attributes;
pub mod error;
pub mod point;
pub mod space;

pub use attributes::{AttributeValue, Attributes};
pub use error::{Error, Result};
pub use point::Point2D;
pub use space::{Space, SpaceType};
