// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Space records and category tags.

use crate::attributes::Attributes;
use crate::error::{Error, Result};
use crate::point::Point2D;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of space categories used to select applicable rules.
///
/// Classification happens upstream (keyword heuristics over the model's
/// space names); the core only ever sees these canonical tags. Parsing
/// accepts the synonyms the extractor historically emitted, including
/// the Swedish ones, case-insensitively; anything unrecognized lands on
/// [`SpaceType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceType {
    Bathroom,
    Wc,
    Toilet,
    Entrance,
    Corridor,
    Ramp,
    Elevator,
    Stair,
    Parking,
    EmergencyExit,
    Room,
    Window,
    PublicArea,
    Lobby,
    Other,
}

impl SpaceType {
    /// Map an extractor tag (canonical or synonym) onto a category.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "bathroom" | "badrum" => SpaceType::Bathroom,
            "wc" => SpaceType::Wc,
            "toilet" | "toalett" => SpaceType::Toilet,
            "entrance" | "entré" => SpaceType::Entrance,
            "corridor" | "circulation" | "passage" | "hallway" | "korridor" => SpaceType::Corridor,
            "ramp" | "rampway" => SpaceType::Ramp,
            "elevator" | "lift" | "hiss" => SpaceType::Elevator,
            "stair" | "stairs" | "trappa" => SpaceType::Stair,
            "parking" | "parkeringsplats" | "accessible_parking" | "parking_space" => {
                SpaceType::Parking
            }
            "emergency_exit" | "exit" | "emergency" | "evacuation" | "nödutgång" | "utgång" => {
                SpaceType::EmergencyExit
            }
            "room" | "rum" | "space" => SpaceType::Room,
            "window" | "fönster" => SpaceType::Window,
            "public" | "public_area" | "offentlig" => SpaceType::PublicArea,
            "lobby" => SpaceType::Lobby,
            _ => SpaceType::Other,
        }
    }

    /// Canonical lowercase tag, the only form ever serialized.
    pub fn as_tag(&self) -> &'static str {
        match self {
            SpaceType::Bathroom => "bathroom",
            SpaceType::Wc => "wc",
            SpaceType::Toilet => "toilet",
            SpaceType::Entrance => "entrance",
            SpaceType::Corridor => "corridor",
            SpaceType::Ramp => "ramp",
            SpaceType::Elevator => "elevator",
            SpaceType::Stair => "stair",
            SpaceType::Parking => "parking",
            SpaceType::EmergencyExit => "emergency_exit",
            SpaceType::Room => "room",
            SpaceType::Window => "window",
            SpaceType::PublicArea => "public",
            SpaceType::Lobby => "lobby",
            SpaceType::Other => "other",
        }
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for SpaceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SpaceType::from_tag(s))
    }
}

impl Serialize for SpaceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for SpaceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(SpaceType::from_tag(&tag))
    }
}

/// One space record produced by the extractor.
///
/// Immutable once produced: the core reads it, never mutates it. The
/// boundary polygon is in millimeters; it may be non-convex. Any subset
/// of optional attributes may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub space_type: SpaceType,
    /// Ordered boundary polygon in millimeters, minimum 3 points for any
    /// geometric check to proceed. Absence is reported by the geometry
    /// checker, not rejected here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Vec<Point2D>>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Space {
    pub fn new(id: impl Into<String>, name: impl Into<String>, space_type: SpaceType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            space_type,
            boundary: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_boundary(mut self, boundary: Vec<Point2D>) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Validate the caller contract: a space without a stable id cannot
    /// be evaluated or reported against.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::MissingField("id"));
        }
        Ok(())
    }

    /// Axis-aligned bounding box of the boundary, `None` when the
    /// boundary is absent or empty.
    pub fn bounds(&self) -> Option<(Point2D, Point2D)> {
        let boundary = self.boundary.as_deref()?;
        let first = boundary.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in boundary.iter().skip(1) {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_id() {
        let space = Space::new("", "Nameless", SpaceType::Bathroom);
        assert!(space.validate().is_err());
    }

    #[test]
    fn test_type_aliases() {
        let hallway: SpaceType = serde_json::from_str(r#""hallway""#).unwrap();
        assert_eq!(hallway, SpaceType::Corridor);

        let hiss: SpaceType = serde_json::from_str(r#""hiss""#).unwrap();
        assert_eq!(hiss, SpaceType::Elevator);

        let unknown: SpaceType = serde_json::from_str(r#""kitchen""#).unwrap();
        assert_eq!(unknown, SpaceType::Other);
    }

    #[test]
    fn test_deserialize_space_with_attributes() {
        let json = r#"{
            "id": "space_010",
            "name": "Korridor A",
            "type": "korridor",
            "boundary": [[0, 0], [5000, 0], [5000, 1400], [0, 1400]],
            "corridor_width_mm": 1400,
            "tactile_guidance_present": false
        }"#;
        let space: Space = serde_json::from_str(json).unwrap();
        assert_eq!(space.space_type, SpaceType::Corridor);
        assert_eq!(space.boundary.as_ref().unwrap().len(), 4);
        assert_eq!(space.attributes.corridor_width_mm(), Some(1400.0));
        assert_eq!(space.attributes.tactile_guidance_present(), Some(false));
    }

    #[test]
    fn test_bounds() {
        let space = Space::new("s1", "S", SpaceType::Room).with_boundary(vec![
            Point2D::new(100.0, -50.0),
            Point2D::new(3100.0, 0.0),
            Point2D::new(1500.0, 2450.0),
        ]);
        let (min, max) = space.bounds().unwrap();
        assert_eq!((min.x, min.y), (100.0, -50.0));
        assert_eq!((max.x, max.y), (3100.0, 2450.0));
    }
}
