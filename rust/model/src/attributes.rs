// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Open-ended optional attribute map.
//!
//! The extractor attaches a flat set of named scalar attributes to each
//! space (corridor width, ramp slope, door swing, ...). The set grows as
//! extraction improves, so the map is open-ended: unknown keys are kept,
//! and typed accessors exist for every attribute the rule catalogue
//! currently reads. A missing key is a first-class state distinct from
//! zero or `false`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A single scalar attribute value.
///
/// Numbers are millimeters unless the attribute name says otherwise
/// (`ramp_slope_ratio` is a dimensionless ratio). String values from the
/// extractor are tolerated but never consumed by a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// Flat mapping of named optional attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(pub FxHashMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric attribute lookup. `None` when absent or not a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(AttributeValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    /// Boolean attribute lookup. `None` when absent or not a flag.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.0.get(key) {
            Some(AttributeValue::Flag(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn set_number(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), AttributeValue::Number(value));
    }

    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.0.insert(key.into(), AttributeValue::Flag(value));
    }

    // Typed accessors for the attributes the rule catalogue reads.

    pub fn corridor_width_mm(&self) -> Option<f64> {
        self.number("corridor_width_mm")
    }

    pub fn ramp_slope_ratio(&self) -> Option<f64> {
        self.number("ramp_slope_ratio")
    }

    pub fn handrail_height_mm(&self) -> Option<f64> {
        self.number("handrail_height_mm")
    }

    pub fn door_opens_outward(&self) -> Option<bool> {
        self.flag("door_opens_outward")
    }

    pub fn rest_area_25m_compliant(&self) -> Option<bool> {
        self.flag("rest_area_25m_compliant")
    }

    pub fn elevator_width_mm(&self) -> Option<f64> {
        self.number("elevator_width_mm")
    }

    pub fn elevator_depth_mm(&self) -> Option<f64> {
        self.number("elevator_depth_mm")
    }

    pub fn elevator_door_width_mm(&self) -> Option<f64> {
        self.number("elevator_door_width_mm")
    }

    pub fn emergency_exit_width_mm(&self) -> Option<f64> {
        self.number("emergency_exit_width_mm")
    }

    pub fn emergency_exit_door_opens_outward(&self) -> Option<bool> {
        self.flag("emergency_exit_door_opens_outward")
    }

    pub fn stair_rise_mm(&self) -> Option<f64> {
        self.number("stair_rise_mm")
    }

    pub fn stair_run_mm(&self) -> Option<f64> {
        self.number("stair_run_mm")
    }

    pub fn parking_width_mm(&self) -> Option<f64> {
        self.number("parking_width_mm")
    }

    pub fn parking_length_mm(&self) -> Option<f64> {
        self.number("parking_length_mm")
    }

    pub fn stair_handrail_both_sides(&self) -> Option<bool> {
        self.flag("stair_handrail_both_sides")
    }

    pub fn stair_width_mm(&self) -> Option<f64> {
        self.number("stair_width_mm")
    }

    pub fn window_sill_height_mm(&self) -> Option<f64> {
        self.number("window_sill_height_mm")
    }

    pub fn window_opening_width_mm(&self) -> Option<f64> {
        self.number("window_opening_width_mm")
    }

    pub fn window_opening_height_mm(&self) -> Option<f64> {
        self.number("window_opening_height_mm")
    }

    pub fn tactile_guidance_present(&self) -> Option<bool> {
        self.flag("tactile_guidance_present")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_attribute_is_none() {
        let attrs = Attributes::new();
        assert_eq!(attrs.corridor_width_mm(), None);
        assert_eq!(attrs.door_opens_outward(), None);
    }

    #[test]
    fn test_type_mismatch_is_none() {
        let mut attrs = Attributes::new();
        attrs.set_flag("corridor_width_mm", true);
        assert_eq!(attrs.corridor_width_mm(), None);
    }

    #[test]
    fn test_false_is_not_absent() {
        let mut attrs = Attributes::new();
        attrs.set_flag("door_opens_outward", false);
        assert_eq!(attrs.door_opens_outward(), Some(false));
    }

    #[test]
    fn test_deserialize_mixed_scalars() {
        let attrs: Attributes = serde_json::from_str(
            r#"{"corridor_width_mm": 1400, "tactile_guidance_present": true, "note": "n/a"}"#,
        )
        .unwrap();
        assert_eq!(attrs.corridor_width_mm(), Some(1400.0));
        assert_eq!(attrs.tactile_guidance_present(), Some(true));
        // Text values are tolerated but invisible to typed accessors.
        assert_eq!(attrs.number("note"), None);
    }
}
