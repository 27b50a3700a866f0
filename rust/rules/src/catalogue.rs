// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The BFS 2024:1 rule catalogue.
//!
//! Each rule is a plain static record (regulatory section id, severity,
//! applicable space categories, threshold data) consumed by the generic
//! evaluator in [`crate::evaluator`]. The catalogue is versioned with
//! the crate and evaluated exhaustively: every space gets one verdict
//! per row, including NOT_APPLICABLE ones, so callers can rely on
//! positional completeness of the result list.

use crate::status::Severity;
use tillsyn_model::SpaceType;

/// Numeric comparison direction. All bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    /// measured >= threshold
    AtLeast(f64),
    /// measured <= threshold
    AtMost(f64),
    /// low <= measured <= high
    Between(f64, f64),
}

/// One measured quantity a rule compares against a threshold.
#[derive(Debug, Clone, Copy)]
pub struct Quantity {
    /// Attribute key in the space record
    pub attr: &'static str,
    /// Display label used in the details audit text
    pub label: &'static str,
    pub cmp: Comparison,
}

/// How a rule decides its verdict once it is known to apply.
#[derive(Debug, Clone, Copy)]
pub enum RuleCheck {
    /// Delegates to the geometry feasibility result. A missing or
    /// mismatched result for an applicable space is a caller error.
    TurningCircle,
    /// Bounding-box minimum dimension of the boundary, standing in for
    /// real door-width extraction. A clearly labeled placeholder: a wide
    /// room with a narrow door will incorrectly pass until door
    /// extraction lands.
    MinBoundarySpan { required_mm: f64 },
    /// No extraction exists yet; always NOT_CHECKED.
    Pending,
    /// One or more numeric comparisons, all of which must hold.
    Quantities(&'static [Quantity]),
    /// Slope ratio comparison; inputs > 1 are percentages and are
    /// normalized by dividing by 100 first.
    SlopeAtMost {
        attr: &'static str,
        max_ratio: f64,
    },
    /// Boolean requirement.
    Flag {
        attr: &'static str,
        pass_detail: &'static str,
        fail_detail: &'static str,
    },
}

/// One rule of the catalogue.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// Stable identifier: the BFS section number
    pub id: &'static str,
    pub name: &'static str,
    /// Regulatory reference text for the report
    pub reference: &'static str,
    pub severity: Severity,
    /// Space categories the rule applies to; anything else is
    /// NOT_APPLICABLE without reading further attributes
    pub applies_to: &'static [SpaceType],
    /// NOT_CHECKED details: names the missing upstream data and the
    /// extraction enhancement that would supply it
    pub missing_hint: &'static str,
    pub check: RuleCheck,
}

const WET_ROOMS: &[SpaceType] = &[SpaceType::Bathroom, SpaceType::Wc, SpaceType::Toilet];

/// The complete catalogue, in regulatory evaluation order.
pub static CATALOGUE: [RuleDef; 20] = [
    RuleDef {
        id: "BFS-2024:1-3:14",
        name: "Turning Circle (1500mm)",
        reference: "BFS 2024:1 Section 3:14",
        severity: Severity::Critical,
        applies_to: WET_ROOMS,
        missing_hint: "",
        check: RuleCheck::TurningCircle,
    },
    RuleDef {
        id: "BFS-2024:1-3:15",
        name: "Door Width (900mm minimum)",
        reference: "BFS 2024:1 Section 3:15",
        severity: Severity::Critical,
        applies_to: WET_ROOMS,
        missing_hint: "",
        check: RuleCheck::MinBoundarySpan { required_mm: 900.0 },
    },
    RuleDef {
        id: "BFS-2024:1-3:16",
        name: "Threshold Height (25mm max)",
        reference: "BFS 2024:1 Section 3:16",
        severity: Severity::Warning,
        applies_to: &[
            SpaceType::Bathroom,
            SpaceType::Wc,
            SpaceType::Toilet,
            SpaceType::Entrance,
        ],
        missing_hint: "Threshold data not available from the current model extraction. \
                       Will be checked when door/threshold extraction is implemented.",
        check: RuleCheck::Pending,
    },
    RuleDef {
        id: "BFS-2024:1-3:22",
        name: "Corridor Width (1300mm minimum)",
        reference: "BFS 2024:1 Section 3:22",
        severity: Severity::Critical,
        applies_to: &[SpaceType::Corridor],
        missing_hint: "Corridor width not available from the current model extraction. \
                       Will be checked when corridor geometry extraction is implemented.",
        check: RuleCheck::Quantities(&[Quantity {
            attr: "corridor_width_mm",
            label: "Corridor width",
            cmp: Comparison::AtLeast(1300.0),
        }]),
    },
    RuleDef {
        id: "BFS-2024:1-3:231",
        name: "Ramp Slope (max 1:12 / 8.33%)",
        reference: "BFS 2024:1 Section 3:231",
        severity: Severity::Critical,
        applies_to: &[SpaceType::Ramp],
        missing_hint: "Ramp slope not available from the current model extraction. \
                       Will be checked when ramp geometry extraction is implemented.",
        check: RuleCheck::SlopeAtMost {
            attr: "ramp_slope_ratio",
            max_ratio: 1.0 / 12.0,
        },
    },
    RuleDef {
        id: "BFS-2024:1-3:232",
        name: "Handrail Height (900-1000mm)",
        reference: "BFS 2024:1 Section 3:232",
        severity: Severity::Critical,
        applies_to: &[SpaceType::Ramp, SpaceType::Stair],
        missing_hint: "Handrail height not available from the current model extraction. \
                       Will be checked when railing extraction is implemented.",
        check: RuleCheck::Quantities(&[Quantity {
            attr: "handrail_height_mm",
            label: "Handrail height",
            cmp: Comparison::Between(900.0, 1000.0),
        }]),
    },
    RuleDef {
        id: "BFS-2024:1-3:241",
        name: "Bathroom Door Opens Outward",
        reference: "BFS 2024:1 Section 3:241",
        severity: Severity::Critical,
        applies_to: WET_ROOMS,
        missing_hint: "Door swing direction not available from the current model extraction. \
                       Will be checked when door extraction is implemented.",
        check: RuleCheck::Flag {
            attr: "door_opens_outward",
            pass_detail: "Bathroom door opens outward for emergency access.",
            fail_detail: "Bathroom door does not open outward; must open outward for \
                          emergency access.",
        },
    },
    RuleDef {
        id: "BFS-2024:1-3:311",
        name: "Rest Area Every 25m (corridors)",
        reference: "BFS 2024:1 Section 3:311",
        severity: Severity::Warning,
        applies_to: &[SpaceType::Corridor],
        missing_hint: "Corridor length and rest area data not available from the current model \
                       extraction. Will be checked when rest-area extraction is implemented.",
        check: RuleCheck::Flag {
            attr: "rest_area_25m_compliant",
            pass_detail: "Rest area or widening provided at least every 25m.",
            fail_detail: "Rest area or widening required at least every 25m in corridor.",
        },
    },
    RuleDef {
        id: "BFS-2024:1-3:143",
        name: "Elevator Minimum Size (1100mm x 1400mm)",
        reference: "BFS 2024:1 Section 3:143",
        severity: Severity::Critical,
        applies_to: &[SpaceType::Elevator],
        missing_hint: "Elevator cabin dimensions not available from the current model \
                       extraction. Will be checked when elevator geometry extraction is \
                       implemented.",
        check: RuleCheck::Quantities(&[
            Quantity {
                attr: "elevator_width_mm",
                label: "Elevator cabin width",
                cmp: Comparison::AtLeast(1100.0),
            },
            Quantity {
                attr: "elevator_depth_mm",
                label: "Elevator cabin depth",
                cmp: Comparison::AtLeast(1400.0),
            },
        ]),
    },
    RuleDef {
        id: "BFS-2024:1-3:144",
        name: "Elevator Door Width (800mm minimum)",
        reference: "BFS 2024:1 Section 3:144",
        severity: Severity::Critical,
        applies_to: &[SpaceType::Elevator],
        missing_hint: "Elevator door width not available from the current model extraction. \
                       Will be checked when elevator door extraction is implemented.",
        check: RuleCheck::Quantities(&[Quantity {
            attr: "elevator_door_width_mm",
            label: "Elevator door width",
            cmp: Comparison::AtLeast(800.0),
        }]),
    },
    RuleDef {
        id: "BFS-2024:1-3:51",
        name: "Emergency Exit Width (900mm minimum)",
        reference: "BFS 2024:1 Section 3:51",
        severity: Severity::Critical,
        applies_to: &[SpaceType::EmergencyExit],
        missing_hint: "Emergency exit width not available from the current model extraction. \
                       Will be checked when exit geometry extraction is implemented.",
        check: RuleCheck::Quantities(&[Quantity {
            attr: "emergency_exit_width_mm",
            label: "Emergency exit width",
            cmp: Comparison::AtLeast(900.0),
        }]),
    },
    RuleDef {
        id: "BFS-2024:1-3:52",
        name: "Emergency Exit Door Opens Outward",
        reference: "BFS 2024:1 Section 3:52",
        severity: Severity::Critical,
        applies_to: &[SpaceType::EmergencyExit],
        missing_hint: "Emergency exit door swing direction not available from the current model \
                       extraction. Will be checked when exit door extraction is implemented.",
        check: RuleCheck::Flag {
            attr: "emergency_exit_door_opens_outward",
            pass_detail: "Emergency exit door opens outward for evacuation.",
            fail_detail: "Emergency exit door does not open outward; must open outward for \
                          evacuation.",
        },
    },
    RuleDef {
        id: "BFS-2024:1-3:421",
        name: "Stair Step Height (max 150mm) and Depth (min 300mm)",
        reference: "BFS 2024:1 Section 3:421",
        severity: Severity::Critical,
        applies_to: &[SpaceType::Stair],
        missing_hint: "Stair step dimensions (rise/run) not available from the current model \
                       extraction. Will be checked when stair geometry extraction is \
                       implemented.",
        check: RuleCheck::Quantities(&[
            Quantity {
                attr: "stair_rise_mm",
                label: "Step rise",
                cmp: Comparison::AtMost(150.0),
            },
            Quantity {
                attr: "stair_run_mm",
                label: "Step run",
                cmp: Comparison::AtLeast(300.0),
            },
        ]),
    },
    RuleDef {
        id: "BFS-2024:1-3:131",
        name: "Accessible Parking Space Width (3600mm minimum)",
        reference: "BFS 2024:1 Section 3:131",
        severity: Severity::Critical,
        applies_to: &[SpaceType::Parking],
        missing_hint: "Parking space width not available from the current model extraction. \
                       Will be checked when parking geometry extraction is implemented.",
        check: RuleCheck::Quantities(&[Quantity {
            attr: "parking_width_mm",
            label: "Parking width",
            cmp: Comparison::AtLeast(3600.0),
        }]),
    },
    RuleDef {
        id: "BFS-2024:1-3:132",
        name: "Parking Space Length (5000mm minimum)",
        reference: "BFS 2024:1 Section 3:132",
        severity: Severity::Critical,
        applies_to: &[SpaceType::Parking],
        missing_hint: "Parking space length not available from the current model extraction. \
                       Will be checked when parking geometry extraction is implemented.",
        check: RuleCheck::Quantities(&[Quantity {
            attr: "parking_length_mm",
            label: "Parking length",
            cmp: Comparison::AtLeast(5000.0),
        }]),
    },
    RuleDef {
        id: "BFS-2024:1-3:411",
        name: "Stair Handrail Both Sides Required",
        reference: "BFS 2024:1 Section 3:411",
        severity: Severity::Critical,
        applies_to: &[SpaceType::Stair],
        missing_hint: "Stair handrail configuration not available from the current model \
                       extraction. Will be checked when railing extraction is implemented.",
        check: RuleCheck::Flag {
            attr: "stair_handrail_both_sides",
            pass_detail: "Stair has handrails on both sides.",
            fail_detail: "Stair must have handrails on both sides.",
        },
    },
    RuleDef {
        id: "BFS-2024:1-3:412",
        name: "Stair Width (1200mm minimum)",
        reference: "BFS 2024:1 Section 3:412",
        severity: Severity::Critical,
        applies_to: &[SpaceType::Stair],
        missing_hint: "Stair width not available from the current model extraction. \
                       Will be checked when stair geometry extraction is implemented.",
        check: RuleCheck::Quantities(&[Quantity {
            attr: "stair_width_mm",
            label: "Stair width",
            cmp: Comparison::AtLeast(1200.0),
        }]),
    },
    RuleDef {
        id: "BFS-2024:1-3:531",
        name: "Window Sill Height (max 600mm from floor)",
        reference: "BFS 2024:1 Section 3:531",
        severity: Severity::Warning,
        applies_to: &[SpaceType::Window, SpaceType::Room],
        missing_hint: "Window sill height not available from the current model extraction. \
                       Will be checked when window extraction is implemented.",
        check: RuleCheck::Quantities(&[Quantity {
            attr: "window_sill_height_mm",
            label: "Window sill height",
            cmp: Comparison::AtMost(600.0),
        }]),
    },
    RuleDef {
        id: "BFS-2024:1-3:532",
        name: "Window Opening (min 900mm x 1200mm)",
        reference: "BFS 2024:1 Section 3:532",
        severity: Severity::Warning,
        applies_to: &[SpaceType::Window, SpaceType::Room],
        missing_hint: "Window opening dimensions not available from the current model \
                       extraction. Will be checked when window extraction is implemented.",
        check: RuleCheck::Quantities(&[
            Quantity {
                attr: "window_opening_width_mm",
                label: "Window opening width",
                cmp: Comparison::AtLeast(900.0),
            },
            Quantity {
                attr: "window_opening_height_mm",
                label: "Window opening height",
                cmp: Comparison::AtLeast(1200.0),
            },
        ]),
    },
    RuleDef {
        id: "BFS-2024:1-3:611",
        name: "Tactile Floor Guidance (visually impaired)",
        reference: "BFS 2024:1 Section 3:611",
        severity: Severity::Warning,
        applies_to: &[
            SpaceType::Corridor,
            SpaceType::PublicArea,
            SpaceType::Lobby,
            SpaceType::Entrance,
        ],
        missing_hint: "Tactile floor guidance data not available from the current model \
                       extraction. Will be checked when floor finish extraction is implemented.",
        check: RuleCheck::Flag {
            attr: "tactile_guidance_present",
            pass_detail: "Tactile floor guidance present for visually impaired.",
            fail_detail: "Tactile floor guidance required for visually impaired in this \
                          public area.",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_has_twenty_rules() {
        assert_eq!(CATALOGUE.len(), 20);
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let ids: HashSet<_> = CATALOGUE.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), CATALOGUE.len());
    }

    #[test]
    fn test_every_rule_applies_to_something() {
        for rule in &CATALOGUE {
            assert!(!rule.applies_to.is_empty(), "{} applies to nothing", rule.id);
        }
    }

    #[test]
    fn test_data_driven_rules_carry_missing_hint() {
        for rule in &CATALOGUE {
            match rule.check {
                RuleCheck::TurningCircle | RuleCheck::MinBoundarySpan { .. } => {}
                _ => assert!(
                    !rule.missing_hint.is_empty(),
                    "{} has no NOT_CHECKED hint",
                    rule.id
                ),
            }
        }
    }
}
