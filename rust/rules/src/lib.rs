// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BFS 2024:1 accessibility rule catalogue and evaluator.
//!
//! Twenty declarative rules covering wet rooms, corridors, ramps,
//! elevators, stairs, parking, emergency exits, windows and public
//! areas. One generic evaluator walks the catalogue per space and
//! produces one verdict per rule plus a folded aggregate status.
//!
//! ```
//! use tillsyn_model::{Space, SpaceType};
//! use tillsyn_rules::evaluate_space;
//!
//! let mut space = Space::new("s1", "Korridor A", SpaceType::Corridor);
//! space.attributes.set_number("corridor_width_mm", 1400.0);
//!
//! let result = evaluate_space(&space, None).unwrap();
//! assert_eq!(result.rules_checked.len(), 20);
//! ```

pub mod catalogue;
pub mod error;
pub mod evaluator;
pub mod result;
pub mod status;

pub use catalogue::{Comparison, Quantity, RuleCheck, RuleDef, CATALOGUE};
pub use error::{Error, Result};
pub use evaluator::{evaluate_rule, evaluate_space};
pub use result::{overall_status, ComplianceResult, RuleResult};
pub use status::{OverallStatus, RuleStatus, Severity};
