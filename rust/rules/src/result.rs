// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Evaluation output types.

use crate::status::{OverallStatus, RuleStatus, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tillsyn_model::SpaceType;

/// Verdict of one rule against one space.
///
/// `details` is the audit trail: every quantitative verdict states the
/// measured value, the threshold, and the direction of comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule_id: String,
    pub rule_name: String,
    pub status: RuleStatus,
    pub severity: Severity,
    pub reference: String,
    pub details: String,
}

/// Aggregate compliance verdict for one space.
///
/// `rules_checked` always holds one entry per catalogue rule, in
/// catalogue order, including NOT_APPLICABLE ones. Created fresh per
/// evaluation call and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub space_id: String,
    pub space_name: String,
    pub space_type: SpaceType,
    pub overall_status: OverallStatus,
    pub rules_checked: Vec<RuleResult>,
    pub passed_count: usize,
    pub failed_count: usize,
    pub not_checked_count: usize,
    pub timestamp: DateTime<Utc>,
    /// Set only when the space could not be evaluated at all
    /// (caller-contract violation converted by the pipeline).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComplianceResult {
    /// Wrap a per-space evaluation fault so a batch can continue past
    /// it instead of aborting.
    pub fn from_error(
        space_id: impl Into<String>,
        space_name: impl Into<String>,
        space_type: SpaceType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            space_id: space_id.into(),
            space_name: space_name.into(),
            space_type,
            overall_status: OverallStatus::Error,
            rules_checked: Vec::new(),
            passed_count: 0,
            failed_count: 0,
            not_checked_count: 0,
            timestamp: Utc::now(),
            error: Some(message.into()),
        }
    }
}

/// Fold per-rule verdicts into one aggregate verdict.
///
/// Fixed precedence: ERROR dominates FAIL dominates PARTIAL dominates
/// PASS. NOT_APPLICABLE never influences aggregation.
pub fn overall_status(rules: &[RuleResult]) -> OverallStatus {
    if rules.iter().any(|r| r.status == RuleStatus::Error) {
        return OverallStatus::Error;
    }

    let critical_fail = rules
        .iter()
        .any(|r| r.status == RuleStatus::Fail && r.severity == Severity::Critical);
    if critical_fail {
        return OverallStatus::Fail;
    }

    let not_checked = rules.iter().any(|r| r.status == RuleStatus::NotChecked);
    let warning_fail = rules
        .iter()
        .any(|r| r.status == RuleStatus::Fail && r.severity == Severity::Warning);
    if not_checked || warning_fail {
        return OverallStatus::Partial;
    }

    OverallStatus::Pass
}
