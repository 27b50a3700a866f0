// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Verdict and severity vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict of one rule against one space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleStatus {
    /// Requirement met
    Pass,
    /// Requirement violated
    Fail,
    /// Rule does not apply to this space's category
    NotApplicable,
    /// Rule applies but the required input data is absent upstream
    NotChecked,
    /// Caller-contract violation while evaluating this rule
    Error,
}

/// How much a violation matters for the aggregate verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Must be fixed for compliance
    Critical,
    /// Should be reviewed
    Warning,
    /// Informational only
    Info,
}

/// Aggregate verdict for one space, folded from all rule verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    Pass,
    Fail,
    Partial,
    Error,
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleStatus::Pass => "PASS",
            RuleStatus::Fail => "FAIL",
            RuleStatus::NotApplicable => "NOT_APPLICABLE",
            RuleStatus::NotChecked => "NOT_CHECKED",
            RuleStatus::Error => "ERROR",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        };
        f.write_str(s)
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OverallStatus::Pass => "PASS",
            OverallStatus::Fail => "FAIL",
            OverallStatus::Partial => "PARTIAL",
            OverallStatus::Error => "ERROR",
        };
        f.write_str(s)
    }
}
