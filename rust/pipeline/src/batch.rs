// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch evaluation over a set of space records.
//!
//! Each space is evaluated independently: geometry feasibility first,
//! then the rule catalogue. A per-space fault becomes an ERROR-status
//! result in place, so output order always matches input order and a
//! batch never aborts halfway. The parallel path produces byte-for-byte
//! the same results as the sequential one apart from timestamps.

use crate::error::Result;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tillsyn_geometry::check_turning_circle;
use tillsyn_model::Space;
use tillsyn_rules::{evaluate_space, ComplianceResult, OverallStatus, RuleCheck, CATALOGUE};

/// Regulatory standard every report is evaluated against.
pub const STANDARD: &str = "BFS 2024:1";

/// Envelope around a batch of per-space compliance results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub standard: String,
    pub generated: DateTime<Utc>,
    pub spaces_total: usize,
    pub passed: usize,
    pub partial: usize,
    pub failed: usize,
    pub errors: usize,
    pub results: Vec<ComplianceResult>,
}

impl BatchReport {
    /// Wrap per-space results, counting aggregate verdicts.
    pub fn new(results: Vec<ComplianceResult>) -> Self {
        let tally = |status: OverallStatus| {
            results
                .iter()
                .filter(|r| r.overall_status == status)
                .count()
        };
        Self {
            standard: STANDARD.to_string(),
            generated: Utc::now(),
            spaces_total: results.len(),
            passed: tally(OverallStatus::Pass),
            partial: tally(OverallStatus::Partial),
            failed: tally(OverallStatus::Fail),
            errors: tally(OverallStatus::Error),
            results,
        }
    }

    /// True when no space failed or errored.
    pub fn is_acceptable(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

/// True when the turning-circle rule applies to this space's category,
/// so the grid search is worth running at all.
fn needs_feasibility(space: &Space) -> bool {
    CATALOGUE.iter().any(|rule| {
        matches!(rule.check, RuleCheck::TurningCircle)
            && rule.applies_to.contains(&space.space_type)
    })
}

/// Evaluate one space: geometry feasibility, then the rule catalogue.
///
/// Infallible by construction: a caller-contract violation in the space
/// record is converted to an ERROR-status result rather than propagated.
pub fn evaluate_one(space: &Space) -> ComplianceResult {
    let feasibility = needs_feasibility(space).then(|| check_turning_circle(space));
    match evaluate_space(space, feasibility.as_ref()) {
        Ok(result) => {
            tracing::debug!(
                space_id = %result.space_id,
                status = %result.overall_status,
                "Space evaluated"
            );
            result
        }
        Err(e) => {
            tracing::warn!(space_id = %space.id, error = %e, "Space could not be evaluated");
            ComplianceResult::from_error(&space.id, &space.name, space.space_type, e.to_string())
        }
    }
}

/// Evaluate a batch of spaces sequentially, preserving input order.
pub fn evaluate_spaces(spaces: &[Space]) -> BatchReport {
    tracing::info!(space_count = spaces.len(), "Starting compliance evaluation");
    let results = spaces.iter().map(evaluate_one).collect();
    finish(results)
}

/// Evaluate a batch of spaces in parallel, preserving input order.
pub fn evaluate_spaces_parallel(spaces: &[Space]) -> BatchReport {
    tracing::info!(
        space_count = spaces.len(),
        "Starting parallel compliance evaluation"
    );
    let results = spaces.par_iter().map(evaluate_one).collect();
    finish(results)
}

fn finish(results: Vec<ComplianceResult>) -> BatchReport {
    let report = BatchReport::new(results);
    tracing::info!(
        spaces_total = report.spaces_total,
        passed = report.passed,
        partial = report.partial,
        failed = report.failed,
        errors = report.errors,
        "Compliance evaluation complete"
    );
    report
}

/// Parse a JSON array of space records.
pub fn parse_spaces(json: &str) -> Result<Vec<Space>> {
    let spaces: Vec<Space> = serde_json::from_str(json)?;
    Ok(spaces)
}
