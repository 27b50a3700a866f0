// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Report rendering.
//!
//! Two outputs from the same [`BatchReport`]: a plain-text report for
//! terminals and a pretty-printed JSON export for downstream tooling.

use crate::batch::BatchReport;
use crate::error::Result;
use std::fmt::Write;
use tillsyn_rules::{ComplianceResult, RuleStatus};

/// One-character marker per rule verdict, used in the text report.
fn status_icon(status: RuleStatus) -> char {
    match status {
        RuleStatus::Pass => '✓',
        RuleStatus::Fail => '✗',
        RuleStatus::NotApplicable => '-',
        RuleStatus::NotChecked => '?',
        RuleStatus::Error => '!',
    }
}

/// Render a batch report as plain text.
///
/// NOT_APPLICABLE rows are always omitted; they carry no information a
/// reader acts on. With `failures_only`, fully passing spaces and
/// passing rule rows are omitted as well.
pub fn render_text(report: &BatchReport, failures_only: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} Accessibility Compliance Report", report.standard);
    let _ = writeln!(
        out,
        "Generated: {}",
        report.generated.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        out,
        "Spaces: {} total | {} pass | {} partial | {} fail | {} error",
        report.spaces_total, report.passed, report.partial, report.failed, report.errors
    );

    for result in &report.results {
        if failures_only && matches_pass(result) {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "[{}] {} '{}' ({})",
            result.overall_status, result.space_id, result.space_name, result.space_type
        );

        if let Some(message) = &result.error {
            let _ = writeln!(out, "  ! evaluation failed: {message}");
            continue;
        }

        for rule in &result.rules_checked {
            if rule.status == RuleStatus::NotApplicable {
                continue;
            }
            if failures_only && rule.status == RuleStatus::Pass {
                continue;
            }
            let _ = writeln!(
                out,
                "  {} {} {} [{}]",
                status_icon(rule.status),
                rule.rule_id,
                rule.rule_name,
                rule.severity
            );
            let _ = writeln!(out, "      {}", rule.details);
        }
    }

    out
}

fn matches_pass(result: &ComplianceResult) -> bool {
    result.overall_status == tillsyn_rules::OverallStatus::Pass
}

/// Export a batch report as pretty-printed JSON.
pub fn render_json(report: &BatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
