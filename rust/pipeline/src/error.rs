// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading input or exporting reports.
///
/// Per-space evaluation faults never surface here; the batch converts
/// them into ERROR-status results so one bad space cannot abort a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse space records: {0}")]
    Parse(#[from] serde_json::Error),
}
