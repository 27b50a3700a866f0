// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the space-validation boundary.
///
/// These indicate a contract violation by the upstream extractor, not a
/// property of the building, and are surfaced loudly rather than folded
/// into a compliance verdict.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Space record missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid attribute value for '{key}': {reason}")]
    InvalidAttribute { key: String, reason: String },
}
