// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for rule evaluation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort evaluation of a space.
///
/// Raised only for caller-contract violations (a space record the
/// extractor should never have produced). Data absence and malformed
/// geometry are never errors here; they become rule verdicts.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid space record: {0}")]
    InvalidSpace(#[from] tillsyn_model::Error),
}
