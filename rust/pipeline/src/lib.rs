// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch compliance pipeline.
//!
//! Glues the geometry feasibility checker and the rule evaluator into a
//! single pass over a set of extracted space records, and renders the
//! outcome as a text report or a JSON export.
//!
//! ```
//! use tillsyn_pipeline::{evaluate_spaces, render_text};
//!
//! let spaces = tillsyn_pipeline::parse_spaces(
//!     r#"[{"id": "s1", "name": "WC", "type": "wc",
//!          "boundary": [[0, 0], [2400, 0], [2400, 2400], [0, 2400]]}]"#,
//! )
//! .unwrap();
//! let report = evaluate_spaces(&spaces);
//! println!("{}", render_text(&report, false));
//! ```

pub mod batch;
pub mod error;
pub mod report;

pub use batch::{
    evaluate_one, evaluate_spaces, evaluate_spaces_parallel, parse_spaces, BatchReport, STANDARD,
};
pub use error::{Error, Result};
pub use report::{render_json, render_text};
