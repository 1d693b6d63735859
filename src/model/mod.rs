//! Report model types.
//!
//! This module defines the in-memory report that the exporters consume:
//! a summary with optional highlights and metrics, an optional analysis
//! block, the active spreadsheet, a chart series, and a list of actions.
//! Optional sections are `Option`s; an absent or empty section is skipped
//! by every renderer.

mod analysis;
mod report;
mod sheet;

pub use analysis::{Analysis, Attribution, PlanStep};
pub use report::{Metric, Report};
pub use sheet::{Chart, Spreadsheet};
