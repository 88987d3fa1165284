//! Reporting: static reference tables and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the scoring code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;
pub mod reference;

pub use format::{format_assessment, format_contributions, format_insights, format_performance};
