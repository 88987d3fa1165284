//! Domain types used throughout the scorer and its front-ends.
//!
//! This module defines:
//!
//! - the categorical input enums (`Contract`, `InternetService`, `PaymentMethod`)
//! - the validated input record (`CustomerProfile`)
//! - scoring outputs (`Assessment`, `RiskTier`, `Contribution`)
//! - the export schema (`AssessmentFile`)

pub mod types;

pub use types::*;
