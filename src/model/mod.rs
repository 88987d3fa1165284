//! The churn model: a fixed coefficient table plus a pure scoring function.
//!
//! There is no training or loading step. The "model" is a simulated logistic
//! regression: a process-wide constant table of indicator weights, applied to
//! a profile and squashed through the sigmoid.

pub mod coefficients;
pub mod scorer;

pub use coefficients::{CHURN_COEFFICIENTS, Coefficients};
pub use scorer::{assess, contributions, linear_score, score};
