//! Scalar math helpers for the scorer.

pub mod logistic;

pub use logistic::{round_half_even, sigmoid};
