//! Simulated logistic-regression coefficients.
//!
//! These weights were chosen to reflect the drivers a recall-focused Telco
//! churn model surfaces. They are process-wide constants: nothing is added,
//! removed, or mutated at runtime, so no synchronization is needed.

/// Indicator weights plus the intercept.
///
/// Each field corresponds to one named predicate over the profile; a predicate
/// that does not hold contributes nothing to the linear score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub intercept: f64,
    pub contract_month_to_month: f64,
    pub contract_two_year: f64,
    pub tenure_low: f64,
    pub tenure_high: f64,
    pub internet_fiber_optic: f64,
    pub monthly_charges_high: f64,
    pub payment_electronic_check: f64,
}

/// The fitted (simulated) coefficient table.
pub const CHURN_COEFFICIENTS: Coefficients = Coefficients {
    intercept: -1.8,
    contract_month_to_month: 1.5,
    contract_two_year: -1.2,
    tenure_low: 0.8,
    tenure_high: -1.0,
    internet_fiber_optic: 1.1,
    monthly_charges_high: 0.4,
    payment_electronic_check: 0.6,
};

/// Tenure at or below this (months) counts as low tenure.
pub const TENURE_LOW_MAX: u32 = 12;

/// Tenure at or above this (months) counts as high tenure.
pub const TENURE_HIGH_MIN: u32 = 60;

/// Monthly charges at or above this ($) count as high charges.
pub const CHARGES_HIGH_MIN: f64 = 85.0;
