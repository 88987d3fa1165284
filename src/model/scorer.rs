//! The churn scorer.
//!
//! Three primitive operations, all pure and deterministic:
//! - accumulate the linear score for a profile (for reporting/plots)
//! - map it through the sigmoid to a probability (for the gauge)
//! - derive the rounded percentage and risk tier (for display)
//!
//! The tenure and contract branches are deliberately mutually exclusive
//! if/else-if chains: a tenure of exactly 12 fires only the low-tenure weight,
//! and a month-to-month contract never also picks up the two-year weight.

use crate::domain::{Assessment, Contract, Contribution, CustomerProfile, InternetService,
                    PaymentMethod, RiskTier};
use crate::math::{round_half_even, sigmoid};

use super::coefficients::{CHARGES_HIGH_MIN, Coefficients, TENURE_HIGH_MIN, TENURE_LOW_MAX};

/// Accumulate the pre-sigmoid linear score for a profile.
pub fn linear_score(profile: &CustomerProfile, coef: &Coefficients) -> f64 {
    let mut score = coef.intercept;

    if profile.contract == Contract::MonthToMonth {
        score += coef.contract_month_to_month;
    } else if profile.contract == Contract::TwoYear {
        score += coef.contract_two_year;
    }

    if profile.tenure_months <= TENURE_LOW_MAX {
        score += coef.tenure_low;
    } else if profile.tenure_months >= TENURE_HIGH_MIN {
        score += coef.tenure_high;
    }

    if profile.internet == InternetService::FiberOptic {
        score += coef.internet_fiber_optic;
    }

    if profile.monthly_charges >= CHARGES_HIGH_MIN {
        score += coef.monthly_charges_high;
    }

    if profile.payment == PaymentMethod::ElectronicCheck {
        score += coef.payment_electronic_check;
    }

    score
}

/// Churn probability in (0, 1) for a profile.
pub fn score(profile: &CustomerProfile, coef: &Coefficients) -> f64 {
    sigmoid(linear_score(profile, coef))
}

/// Full assessment: probability, rounded percentage, and risk tier.
pub fn assess(profile: &CustomerProfile, coef: &Coefficients) -> Assessment {
    let probability = score(profile, coef);
    let percentage = round_half_even(probability * 100.0);
    Assessment {
        probability,
        percentage,
        tier: RiskTier::from_percentage(percentage),
    }
}

/// List the coefficients that fired for a profile, intercept first.
///
/// Reporting only; the sum of the listed weights equals `linear_score`.
pub fn contributions(profile: &CustomerProfile, coef: &Coefficients) -> Vec<Contribution> {
    let mut out = vec![Contribution {
        name: "Intercept".to_string(),
        weight: coef.intercept,
    }];

    if profile.contract == Contract::MonthToMonth {
        out.push(Contribution {
            name: "Contract_Month-to-month".to_string(),
            weight: coef.contract_month_to_month,
        });
    } else if profile.contract == Contract::TwoYear {
        out.push(Contribution {
            name: "Contract_Two year".to_string(),
            weight: coef.contract_two_year,
        });
    }

    if profile.tenure_months <= TENURE_LOW_MAX {
        out.push(Contribution {
            name: "Tenure_Low".to_string(),
            weight: coef.tenure_low,
        });
    } else if profile.tenure_months >= TENURE_HIGH_MIN {
        out.push(Contribution {
            name: "Tenure_High".to_string(),
            weight: coef.tenure_high,
        });
    }

    if profile.internet == InternetService::FiberOptic {
        out.push(Contribution {
            name: "InternetService_Fiber optic".to_string(),
            weight: coef.internet_fiber_optic,
        });
    }

    if profile.monthly_charges >= CHARGES_HIGH_MIN {
        out.push(Contribution {
            name: "MonthlyCharges_High".to_string(),
            weight: coef.monthly_charges_high,
        });
    }

    if profile.payment == PaymentMethod::ElectronicCheck {
        out.push(Contribution {
            name: "PaymentMethod_Electronic check".to_string(),
            weight: coef.payment_electronic_check,
        });
    }

    out
}
