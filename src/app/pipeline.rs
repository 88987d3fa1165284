//! Shared scoring pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> linear score -> probability -> percentage/tier -> contributions
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::domain::{Assessment, Contribution, CustomerProfile};
use crate::error::AppError;
use crate::model::{CHURN_COEFFICIENTS, assess, contributions, linear_score};

/// All computed outputs of a single scoring run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub profile: CustomerProfile,
    pub linear_score: f64,
    pub assessment: Assessment,
    pub contributions: Vec<Contribution>,
}

/// Validate the profile and compute the full assessment.
pub fn run_assessment(profile: &CustomerProfile) -> Result<RunOutput, AppError> {
    profile.validate()?;

    Ok(RunOutput {
        profile: *profile,
        linear_score: linear_score(profile, &CHURN_COEFFICIENTS),
        assessment: assess(profile, &CHURN_COEFFICIENTS),
        contributions: contributions(profile, &CHURN_COEFFICIENTS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_assessment_rejects_invalid_profile() {
        let mut profile = CustomerProfile::default();
        profile.tenure_months = 0;
        let err = run_assessment(&profile).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn run_assessment_is_consistent() {
        let run = run_assessment(&CustomerProfile::default()).unwrap();
        let sum: f64 = run.contributions.iter().map(|c| c.weight).sum();
        assert!((sum - run.linear_score).abs() < 1e-12);
        assert!(run.assessment.probability > 0.0 && run.assessment.probability < 1.0);
    }
}
