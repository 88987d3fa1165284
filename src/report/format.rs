//! Formatted terminal output for `churn score`, `churn show`, and `churn tables`.

use crate::domain::{Assessment, Contribution, CustomerProfile};
use crate::report::reference::{
    DECISION_NOTE, FEATURE_INSIGHTS, MODEL_COMPARISON, RETENTION_THRESHOLD_NOTE,
};

/// Format the assessment summary (profile + probability + tier + guidance).
pub fn format_assessment(profile: &CustomerProfile, assessment: &Assessment) -> String {
    let mut out = String::new();

    out.push_str("=== churn - Telco Churn Risk Assessment ===\n");
    out.push_str(&format!("Contract: {}\n", profile.contract.display_name()));
    out.push_str(&format!("Tenure: {} months\n", profile.tenure_months));
    out.push_str(&format!("Internet: {}\n", profile.internet.display_name()));
    out.push_str(&format!("Monthly charges: ${:.2}\n", profile.monthly_charges));
    out.push_str(&format!("Payment: {}\n", profile.payment.display_name()));

    out.push_str(&format!(
        "\nChurn probability: {:.4} ({}%)\n",
        assessment.probability, assessment.percentage
    ));
    out.push_str(&format!("Risk tier: {}\n", assessment.tier.display_name()));
    out.push_str(&format!("{}\n", assessment.tier.message()));
    out.push_str(&format!("{RETENTION_THRESHOLD_NOTE}\n"));

    out
}

/// Format the active coefficient contributions and their total.
pub fn format_contributions(contributions: &[Contribution], linear_score: f64) -> String {
    let mut out = String::new();

    out.push_str("Active coefficients:\n");
    for c in contributions {
        out.push_str(&format!("  {:<32} {:>+6.2}\n", c.name, c.weight));
    }
    out.push_str(&format!("  {:<32} {:>+6.2}\n", "= linear score", linear_score));

    out
}

/// Format the static feature-importance table.
pub fn format_insights() -> String {
    let mut out = String::new();

    out.push_str("Key churn drivers:\n");
    out.push_str(&format!("{:<28} {:<24} {:<6}\n", "feature", "impact", "marker"));
    out.push_str(&format!("{:-<28} {:-<24} {:-<6}\n", "", "", ""));
    for row in &FEATURE_INSIGHTS {
        out.push_str(&format!(
            "{:<28} {:<24} {:<6}\n",
            row.name,
            row.effect,
            row.marker.label()
        ));
    }

    out
}

/// Format the static RF vs LR comparison table plus the deployment note.
pub fn format_performance() -> String {
    let mut out = String::new();

    out.push_str("Model evaluation summary (testing data):\n");
    out.push_str(&format!(
        "{:<26} {:>9} {:>7} {:>10} {:<24}\n",
        "model", "accuracy", "recall", "precision", "complexity"
    ));
    out.push_str(&format!(
        "{:-<26} {:-<9} {:-<7} {:-<10} {:-<24}\n",
        "", "", "", "", ""
    ));
    for row in &MODEL_COMPARISON {
        out.push_str(&format!(
            "{:<26} {:>9} {:>7} {:>10} {:<24}\n",
            row.model, row.accuracy, row.recall, row.precision, row.complexity
        ));
    }
    out.push('\n');
    out.push_str(DECISION_NOTE);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskTier;
    use crate::model::{CHURN_COEFFICIENTS, assess, contributions, linear_score};

    #[test]
    fn assessment_summary_mentions_tier_and_percentage() {
        let profile = CustomerProfile::default();
        let a = assess(&profile, &CHURN_COEFFICIENTS);
        let text = format_assessment(&profile, &a);

        assert!(text.contains(a.tier.display_name()));
        assert!(text.contains(&format!("{}%", a.percentage)));
        assert!(text.contains("Month-to-month"));
    }

    #[test]
    fn contribution_table_ends_with_total() {
        let profile = CustomerProfile::default();
        let c = contributions(&profile, &CHURN_COEFFICIENTS);
        let ls = linear_score(&profile, &CHURN_COEFFICIENTS);
        let text = format_contributions(&c, ls);

        assert!(text.contains("Intercept"));
        assert!(text.contains("= linear score"));
        assert!(text.contains(&format!("{ls:+.2}")));
    }

    #[test]
    fn reference_tables_are_profile_independent() {
        // The static tables never vary, whatever was scored before.
        let first_insights = format_insights();
        let first_perf = format_performance();

        let mut profile = CustomerProfile::default();
        profile.contract = crate::domain::Contract::TwoYear;
        profile.tenure_months = 60;
        let _ = assess(&profile, &CHURN_COEFFICIENTS);

        assert_eq!(format_insights(), first_insights);
        assert_eq!(format_performance(), first_perf);
    }

    #[test]
    fn insights_table_has_five_rows() {
        let text = format_insights();
        // header + separator + 5 data rows
        assert_eq!(text.trim_end().lines().count(), 8);
        assert!(text.contains("Two-year contract"));
    }

    #[test]
    fn performance_table_has_two_model_rows() {
        let text = format_performance();
        assert!(text.contains("Random Forest (RF)"));
        assert!(text.contains("Logistic Regression (LR)"));
        assert!(text.contains("76%"));
    }

    #[test]
    fn tier_messages_are_distinct() {
        let msgs = [
            RiskTier::Low.message(),
            RiskTier::High.message(),
            RiskTier::Critical.message(),
        ];
        assert_ne!(msgs[0], msgs[1]);
        assert_ne!(msgs[1], msgs[2]);
    }
}
