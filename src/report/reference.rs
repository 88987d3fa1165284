//! Static reference data shown alongside the score.
//!
//! Both tables are literal constants rendered verbatim: they are not derived
//! from the coefficient table or from any profile, and they never change
//! between invocations.

/// Qualitative impact marker for a feature-importance row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactMarker {
    Red,
    Amber,
    Green,
}

impl ImpactMarker {
    /// Plain-text label for non-TUI output.
    pub fn label(self) -> &'static str {
        match self {
            ImpactMarker::Red => "red",
            ImpactMarker::Amber => "amber",
            ImpactMarker::Green => "green",
        }
    }
}

/// One feature-importance row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureInsight {
    pub name: &'static str,
    pub effect: &'static str,
    pub marker: ImpactMarker,
}

/// The key churn drivers, ordered by impact.
pub const FEATURE_INSIGHTS: [FeatureInsight; 5] = [
    FeatureInsight {
        name: "Contract (Month-to-month)",
        effect: "Strongest churn signal",
        marker: ImpactMarker::Red,
    },
    FeatureInsight {
        name: "Low tenure (< 12 months)",
        effect: "High risk of leaving",
        marker: ImpactMarker::Red,
    },
    FeatureInsight {
        name: "Fiber optic internet",
        effect: "Needs attention",
        marker: ImpactMarker::Amber,
    },
    FeatureInsight {
        name: "Electronic check payment",
        effect: "Added risk",
        marker: ImpactMarker::Amber,
    },
    FeatureInsight {
        name: "Two-year contract",
        effect: "Retention anchor",
        marker: ImpactMarker::Green,
    },
];

/// One row of the model comparison table (metrics on testing data).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelComparisonRow {
    pub model: &'static str,
    pub accuracy: &'static str,
    pub recall: &'static str,
    pub precision: &'static str,
    pub complexity: &'static str,
}

/// Random Forest vs. the deployed Logistic Regression.
pub const MODEL_COMPARISON: [ModelComparisonRow; 2] = [
    ModelComparisonRow {
        model: "Random Forest (RF)",
        accuracy: "79%",
        recall: "71%",
        precision: "62%",
        complexity: "High (slow deployment)",
    },
    ModelComparisonRow {
        model: "Logistic Regression (LR)",
        accuracy: "75%",
        recall: "76%",
        precision: "61%",
        complexity: "Low (fast deployment)",
    },
];

/// Why Logistic Regression was deployed despite the lower accuracy.
pub const DECISION_NOTE: &str = "Logistic Regression was chosen for its 76% recall: in retention \
work, catching a customer who is about to leave matters more than correctly predicting the \
stable ones, even at the cost of a few accuracy points.";

/// Retention cut-off shown under the gauge.
pub const RETENTION_THRESHOLD_NOTE: &str =
    "Customers are considered retained while probability < 50%.";
