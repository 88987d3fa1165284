//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scoring
//! - exported to JSON
//! - reloaded later for re-rendering a saved assessment

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Contract type of the customer.
///
/// Serde names match the canonical dataset labels so exported JSON stays
/// compatible with the Telco churn schema; clap value names are the
/// flag-friendly kebab-case forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Contract {
    #[serde(rename = "Month-to-month")]
    #[value(name = "month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    #[value(name = "one-year")]
    OneYear,
    #[serde(rename = "Two year")]
    #[value(name = "two-year")]
    TwoYear,
}

impl Contract {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Contract::MonthToMonth => "Month-to-month",
            Contract::OneYear => "One year",
            Contract::TwoYear => "Two year",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Contract::MonthToMonth => Contract::OneYear,
            Contract::OneYear => Contract::TwoYear,
            Contract::TwoYear => Contract::MonthToMonth,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Contract::MonthToMonth => Contract::TwoYear,
            Contract::OneYear => Contract::MonthToMonth,
            Contract::TwoYear => Contract::OneYear,
        }
    }
}

/// Internet service subscribed by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum InternetService {
    #[serde(rename = "DSL")]
    #[value(name = "dsl")]
    Dsl,
    #[serde(rename = "Fiber optic")]
    #[value(name = "fiber-optic")]
    FiberOptic,
    #[serde(rename = "No")]
    #[value(name = "no")]
    No,
}

impl InternetService {
    pub fn display_name(self) -> &'static str {
        match self {
            InternetService::Dsl => "DSL",
            InternetService::FiberOptic => "Fiber optic",
            InternetService::No => "No",
        }
    }

    pub fn next(self) -> Self {
        match self {
            InternetService::Dsl => InternetService::FiberOptic,
            InternetService::FiberOptic => InternetService::No,
            InternetService::No => InternetService::Dsl,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            InternetService::Dsl => InternetService::No,
            InternetService::FiberOptic => InternetService::Dsl,
            InternetService::No => InternetService::FiberOptic,
        }
    }
}

/// Payment method on file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PaymentMethod {
    #[serde(rename = "Electronic check")]
    #[value(name = "electronic-check")]
    ElectronicCheck,
    #[serde(rename = "Mailed check")]
    #[value(name = "mailed-check")]
    MailedCheck,
    #[serde(rename = "Bank transfer (automatic)")]
    #[value(name = "bank-transfer")]
    BankTransfer,
    #[serde(rename = "Credit card (automatic)")]
    #[value(name = "credit-card")]
    CreditCard,
}

impl PaymentMethod {
    pub fn display_name(self) -> &'static str {
        match self {
            PaymentMethod::ElectronicCheck => "Electronic check",
            PaymentMethod::MailedCheck => "Mailed check",
            PaymentMethod::BankTransfer => "Bank transfer (automatic)",
            PaymentMethod::CreditCard => "Credit card (automatic)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            PaymentMethod::ElectronicCheck => PaymentMethod::MailedCheck,
            PaymentMethod::MailedCheck => PaymentMethod::BankTransfer,
            PaymentMethod::BankTransfer => PaymentMethod::CreditCard,
            PaymentMethod::CreditCard => PaymentMethod::ElectronicCheck,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PaymentMethod::ElectronicCheck => PaymentMethod::CreditCard,
            PaymentMethod::MailedCheck => PaymentMethod::ElectronicCheck,
            PaymentMethod::BankTransfer => PaymentMethod::MailedCheck,
            PaymentMethod::CreditCard => PaymentMethod::BankTransfer,
        }
    }
}

/// Valid tenure range (months) accepted at the input boundary.
pub const TENURE_MIN: u32 = 1;
pub const TENURE_MAX: u32 = 72;

/// Valid monthly-charges range ($) accepted at the input boundary.
pub const CHARGES_MIN: f64 = 18.25;
pub const CHARGES_MAX: f64 = 118.75;

/// One customer record as understood by the scorer.
///
/// Constructed once per evaluation; the scorer never mutates it. Range and
/// enum validation happens at the boundary (clap parsers, TUI widgets,
/// `validate`), so downstream code can assume a well-formed profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub contract: Contract,
    pub tenure_months: u32,
    pub internet: InternetService,
    pub monthly_charges: f64,
    pub payment: PaymentMethod,
}

impl CustomerProfile {
    /// Reject out-of-range scalar fields.
    ///
    /// The categorical fields are enums and cannot hold out-of-domain values.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(TENURE_MIN..=TENURE_MAX).contains(&self.tenure_months) {
            return Err(AppError::new(
                2,
                format!(
                    "tenure must be in [{TENURE_MIN}, {TENURE_MAX}] months, got {}",
                    self.tenure_months
                ),
            ));
        }
        if !self.monthly_charges.is_finite()
            || self.monthly_charges < CHARGES_MIN
            || self.monthly_charges > CHARGES_MAX
        {
            return Err(AppError::new(
                2,
                format!(
                    "monthly charges must be in [{CHARGES_MIN}, {CHARGES_MAX}], got {}",
                    self.monthly_charges
                ),
            ));
        }
        Ok(())
    }
}

impl Default for CustomerProfile {
    /// Defaults mirror the dashboard's initial widget values.
    fn default() -> Self {
        Self {
            contract: Contract::MonthToMonth,
            tenure_months: 12,
            internet: InternetService::FiberOptic,
            monthly_charges: 75.00,
            payment: PaymentMethod::ElectronicCheck,
        }
    }
}

/// Coarse risk bucket derived from the rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    High,
    Critical,
}

impl RiskTier {
    /// Thresholds: `>= 70` CRITICAL, `>= 40` HIGH, else LOW.
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 70 {
            RiskTier::Critical
        } else if percentage >= 40 {
            RiskTier::High
        } else {
            RiskTier::Low
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::High => "HIGH",
            RiskTier::Critical => "CRITICAL",
        }
    }

    /// Retention guidance shown next to the score.
    pub fn message(self) -> &'static str {
        match self {
            RiskTier::Critical => "Risk is very high. Launch a retention campaign immediately.",
            RiskTier::High => "Risk is moderate. Targeted offers may still turn this around.",
            RiskTier::Low => "Customer looks stable. Keep monitoring.",
        }
    }
}

/// Scoring output for one profile.
///
/// A value type: recomputed on every evaluation, never stored between
/// interactions (exports are explicit, user-requested snapshots).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Churn probability in the open interval (0, 1).
    pub probability: f64,
    /// `probability * 100`, rounded half-to-even.
    pub percentage: u32,
    pub tier: RiskTier,
}

/// One coefficient that fired for a profile (reporting only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub name: String,
    pub weight: f64,
}

/// A saved assessment file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentFile {
    pub tool: String,
    pub asof_date: NaiveDate,
    pub profile: CustomerProfile,
    pub linear_score: f64,
    pub assessment: Assessment,
    pub contributions: Vec<Contribution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_full_ranges() {
        let mut p = CustomerProfile::default();
        for tenure in [TENURE_MIN, 12, 59, 60, TENURE_MAX] {
            p.tenure_months = tenure;
            assert!(p.validate().is_ok(), "tenure {tenure} should be valid");
        }
        for charges in [CHARGES_MIN, 50.0, 85.0, CHARGES_MAX] {
            p.tenure_months = 12;
            p.monthly_charges = charges;
            assert!(p.validate().is_ok(), "charges {charges} should be valid");
        }
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let mut p = CustomerProfile::default();
        p.tenure_months = 0;
        assert!(p.validate().is_err());
        p.tenure_months = 73;
        assert!(p.validate().is_err());

        p = CustomerProfile::default();
        p.monthly_charges = 18.24;
        assert!(p.validate().is_err());
        p.monthly_charges = 118.76;
        assert!(p.validate().is_err());
        p.monthly_charges = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(RiskTier::from_percentage(0), RiskTier::Low);
        assert_eq!(RiskTier::from_percentage(39), RiskTier::Low);
        assert_eq!(RiskTier::from_percentage(40), RiskTier::High);
        assert_eq!(RiskTier::from_percentage(69), RiskTier::High);
        assert_eq!(RiskTier::from_percentage(70), RiskTier::Critical);
        assert_eq!(RiskTier::from_percentage(100), RiskTier::Critical);
    }

    #[test]
    fn enum_cycles_cover_all_variants() {
        let mut c = Contract::MonthToMonth;
        for _ in 0..3 {
            assert_eq!(c.prev().next(), c);
            c = c.next();
        }
        assert_eq!(c, Contract::MonthToMonth);

        let mut m = PaymentMethod::ElectronicCheck;
        for _ in 0..4 {
            assert_eq!(m.prev().next(), m);
            m = m.next();
        }
        assert_eq!(m, PaymentMethod::ElectronicCheck);
    }

    #[test]
    fn serde_uses_canonical_labels() {
        let json = serde_json::to_string(&InternetService::FiberOptic).unwrap();
        assert_eq!(json, "\"Fiber optic\"");

        let back: PaymentMethod =
            serde_json::from_str("\"Bank transfer (automatic)\"").unwrap();
        assert_eq!(back, PaymentMethod::BankTransfer);

        let tier = serde_json::to_string(&RiskTier::Critical).unwrap();
        assert_eq!(tier, "\"CRITICAL\"");
    }
}
