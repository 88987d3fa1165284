//! Command-line parsing for the churn risk analyzer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the scoring code. Range and enum validation lives here, at the
//! boundary: by the time a `CustomerProfile` reaches the scorer it is well-formed.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{
    CHARGES_MAX, CHARGES_MIN, Contract, InternetService, PaymentMethod, TENURE_MAX, TENURE_MIN,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "churn", version, about = "Telco Customer Churn Risk Analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one customer profile and print the assessment.
    Score(ScoreArgs),
    /// Launch the interactive TUI dashboard.
    ///
    /// This uses the same underlying scoring pipeline as `churn score`, but
    /// renders results in a terminal UI using Ratatui.
    Tui(ScoreArgs),
    /// Re-render a previously exported assessment JSON.
    Show(ShowArgs),
    /// Print only the static reference tables (drivers + model comparison).
    Tables,
}

/// Customer attributes for scoring (shared by `score` and `tui`).
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    /// Contract type.
    #[arg(short = 'c', long, value_enum, default_value = "month-to-month")]
    pub contract: Contract,

    /// Tenure in months.
    #[arg(short = 't', long, value_parser = clap::value_parser!(u32).range(TENURE_MIN as i64..=TENURE_MAX as i64), default_value_t = 12)]
    pub tenure: u32,

    /// Internet service.
    #[arg(short = 'i', long, value_enum, default_value = "fiber-optic")]
    pub internet: InternetService,

    /// Monthly charges in dollars.
    #[arg(short = 'm', long, value_parser = parse_charges, default_value_t = 75.00)]
    pub charges: f64,

    /// Payment method.
    #[arg(short = 'p', long, value_enum, default_value = "electronic-check")]
    pub payment: PaymentMethod,

    /// Export the assessment to a JSON file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Skip the static reference tables in the printed report.
    #[arg(long)]
    pub no_tables: bool,
}

/// Options for re-rendering a saved assessment.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Assessment JSON file produced by `churn score --export`.
    #[arg(long, value_name = "JSON")]
    pub file: PathBuf,
}

fn parse_charges(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .parse()
        .map_err(|e| format!("invalid monthly charges '{s}': {e}"))?;
    if !(CHARGES_MIN..=CHARGES_MAX).contains(&v) {
        return Err(format!(
            "monthly charges must be in [{CHARGES_MIN}, {CHARGES_MAX}], got {v}"
        ));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_args_parse_enum_labels() {
        let cli = Cli::try_parse_from([
            "churn",
            "score",
            "--contract",
            "two-year",
            "--tenure",
            "60",
            "--internet",
            "dsl",
            "--charges",
            "50.00",
            "--payment",
            "credit-card",
        ])
        .unwrap();

        let Command::Score(args) = cli.command else {
            panic!("expected score subcommand");
        };
        assert_eq!(args.contract, Contract::TwoYear);
        assert_eq!(args.tenure, 60);
        assert_eq!(args.internet, InternetService::Dsl);
        assert!((args.charges - 50.00).abs() < 1e-12);
        assert_eq!(args.payment, PaymentMethod::CreditCard);
    }

    #[test]
    fn defaults_match_dashboard_initial_values() {
        let cli = Cli::try_parse_from(["churn", "score"]).unwrap();
        let Command::Score(args) = cli.command else {
            panic!("expected score subcommand");
        };
        assert_eq!(args.contract, Contract::MonthToMonth);
        assert_eq!(args.tenure, 12);
        assert_eq!(args.internet, InternetService::FiberOptic);
        assert!((args.charges - 75.00).abs() < 1e-12);
        assert_eq!(args.payment, PaymentMethod::ElectronicCheck);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(Cli::try_parse_from(["churn", "score", "--tenure", "0"]).is_err());
        assert!(Cli::try_parse_from(["churn", "score", "--tenure", "73"]).is_err());
        assert!(Cli::try_parse_from(["churn", "score", "--charges", "18.24"]).is_err());
        assert!(Cli::try_parse_from(["churn", "score", "--charges", "118.76"]).is_err());
        assert!(Cli::try_parse_from(["churn", "score", "--contract", "weekly"]).is_err());
    }

    #[test]
    fn boundary_values_are_accepted() {
        assert!(Cli::try_parse_from(["churn", "score", "--tenure", "1"]).is_ok());
        assert!(Cli::try_parse_from(["churn", "score", "--tenure", "72"]).is_ok());
        assert!(Cli::try_parse_from(["churn", "score", "--charges", "18.25"]).is_ok());
        assert!(Cli::try_parse_from(["churn", "score", "--charges", "118.75"]).is_ok());
    }
}
