//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the scoring pipeline
//! - prints reports
//! - writes optional exports
//! - launches the TUI dashboard

use clap::Parser;

use crate::cli::{Command, ScoreArgs, ShowArgs};
use crate::domain::CustomerProfile;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `churn` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `churn` and `churn -c two-year` to behave like `churn tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the dashboard-first UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Score(args) => handle_score(args),
        Command::Tui(args) => handle_tui(args),
        Command::Show(args) => handle_show(args),
        Command::Tables => handle_tables(),
    }
}

pub fn profile_from_args(args: &ScoreArgs) -> CustomerProfile {
    CustomerProfile {
        contract: args.contract,
        tenure_months: args.tenure,
        internet: args.internet,
        monthly_charges: args.charges,
        payment: args.payment,
    }
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let profile = profile_from_args(&args);
    let run = pipeline::run_assessment(&profile)?;

    println!("{}", crate::report::format_assessment(&run.profile, &run.assessment));
    println!(
        "{}",
        crate::report::format_contributions(&run.contributions, run.linear_score)
    );

    if !args.no_tables {
        println!("{}", crate::report::format_insights());
        println!("{}", crate::report::format_performance());
    }

    if let Some(path) = &args.export {
        crate::io::export::write_assessment_json(path, &run)?;
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let saved = crate::io::export::read_assessment_json(&args.file)?;

    println!("As-of: {}", saved.asof_date);
    println!(
        "{}",
        crate::report::format_assessment(&saved.profile, &saved.assessment)
    );
    println!(
        "{}",
        crate::report::format_contributions(&saved.contributions, saved.linear_score)
    );

    Ok(())
}

fn handle_tables() -> Result<(), AppError> {
    println!("{}", crate::report::format_insights());
    println!("{}", crate::report::format_performance());
    Ok(())
}

fn handle_tui(args: ScoreArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

/// Rewrite argv so `churn` defaults to `churn tui`.
///
/// Rules:
/// - `churn`                      -> `churn tui`
/// - `churn -c two-year ...`      -> `churn tui -c two-year ...`
/// - `churn --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "score" | "tui" | "show" | "tables");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["churn"])), argv(&["churn", "tui"]));
    }

    #[test]
    fn leading_flags_route_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["churn", "-c", "two-year"])),
            argv(&["churn", "tui", "-c", "two-year"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["churn", "score", "-t", "12"])),
            argv(&["churn", "score", "-t", "12"])
        );
        assert_eq!(rewrite_args(argv(&["churn", "--help"])), argv(&["churn", "--help"]));
    }
}
