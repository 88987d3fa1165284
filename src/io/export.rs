//! Read/write assessment JSON files.
//!
//! Assessment JSON is the "portable" representation of one scored profile:
//! - the input profile (canonical dataset labels)
//! - the linear score and the coefficients that fired
//! - probability, percentage, and risk tier
//!
//! The schema is defined by `domain::AssessmentFile`.

use std::fs::File;
use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::domain::AssessmentFile;
use crate::error::AppError;

/// Write an assessment JSON file.
pub fn write_assessment_json(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create assessment JSON '{}': {e}", path.display()),
        )
    })?;

    let record = AssessmentFile {
        tool: "churn".to_string(),
        asof_date: chrono::Local::now().date_naive(),
        profile: run.profile,
        linear_score: run.linear_score,
        assessment: run.assessment,
        contributions: run.contributions.clone(),
    };

    serde_json::to_writer_pretty(file, &record)
        .map_err(|e| AppError::new(2, format!("Failed to write assessment JSON: {e}")))?;

    Ok(())
}

/// Read an assessment JSON file.
pub fn read_assessment_json(path: &Path) -> Result<AssessmentFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open assessment JSON '{}': {e}", path.display()),
        )
    })?;
    let record: AssessmentFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid assessment JSON: {e}")))?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_assessment;
    use crate::domain::CustomerProfile;

    #[test]
    fn assessment_json_round_trip() {
        let run = run_assessment(&CustomerProfile::default()).unwrap();

        let path = std::env::temp_dir().join(format!(
            "churn-assessment-test-{}.json",
            std::process::id()
        ));
        write_assessment_json(&path, &run).unwrap();
        let back = read_assessment_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back.tool, "churn");
        assert_eq!(back.profile, run.profile);
        assert_eq!(back.assessment, run.assessment);
        assert!((back.linear_score - run.linear_score).abs() < 1e-12);
        assert_eq!(back.contributions, run.contributions);
    }

    #[test]
    fn read_missing_file_is_an_input_error() {
        let err = read_assessment_json(Path::new("/nonexistent/churn.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
