//! Record instance check command

use super::load_record;
use crate::console::CLIConsole;
use boundgen_core::{BoundgenError, BoundgenResult, Validity, generate_record};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Validate the JSON instance in `instance` against `record` of `schema`.
///
/// Exit code 0 when valid, 1 when invalid, when an observable field holds no
/// value, or when validation faults.
pub fn run(schema: &Path, record: &str, instance: &Path, verbose: bool) -> anyhow::Result<ExitCode> {
    let console = CLIConsole::new(verbose);
    let outcome = check(schema, record, instance)?;

    let code = match outcome {
        CheckOutcome::Unconstrained => {
            console.success(&format!("{record}: no constrained fields, nothing to check"));
            ExitCode::SUCCESS
        }
        CheckOutcome::Checked(Ok(Validity::Valid)) => {
            console.success(&format!("{record}: valid"));
            ExitCode::SUCCESS
        }
        CheckOutcome::Checked(Ok(validity)) => {
            console.error(&format!("{record}: {validity}"));
            ExitCode::FAILURE
        }
        CheckOutcome::Checked(Err(fault)) => {
            console.error(&format!("{record}: validation fault: {fault}"));
            ExitCode::FAILURE
        }
    };
    Ok(code)
}

#[derive(Debug)]
enum CheckOutcome {
    Unconstrained,
    Checked(Result<Validity, boundgen_core::ValidationFault>),
}

fn check(schema: &Path, record: &str, instance: &Path) -> BoundgenResult<CheckOutcome> {
    let spec = load_record(schema, record)?;
    let generation = generate_record(&spec);
    for notice in &generation.notices {
        tracing::debug!("{}", notice);
    }

    let Some(validator) = generation.validator else {
        return Ok(CheckOutcome::Unconstrained);
    };

    let content = fs::read_to_string(instance).map_err(|e| {
        BoundgenError::io_with_path(
            format!("Failed to read record instance: {e}"),
            instance.display().to_string(),
        )
    })?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    Ok(CheckOutcome::Checked(validator.validate(&value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SCHEMA: &str = r#"{
        "records": [
            { "name": "User", "namespace": "app", "fields": [
                { "name": "age", "type": "Int", "annotations": [{ "min_int": 5 }, { "max_int": 10 }] },
                { "name": "nick", "type": "Observable<String>", "annotations": [{ "max_length": 4 }] }
            ] },
            { "name": "Plain", "fields": [ { "name": "x", "type": "String" } ] }
        ]
    }"#;

    fn outcome(record: &str, instance: &str) -> CheckOutcome {
        let temp_dir = TempDir::new().unwrap();
        let schema = temp_dir.path().join("schema.json");
        let file = temp_dir.path().join("instance.json");
        fs::write(&schema, SCHEMA).unwrap();
        fs::write(&file, instance).unwrap();
        check(&schema, record, &file).unwrap()
    }

    #[test]
    fn test_check_outcomes() {
        assert!(matches!(
            outcome("User", r#"{ "age": 7, "nick": "bob" }"#),
            CheckOutcome::Checked(Ok(Validity::Valid))
        ));
        assert!(matches!(
            outcome("app::User", r#"{ "age": 11, "nick": "bob" }"#),
            CheckOutcome::Checked(Ok(Validity::Invalid { .. }))
        ));
        assert!(matches!(
            outcome("User", r#"{ "age": 7, "nick": null }"#),
            CheckOutcome::Checked(Ok(Validity::NoValue { .. }))
        ));
        assert!(matches!(
            outcome("User", r#"{ "age": "seven", "nick": "bob" }"#),
            CheckOutcome::Checked(Err(_))
        ));
        assert!(matches!(outcome("Plain", "{}"), CheckOutcome::Unconstrained));
    }

    #[test]
    fn test_unknown_record() {
        let temp_dir = TempDir::new().unwrap();
        let schema = temp_dir.path().join("schema.json");
        fs::write(&schema, SCHEMA).unwrap();

        let err = check(&schema, "Nobody", Path::new("unused.json")).unwrap_err();
        assert_eq!(err.error_code(), "BOUNDGEN_SCHEMA");
    }
}
