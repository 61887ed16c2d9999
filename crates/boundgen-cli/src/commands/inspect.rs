//! Schema inspection command

use crate::console::CLIConsole;
use boundgen_core::{BoundgenResult, Severity, classify, generate_record, load_schema};
use colored::*;
use std::path::Path;

/// Print each record's field classification, predicate tree and notices.
pub fn run(schema: &Path) -> BoundgenResult<()> {
    let console = CLIConsole::new(true);
    let document = load_schema(schema)?;

    for record in &document.records {
        console.print_header(&record.qualified_name());
        let generation = generate_record(record);

        for field in &record.fields {
            let classification = classify(&field.declared);
            let wrapped = if classification.wrapped { ", observable" } else { "" };
            console.print_field(
                &field.name,
                &format!("{} -> {}{}", field.declared, classification.kind, wrapped),
            );

            let validator = generation
                .validator
                .as_ref()
                .and_then(|v| v.field(&field.name));
            match validator {
                Some(validator) => {
                    console.print_detail(&format!("{} (all of)", validator.identity()));
                    for leaf in validator.leaves() {
                        console.print_detail(&format!("  {}: {}", leaf.identity(), leaf.constraint()));
                    }
                }
                None => console.print_detail("no validator"),
            }
        }

        match &generation.validator {
            Some(validator) => println!(
                "  {} {}",
                "record validator:".cyan(),
                validator.identity().bold()
            ),
            None => println!("  {}", "no record validator".dimmed()),
        }

        for notice in &generation.notices {
            match notice.severity() {
                Severity::Warning => console.warn(&notice.to_string()),
                Severity::Info => console.info(&notice.to_string()),
            }
        }
    }
    Ok(())
}
