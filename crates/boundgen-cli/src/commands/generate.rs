//! Validator generation command

use crate::console::CLIConsole;
use boundgen_core::{
    BoundgenError, BoundgenResult, Config, Generator, RustEmitter, Severity, load_schema,
    write_units,
};
use std::path::Path;

/// Generate and (unless `dry_run`) write validator units for a schema.
pub fn run(schema: &Path, config: &Config, dry_run: bool, verbose: bool) -> BoundgenResult<()> {
    let console = CLIConsole::new(verbose);
    console.print_header("Validator Generation");

    let document = load_schema(schema)?;
    console.info(&format!(
        "Loaded {} record(s) from {}",
        document.records.len(),
        schema.display()
    ));

    let generator = Generator::new(config.generator.clone());
    let report = match generator.generate(&document.records) {
        Ok(report) => report,
        Err(e) => {
            console.error(&format!("Generation failed: {e}"));
            if let BoundgenError::Diagnostics { notices, .. } = &e {
                for notice in notices {
                    console.warn(notice);
                }
            }
            return Err(e);
        }
    };

    for notice in report.notices() {
        match notice.severity() {
            Severity::Warning => console.warn(&notice.to_string()),
            Severity::Info => console.info(&notice.to_string()),
        }
    }

    let emitter = RustEmitter::new(config.emit.clone());
    let units = emitter.render_all(report.validators())?;

    if dry_run {
        for unit in &units {
            console.print_separator();
            println!("// {}", unit.file_name);
            println!("{}", unit.source);
        }
        console.success(&format!(
            "Rendered {} validator unit(s) (dry run, nothing written)",
            units.len()
        ));
        return Ok(());
    }

    let written = write_units(&config.emit.output_dir, &units)?;
    for path in &written {
        console.info(&format!("Wrote {}", path.display()));
    }
    console.success(&format!(
        "Generated {} validator unit(s) in {}",
        units.len(),
        config.emit.output_dir.display()
    ));
    Ok(())
}
