//! Persisting emitted units

use super::EmittedUnit;
use crate::error::{BoundgenError, BoundgenResult};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const MOD_FILE: &str = "mod.rs";

/// Write every unit into `out_dir` together with a `mod.rs` declaring them.
///
/// Fails before writing anything when two units share a module name.
pub fn write_units(out_dir: &Path, units: &[EmittedUnit]) -> BoundgenResult<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    for unit in units {
        if !seen.insert(unit.module_name.as_str()) {
            return Err(BoundgenError::emit_for_record(
                format!("Module name '{}' is produced by more than one record", unit.module_name),
                unit.record.clone(),
            ));
        }
    }

    fs::create_dir_all(out_dir).map_err(|e| {
        BoundgenError::io_with_path(
            format!("Failed to create output directory: {}", e),
            out_dir.display().to_string(),
        )
    })?;

    let mut written = Vec::with_capacity(units.len() + 1);
    for unit in units {
        let path = out_dir.join(&unit.file_name);
        write_file(&path, &unit.source)?;
        tracing::debug!(record = %unit.record, path = %path.display(), "Wrote validator unit");
        written.push(path);
    }

    let mut modules: Vec<&str> = units.iter().map(|u| u.module_name.as_str()).collect();
    modules.sort_unstable();
    let mut mod_source = String::from("// Generated by boundgen. Do not edit.\n\n");
    for module in modules {
        mod_source.push_str(&format!("pub mod {};\n", module));
    }

    let mod_path = out_dir.join(MOD_FILE);
    write_file(&mod_path, &mod_source)?;
    written.push(mod_path);

    tracing::info!(
        units = units.len(),
        dir = %out_dir.display(),
        "Wrote generated validators"
    );
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> BoundgenResult<()> {
    fs::write(path, contents).map_err(|e| {
        BoundgenError::io_with_path(
            format!("Failed to write generated source: {}", e),
            path.display().to_string(),
        )
    })
}
