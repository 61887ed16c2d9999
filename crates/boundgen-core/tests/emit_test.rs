//! Emission of generated validator units to disk

use boundgen_core::{
    EmitConfig, Generator, RustEmitter, error::BoundgenResult, schema::load_schema, write_units,
};
use std::fs;
use tempfile::TempDir;

const SCHEMA: &str = r#"
[[records]]
name = "Account"
namespace = "bank"

[[records.fields]]
name = "owner"
type = "String"
annotations = [{ min_length = 2 }, { pattern = "[A-Za-z ]+" }]

[[records.fields]]
name = "balance"
type = "Observable<Long>"
annotations = [{ min_long = 0 }]

[[records]]
name = "AuditEntry"

[[records.fields]]
name = "comment"
type = "String"
"#;

#[test]
fn test_generate_and_write_units() -> BoundgenResult<()> {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("schema.toml");
    fs::write(&schema_path, SCHEMA).unwrap();

    let document = load_schema(&schema_path)?;
    let report = Generator::default().generate(&document.records)?;
    assert_eq!(report.records.len(), 2);
    assert!(report.record("AuditEntry").unwrap().validator.is_none());

    let emitter = RustEmitter::new(EmitConfig {
        record_path_prefix: "crate::model".to_string(),
        ..Default::default()
    });
    let units = emitter.render_all(report.validators())?;
    assert_eq!(units.len(), 1);

    let out_dir = temp_dir.path().join("generated");
    let written = write_units(&out_dir, &units)?;
    assert_eq!(written.len(), 2);

    let source = fs::read_to_string(out_dir.join("account_validator.rs")).unwrap();
    assert!(source.contains("pub fn validateAccount(record: &crate::model::bank::Account) -> Validity {"));
    assert!(source.contains("fn validateOwnerMinLength(value: &str) -> bool {"));
    assert!(source.contains("fn validateBalanceMinNumeric(value: i64) -> bool {"));
    assert!(source.contains("let Some(value) = record.balance.get() else {"));
    assert!(!source.contains("AuditEntry"));

    let mod_rs = fs::read_to_string(out_dir.join("mod.rs")).unwrap();
    assert!(mod_rs.contains("pub mod account_validator;"));
    Ok(())
}
