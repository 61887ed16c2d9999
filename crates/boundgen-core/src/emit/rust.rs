//! Rust source emitter

use super::EmittedUnit;
use super::naming::{module_name, rust_identifier};
use crate::aggregate::RecordValidator;
use crate::classify::ValueKind;
use crate::config::EmitConfig;
use crate::constraint::{Bound, ConstraintSpec};
use crate::error::BoundgenResult;
use crate::predicate::{FieldValidator, LeafPredicate, anchored};
use regex::Regex;

const INDENT: &str = "    ";

/// Renders [`RecordValidator`]s as Rust source.
///
/// Each unit holds a `<Record>Validator` unit struct with private leaf
/// functions, one public function per field validator and the public record
/// validator returning `Validity`. Observable fields are read once through
/// `Observable::get`.
#[derive(Debug, Clone, Default)]
pub struct RustEmitter {
    config: EmitConfig,
}

impl RustEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn render_all<'a, I>(&self, validators: I) -> BoundgenResult<Vec<EmittedUnit>>
    where
        I: IntoIterator<Item = &'a RecordValidator>,
    {
        validators.into_iter().map(|v| self.render(v)).collect()
    }

    pub fn render(&self, validator: &RecordValidator) -> BoundgenResult<EmittedUnit> {
        let record = validator.record();
        let qualified = if validator.namespace().is_empty() {
            record.to_string()
        } else {
            format!("{}::{}", validator.namespace(), record)
        };
        let record_path = self
            .record_path(validator)
            .map_err(|e| e.with_context(format!("Emitting validator for {}", qualified)))?;
        let runtime = &self.config.runtime_crate;

        let mut lines = Vec::new();
        lines.push(format!("// Generated by boundgen from {}. Do not edit.", qualified));
        lines.push(String::new());
        lines.push(format!("use {}::runtime::Validity;", runtime));
        lines.push(String::new());
        lines.push(format!("/// Validators for [`{}`]", record_path));
        lines.push(format!("pub struct {}Validator;", record));
        lines.push(String::new());
        lines.push("#[allow(non_snake_case, clippy::all)]".to_string());
        lines.push(format!("impl {}Validator {{", record));

        for field in validator.fields() {
            for leaf in field.leaves() {
                self.push_leaf(&mut lines, field.kind(), leaf);
                lines.push(String::new());
            }
            push_field(&mut lines, field);
            lines.push(String::new());
        }

        self.push_record(&mut lines, validator, &record_path)
            .map_err(|e| e.with_context(format!("Emitting validator for {}", qualified)))?;
        lines.push("}".to_string());
        lines.push(String::new());

        let module_name = module_name(record);
        tracing::debug!(record = %qualified, module = %module_name, "Rendered validator unit");

        Ok(EmittedUnit {
            record: qualified,
            file_name: format!("{}.rs", module_name),
            module_name,
            source: lines.join("\n"),
        })
    }

    fn record_path(&self, validator: &RecordValidator) -> BoundgenResult<String> {
        let mut segments: Vec<String> = self
            .config
            .record_path_prefix
            .split("::")
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        for segment in validator
            .namespace()
            .split(['.', ':'])
            .filter(|s| !s.is_empty())
        {
            segments.push(rust_identifier(segment)?);
        }
        segments.push(rust_identifier(validator.record())?);
        Ok(segments.join("::"))
    }

    fn push_leaf(&self, lines: &mut Vec<String>, kind: ValueKind, leaf: &LeafPredicate) {
        let identity = leaf.identity();
        lines.push(format!(
            "{}fn {}(value: {}) -> bool {{",
            INDENT,
            identity,
            param_type(kind)
        ));

        let body = match leaf.constraint() {
            ConstraintSpec::MinLength(n) => vec![format!("value.chars().count() >= {}", n)],
            ConstraintSpec::MaxLength(n) => vec![format!("value.chars().count() <= {}", n)],
            ConstraintSpec::Pattern(pattern) => {
                let anchored = anchored(pattern);
                if let Err(e) = Regex::new(&anchored) {
                    tracing::warn!(
                        "{}: pattern '{}' does not compile, the emitted validator will panic on first use: {}",
                        identity,
                        pattern,
                        e
                    );
                }
                let runtime = &self.config.runtime_crate;
                vec![
                    format!(
                        "static PATTERN: std::sync::OnceLock<{}::regex::Regex> = std::sync::OnceLock::new();",
                        runtime
                    ),
                    "PATTERN".to_string(),
                    format!(
                        "{}.get_or_init(|| {}::regex::Regex::new({:?}).expect(\"{}: malformed pattern\"))",
                        INDENT, runtime, anchored, identity
                    ),
                    format!("{}.is_match(value)", INDENT),
                ]
            }
            ConstraintSpec::MinNumeric(bound) => vec![format!("value >= {}", bound_literal(*bound))],
            ConstraintSpec::MaxNumeric(bound) => vec![format!("value <= {}", bound_literal(*bound))],
        };

        for line in body {
            lines.push(format!("{}{}{}", INDENT, INDENT, line));
        }
        lines.push(format!("{}}}", INDENT));
    }

    fn push_record(
        &self,
        lines: &mut Vec<String>,
        validator: &RecordValidator,
        record_path: &str,
    ) -> BoundgenResult<()> {
        let body = INDENT.repeat(2);
        lines.push(format!(
            "{}pub fn {}(record: &{}) -> Validity {{",
            INDENT,
            validator.identity(),
            record_path
        ));

        for field in validator.fields() {
            let name = field.field();
            let member = rust_identifier(name)?;
            let borrow = if field.kind() == ValueKind::Text { "&" } else { "" };

            if field.is_wrapped() {
                lines.push(format!("{}let Some(value) = record.{}.get() else {{", body, member));
                lines.push(format!("{}{}return Validity::no_value({:?});", body, INDENT, name));
                lines.push(format!("{}}};", body));
                lines.push(format!(
                    "{}if !Self::{}({}value) {{",
                    body,
                    field.identity(),
                    borrow
                ));
            } else {
                lines.push(format!(
                    "{}if !Self::{}({}record.{}) {{",
                    body,
                    field.identity(),
                    borrow,
                    member
                ));
            }
            lines.push(format!("{}{}return Validity::invalid({:?});", body, INDENT, name));
            lines.push(format!("{}}}", body));
        }

        lines.push(format!("{}Validity::Valid", body));
        lines.push(format!("{}}}", INDENT));
        Ok(())
    }
}

fn push_field(lines: &mut Vec<String>, field: &FieldValidator) {
    lines.push(format!(
        "{}pub fn {}(value: {}) -> bool {{",
        INDENT,
        field.identity(),
        param_type(field.kind())
    ));
    let calls: Vec<String> = field
        .leaves()
        .iter()
        .map(|leaf| format!("Self::{}(value)", leaf.identity()))
        .collect();
    lines.push(format!("{}{}{}", INDENT, INDENT, calls.join(" && ")));
    lines.push(format!("{}}}", INDENT));
}

fn param_type(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Text => "&str",
        other => other.rust_type(),
    }
}

fn bound_literal(bound: Bound) -> String {
    match bound {
        Bound::I32(v) => format!("{}_i32", v),
        Bound::I64(v) => format!("{}_i64", v),
        Bound::F32(v) => float_literal(v as f64, v.is_nan(), "f32", format!("{:?}", v)),
        Bound::F64(v) => float_literal(v, v.is_nan(), "f64", format!("{:?}", v)),
    }
}

fn float_literal(value: f64, nan: bool, ty: &str, debug: String) -> String {
    if nan {
        format!("{}::NAN", ty)
    } else if value == f64::INFINITY {
        format!("{}::INFINITY", ty)
    } else if value == f64::NEG_INFINITY {
        format!("{}::NEG_INFINITY", ty)
    } else {
        format!("{}_{}", debug, ty)
    }
}
