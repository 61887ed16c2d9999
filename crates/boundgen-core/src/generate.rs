//! Generation pass driver
//!
//! Runs the classify, extract, synthesize and aggregate stages for each
//! record. Records are independent: each one gets its own [`IdentityMap`], so
//! they can be processed on separate worker threads.

use crate::aggregate::{RecordValidator, aggregate};
use crate::classify::classify;
use crate::config::GeneratorConfig;
use crate::diagnostics::{Notice, NoticeReason, Severity};
use crate::error::{BoundgenError, BoundgenResult};
use crate::extract::extract;
use crate::identity::IdentityMap;
use crate::predicate::synthesize;
use crate::schema::RecordSpec;
use std::num::NonZeroUsize;
use std::thread;
use tracing::{debug, info};

/// Result of generating one record
#[derive(Debug, Clone)]
pub struct RecordGeneration {
    /// Qualified record name
    pub record: String,
    /// `None` when no field of the record is constrained
    pub validator: Option<RecordValidator>,
    pub notices: Vec<Notice>,
}

impl RecordGeneration {
    pub fn warnings(&self) -> impl Iterator<Item = &Notice> {
        self.notices
            .iter()
            .filter(|n| n.severity() == Severity::Warning)
    }
}

/// Result of a whole generation pass, in input order
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub records: Vec<RecordGeneration>,
}

impl GenerationReport {
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.records.iter().flat_map(|r| r.notices.iter())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Notice> {
        self.records.iter().flat_map(|r| r.warnings())
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    /// Produced record validators, skipping records without one
    pub fn validators(&self) -> impl Iterator<Item = &RecordValidator> {
        self.records.iter().filter_map(|r| r.validator.as_ref())
    }

    pub fn record(&self, name: &str) -> Option<&RecordGeneration> {
        self.records.iter().find(|r| r.record == name)
    }
}

/// Drives generation passes with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the validators of a single record.
    pub fn generate_record(&self, record: &RecordSpec) -> RecordGeneration {
        generate_record(record)
    }

    /// Generate validators for every record.
    ///
    /// Output order matches input order regardless of worker scheduling. In
    /// strict mode any warning notice fails the pass.
    pub fn generate(&self, records: &[RecordSpec]) -> BoundgenResult<GenerationReport> {
        let workers = self.worker_count(records.len());
        debug!(records = records.len(), workers, "Starting generation pass");

        let generated = if workers <= 1 {
            records.iter().map(generate_record).collect()
        } else {
            generate_parallel(records, workers)?
        };
        let report = GenerationReport { records: generated };

        info!(
            records = report.records.len(),
            validators = report.validators().count(),
            warnings = report.warnings().count(),
            "Generation pass finished"
        );

        if self.config.strict && report.has_warnings() {
            let warnings = report.warnings().map(ToString::to_string).collect();
            return Err(BoundgenError::diagnostics(warnings));
        }
        Ok(report)
    }

    fn worker_count(&self, records: usize) -> usize {
        if !self.config.parallel || records < 2 {
            return 1;
        }
        let available = self.config.workers.unwrap_or_else(|| {
            thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        });
        available.clamp(1, records)
    }
}

fn generate_parallel(records: &[RecordSpec], workers: usize) -> BoundgenResult<Vec<RecordGeneration>> {
    let chunk_size = records.len().div_ceil(workers);

    thread::scope(|scope| {
        let handles: Vec<_> = records
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || chunk.iter().map(generate_record).collect::<Vec<_>>()))
            .collect();

        let mut generated = Vec::with_capacity(records.len());
        for handle in handles {
            let chunk = handle
                .join()
                .map_err(|_| BoundgenError::other("Generation worker panicked"))?;
            generated.extend(chunk);
        }
        Ok(generated)
    })
}

/// Generate the validators of a single record.
pub fn generate_record(record: &RecordSpec) -> RecordGeneration {
    let qualified = record.qualified_name();
    let mut identities = IdentityMap::for_record(record);
    let mut validators = Vec::new();
    let mut notices = Vec::new();

    for field in &record.fields {
        let classification = classify(&field.declared);
        if !classification.kind.is_supported() {
            notices.push(Notice::for_field(
                &qualified,
                &field.name,
                NoticeReason::UnsupportedFieldType {
                    declared: field.declared.to_string(),
                    annotated: !field.annotations.is_empty(),
                },
            ));
            continue;
        }

        let extraction = extract(field, classification);
        notices.extend(
            extraction
                .notices
                .into_iter()
                .map(|reason| Notice::for_field(&qualified, &field.name, reason)),
        );

        let spec = extraction.spec;
        if !spec.is_constrained() {
            notices.push(Notice::for_field(&qualified, &field.name, NoticeReason::Unconstrained));
            continue;
        }

        let kinds: Vec<_> = spec.constraints.iter().map(|c| c.kind()).collect();
        let claimed = identities.claim(&field.name, &kinds);
        if claimed.collided() {
            notices.push(Notice::for_field(
                &qualified,
                &field.name,
                NoticeReason::IdentityCollision {
                    requested: claimed.requested.clone(),
                    assigned: claimed.identity.clone(),
                },
            ));
        }

        if let Some(validator) = synthesize(&spec, &claimed) {
            identities.register(&field.name, validator.identity(), validator.is_wrapped());
            validators.push(validator);
        }
    }

    let validator = aggregate(record, identities, validators);
    if validator.is_none() {
        notices.push(Notice::for_record(&qualified, NoticeReason::NoRecordValidator));
    }

    for notice in &notices {
        notice.log();
    }
    debug!(
        record = %qualified,
        fields = validator.as_ref().map_or(0, |v| v.fields().len()),
        notices = notices.len(),
        "Generated record"
    );

    RecordGeneration {
        record: qualified,
        validator,
        notices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{DynamicRecord, Validity};
    use crate::schema::{Annotation, DeclaredType, FieldDecl};

    fn user() -> RecordSpec {
        RecordSpec::new("User", "")
            .field(FieldDecl::new("name", DeclaredType::Text).annotate(Annotation::MinLength(10)))
            .field(FieldDecl::new("age", DeclaredType::Int32).annotate(Annotation::MinInt(18)))
            .field(FieldDecl::new("active", DeclaredType::Bool))
    }

    #[test]
    fn test_generate_record_builds_validator() {
        let generation = generate_record(&user());
        let validator = generation.validator.unwrap();

        assert_eq!(validator.identity(), "validateUser");
        let names: Vec<_> = validator.fields().iter().map(|f| f.identity()).collect();
        assert_eq!(names, vec!["validateName", "validateAge"]);

        let record = DynamicRecord::new().with("name", "Jane Doe Smith").with("age", 30);
        assert_eq!(validator.validate(&record).unwrap(), Validity::Valid);
    }

    #[test]
    fn test_unsupported_field_notice() {
        let generation = generate_record(&user());
        let notice = generation
            .notices
            .iter()
            .find(|n| n.field.as_deref() == Some("active"))
            .unwrap();
        assert_eq!(
            notice.reason,
            NoticeReason::UnsupportedFieldType {
                declared: "bool".into(),
                annotated: false
            }
        );
        assert_eq!(generation.warnings().count(), 0);
    }

    #[test]
    fn test_record_without_constraints() {
        let record = RecordSpec::new("Plain", "").field(FieldDecl::new("note", DeclaredType::Text));
        let generation = generate_record(&record);

        assert!(generation.validator.is_none());
        assert!(generation
            .notices
            .iter()
            .any(|n| n.reason == NoticeReason::NoRecordValidator));
        assert!(generation
            .notices
            .iter()
            .any(|n| n.reason == NoticeReason::Unconstrained));
    }

    #[test]
    fn test_identity_collision_reported() {
        let record = RecordSpec::new("User", "")
            .field(FieldDecl::new("user", DeclaredType::Text).annotate(Annotation::MaxLength(4)));
        let generation = generate_record(&record);

        let validator = generation.validator.as_ref().unwrap();
        assert_eq!(validator.fields()[0].identity(), "validateUser2");
        assert!(generation.warnings().any(|n| matches!(
            &n.reason,
            NoticeReason::IdentityCollision { assigned, .. } if assigned == "validateUser2"
        )));
    }

    #[test]
    fn test_parallel_preserves_order() {
        let records: Vec<_> = (0..17)
            .map(|i| {
                RecordSpec::new(format!("Record{}", i), "demo").field(
                    FieldDecl::new("value", DeclaredType::Int64).annotate(Annotation::MaxLong(i)),
                )
            })
            .collect();

        let generator = Generator::new(GeneratorConfig {
            parallel: true,
            workers: Some(4),
            strict: false,
        });
        let report = generator.generate(&records).unwrap();

        let names: Vec<_> = report.records.iter().map(|r| r.record.clone()).collect();
        let expected: Vec<_> = (0..17).map(|i| format!("demo::Record{}", i)).collect();
        assert_eq!(names, expected);
        assert_eq!(report.validators().count(), 17);
    }

    #[test]
    fn test_strict_mode_fails_on_warning() {
        let record = RecordSpec::new("Account", "")
            .field(FieldDecl::new("age", DeclaredType::Int32).annotate(Annotation::MinLength(2)));

        let lenient = Generator::default().generate(std::slice::from_ref(&record)).unwrap();
        assert!(lenient.has_warnings());

        let strict = Generator::new(GeneratorConfig {
            strict: true,
            ..Default::default()
        });
        let err = strict.generate(&[record]).unwrap_err();
        assert_eq!(err.error_code(), "BOUNDGEN_DIAGNOSTICS");
    }

    #[test]
    fn test_worker_count() {
        let serial = Generator::new(GeneratorConfig {
            parallel: false,
            ..Default::default()
        });
        assert_eq!(serial.worker_count(100), 1);

        let capped = Generator::new(GeneratorConfig {
            workers: Some(8),
            ..Default::default()
        });
        assert_eq!(capped.worker_count(3), 3);
        assert_eq!(capped.worker_count(1), 1);
    }
}
