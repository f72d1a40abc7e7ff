use rubric_core::config::ObservabilityConfig;
use rubric_observability::tracing_setup::spans::names;
use rubric_observability::{
    batch_span, init_tracing, init_tracing_with_filter, stage_span, validation_span,
};

#[test]
fn second_install_reports_existing_subscriber() {
    let config = ObservabilityConfig {
        log_level: "debug".into(),
        json_logs: true,
    };
    // At most one call can own the global subscriber.
    let first = init_tracing(&config);
    let second = init_tracing_with_filter("warn", false);
    assert!(!(first && second));
}

#[test]
fn span_macros_use_declared_names() {
    let validation = validation_span!("Acme Utilities", "process-prompt-v2.2");
    let stage = stage_span!(names::STAGE_EVIDENCE);
    let batch = batch_span!(3usize);
    for span in [&validation, &stage, &batch] {
        if let Some(meta) = span.metadata() {
            assert!(
                [names::VALIDATION, names::STAGE, names::BATCH].contains(&meta.name()),
                "unexpected span name {}",
                meta.name()
            );
        }
    }
}

#[test]
fn stage_names_are_distinct() {
    let stages = [
        names::STAGE_STRUCTURE,
        names::STAGE_EVIDENCE,
        names::STAGE_DISTRIBUTION,
        names::STAGE_NARRATIVE,
        names::STAGE_SUMMARY,
    ];
    let unique: std::collections::HashSet<_> = stages.iter().collect();
    assert_eq!(unique.len(), stages.len());
}
