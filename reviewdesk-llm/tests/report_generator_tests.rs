use proptest::prelude::*;
use reviewdesk_llm::{
    ReportError, ReportSlot, TextGenerator, EMPTY_REPORT_FALLBACK, NO_NOTES_MESSAGE,
    SERVICE_FAILURE_MESSAGE,
};
use reviewdesk_test_utils::{
    arb_notes, generator_with, generator_without_key, review_notes, upstream_failure,
    CapturedLogs, GatedGenerator, StubGenerator,
};
use std::sync::Arc;

const FIXED_REPORT: &str = "# Business Review Report\n\n## Executive Summary\nAll good.";

#[tokio::test]
async fn empty_notes_short_circuit_without_calling_transport() {
    let transport = Arc::new(StubGenerator::echoing(FIXED_REPORT));
    let generator = generator_with(transport.clone());

    let report = generator.generate(&[]).await.unwrap();

    assert_eq!(report, NO_NOTES_MESSAGE);
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn empty_notes_short_circuit_even_without_credential() {
    let transport = Arc::new(StubGenerator::echoing(FIXED_REPORT));
    let generator = generator_without_key(transport.clone());

    assert_eq!(generator.generate(&[]).await.unwrap(), NO_NOTES_MESSAGE);
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn missing_credential_fails_before_any_call() {
    let transport = Arc::new(StubGenerator::echoing(FIXED_REPORT));
    let generator = generator_without_key(transport.clone());

    let err = generator.generate(&review_notes()).await.unwrap_err();

    assert_eq!(transport.call_count(), 0);
    match err {
        ReportError::Configuration { message } => {
            assert!(message.contains("API key is missing"));
            assert!(message.contains("static API key"));
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[tokio::test]
async fn successful_call_returns_text_verbatim() {
    let transport = Arc::new(StubGenerator::echoing(FIXED_REPORT));
    let generator = generator_with(transport.clone());

    let report = generator.generate(&review_notes()).await.unwrap();

    assert_eq!(report, FIXED_REPORT);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn request_carries_model_and_serialized_notes() {
    let transport = Arc::new(StubGenerator::echoing(FIXED_REPORT));
    let generator = generator_with(transport.clone());

    generator.generate(&review_notes()).await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.model, "test-model");
    assert!(request.prompt.contains("\"Category\": \"Engineering\""));
    assert!(request.prompt.contains("\"Owner\": \"Sam\""));
    assert!(request.prompt.contains("\"Notes\": \"delayed two weeks\""));
    assert!(request.prompt.contains("Executive Summary"));
    assert!(request.prompt.contains("Action Items"));
}

#[tokio::test]
async fn missing_text_falls_back_to_fixed_string() {
    let transport = Arc::new(StubGenerator::empty());
    let generator = generator_with(transport.clone());

    let report = generator.generate(&review_notes()).await.unwrap();

    assert_eq!(report, EMPTY_REPORT_FALLBACK);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn empty_text_falls_back_to_fixed_string() {
    let transport = Arc::new(StubGenerator::echoing(""));
    let generator = generator_with(transport);

    assert_eq!(
        generator.generate(&review_notes()).await.unwrap(),
        EMPTY_REPORT_FALLBACK
    );
}

#[tokio::test]
async fn transport_failure_is_normalized_and_cause_is_logged() {
    let logs = CapturedLogs::new();
    let _guard = logs.install();

    let transport = Arc::new(StubGenerator::failing(upstream_failure()));
    let generator = generator_with(transport.clone());

    let err = generator.generate(&review_notes()).await.unwrap_err();

    assert_eq!(err, ReportError::Service);
    assert_eq!(err.to_string(), SERVICE_FAILURE_MESSAGE);
    assert!(!err.to_string().contains("backend-7"));
    assert_eq!(transport.call_count(), 1);

    let output = logs.contents();
    assert!(output.contains("Error generating report"));
    assert!(output.contains("upstream overloaded: backend-7"));
}

#[tokio::test]
async fn every_attempt_makes_exactly_one_call() {
    let transport = Arc::new(StubGenerator::failing(upstream_failure()));
    let generator = generator_with(transport.clone());

    for attempt in 1..=3 {
        let _ = generator.generate(&review_notes()).await;
        assert_eq!(transport.call_count(), attempt);
    }
}

#[tokio::test]
async fn slot_rejects_second_request_while_first_is_in_flight() {
    let transport = Arc::new(GatedGenerator::echoing(FIXED_REPORT));
    let generator = generator_with(transport.clone());
    let slot = ReportSlot::new();

    let job = slot.begin(review_notes()).unwrap();
    let in_flight = tokio::spawn({
        let generator = generator.clone();
        async move { job.run(&generator).await }
    });

    assert!(slot.is_busy());
    assert!(matches!(slot.begin(review_notes()), Err(ReportError::Busy)));

    transport.open();
    let report = in_flight.await.unwrap().unwrap();

    assert_eq!(report, FIXED_REPORT);
    assert_eq!(transport.call_count(), 1);
    assert!(!slot.is_busy());
}

#[tokio::test]
async fn job_works_on_snapshot_taken_at_claim_time() {
    let transport = Arc::new(StubGenerator::echoing(FIXED_REPORT));
    let generator = generator_with(transport.clone());
    let slot = ReportSlot::new();

    let mut store = reviewdesk_test_utils::review_store();
    let job = slot.begin(store.snapshot()).unwrap();
    let first = store.list_notes()[0].note_id;
    store.delete_note(first);

    assert_eq!(job.notes().len(), 2);
    job.run(&generator).await.unwrap();

    let prompt = transport.last_request().unwrap().prompt;
    assert!(prompt.contains("Launch"));
    assert!(prompt.contains("Latency"));
}

#[test]
fn stub_transport_reports_provider_name() {
    assert_eq!(StubGenerator::empty().provider_name(), "stub");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any non-empty snapshot produces exactly one call whose prompt names every note.
    #[test]
    fn prop_nonempty_snapshot_makes_one_call(notes in arb_notes(12)) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let transport = Arc::new(StubGenerator::echoing(FIXED_REPORT));
        let generator = generator_with(transport.clone());

        let report = runtime.block_on(generator.generate(&notes)).unwrap();

        prop_assert_eq!(report, FIXED_REPORT);
        prop_assert_eq!(transport.call_count(), 1);
        let prompt = transport.last_request().unwrap().prompt;
        for note in &notes {
            let expected = format!("\"Title\": {}", serde_json_string(&note.title));
            prop_assert!(prompt.contains(&expected));
        }
    }
}

fn serde_json_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
