//! reviewdesk Test Utilities
//!
//! Centralized test infrastructure for the reviewdesk workspace:
//! - Proptest generators for drafts and notes
//! - Stub text-generation transports with call counting
//! - Fixtures for the common two-note review scenario
//! - Log capture for asserting on diagnostic output

// Re-export core types for convenience
pub use reviewdesk_core::{Note, NoteDraft, NoteField, NoteId, NoteStore, ReportState};
pub use reviewdesk_llm::{
    GenerationRequest, GenerationResponse, LlmError, LlmResult, ReportError, ReportGenerator,
    StaticCredential, TextGenerator,
};

use async_trait::async_trait;
use proptest::prelude::*;
use secrecy::SecretString;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// ============================================================================
// STUB TRANSPORTS
// ============================================================================

/// Transport that answers every call with a fixed result and counts calls.
#[derive(Debug)]
pub struct StubGenerator {
    result: LlmResult<GenerationResponse>,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl StubGenerator {
    /// Always answers with the given text.
    pub fn echoing(text: impl Into<String>) -> Self {
        Self::with_result(Ok(GenerationResponse::text(text)))
    }

    /// Always answers without a text payload.
    pub fn empty() -> Self {
        Self::with_result(Ok(GenerationResponse::empty()))
    }

    /// Always fails with the given error.
    pub fn failing(error: LlmError) -> Self {
        Self::with_result(Err(error))
    }

    pub fn with_result(result: LlmResult<GenerationResponse>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().ok()?.clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn generate(
        &self,
        _api_key: &SecretString,
        request: &GenerationRequest,
    ) -> LlmResult<GenerationResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }
        self.result.clone()
    }
}

/// Transport that holds every call until [`GatedGenerator::open`] is called.
/// Lets tests observe the in-flight state.
#[derive(Debug)]
pub struct GatedGenerator {
    inner: StubGenerator,
    gate: Notify,
}

impl GatedGenerator {
    pub fn echoing(text: impl Into<String>) -> Self {
        Self {
            inner: StubGenerator::echoing(text),
            gate: Notify::new(),
        }
    }

    /// Release one waiting (or the next) call.
    pub fn open(&self) {
        self.gate.notify_one();
    }

    pub fn call_count(&self) -> usize {
        self.inner.call_count()
    }
}

#[async_trait]
impl TextGenerator for GatedGenerator {
    fn provider_name(&self) -> &str {
        "gated-stub"
    }

    async fn generate(
        &self,
        api_key: &SecretString,
        request: &GenerationRequest,
    ) -> LlmResult<GenerationResponse> {
        self.gate.notified().await;
        self.inner.generate(api_key, request).await
    }
}

/// Report generator wired to a transport with a valid static key.
pub fn generator_with(transport: Arc<dyn TextGenerator>) -> ReportGenerator {
    ReportGenerator::new(
        transport,
        Arc::new(StaticCredential::new("test-api-key")),
        "test-model",
    )
}

/// Report generator wired to a transport with no credential configured.
pub fn generator_without_key(transport: Arc<dyn TextGenerator>) -> ReportGenerator {
    ReportGenerator::new(transport, Arc::new(StaticCredential::missing()), "test-model")
}

/// A representative service failure carrying a distinctive cause.
pub fn upstream_failure() -> LlmError {
    LlmError::RequestFailed {
        provider: "stub".to_string(),
        status: 503,
        message: "upstream overloaded: backend-7".to_string(),
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn draft(category: &str, owner: &str, title: &str, content: &str) -> NoteDraft {
    NoteDraft::new()
        .with(NoteField::Category, category)
        .with(NoteField::Owner, owner)
        .with(NoteField::Title, title)
        .with(NoteField::Content, content)
}

pub fn engineering_latency_draft() -> NoteDraft {
    draft("Engineering", "Jane", "Latency", "p99 regressed")
}

pub fn marketing_launch_draft() -> NoteDraft {
    draft("Marketing", "Sam", "Launch", "delayed two weeks")
}

/// Store holding the two-note review scenario, newest (Marketing) first.
pub fn review_store() -> NoteStore {
    let mut store = NoteStore::new();
    for d in [engineering_latency_draft(), marketing_launch_draft()] {
        if let Err(err) = store.add_note(&d) {
            panic!("fixture draft rejected: {}", err);
        }
    }
    store
}

/// Snapshot of [`review_store`].
pub fn review_notes() -> Vec<Note> {
    review_store().snapshot()
}

// ============================================================================
// LOG CAPTURE
// ============================================================================

/// In-memory sink for `tracing-subscriber` fmt output.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default()
    }

    /// Install a thread-local subscriber writing into this buffer.
    /// Logs are captured until the returned guard is dropped.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        use tracing_subscriber::util::SubscriberInitExt;
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
            .finish()
            .set_default()
    }
}

/// Writer handed out per event by [`CapturedLogs`].
pub struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.buffer.lock() {
            Ok(mut b) => {
                b.extend_from_slice(buf);
                Ok(buf.len())
            }
            Err(_) => Err(std::io::Error::new(std::io::ErrorKind::Other, "log buffer poisoned")),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub fn arb_category() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Engineering",
        "Marketing",
        "Sales",
        "Operations",
        "Core Capability",
    ])
    .prop_map(str::to_string)
}

pub fn arb_owner() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Jane", "Sam", "Team Alpha", "Priya", "Luis"]).prop_map(str::to_string)
}

/// Drafts that always pass validation.
pub fn arb_valid_draft() -> impl Strategy<Value = NoteDraft> {
    (
        arb_category(),
        arb_owner(),
        "[A-Za-z][A-Za-z ]{0,20}",
        "[A-Za-z ]{0,40}",
        "[A-Za-z0-9][A-Za-z0-9 .,]{0,80}",
    )
        .prop_map(|(category, owner, title, description, content)| NoteDraft {
            category,
            owner,
            title,
            description,
            content,
        })
}

/// Drafts where a random required field has been cleared.
pub fn arb_invalid_draft() -> impl Strategy<Value = NoteDraft> {
    (
        arb_valid_draft(),
        prop::sample::select(vec![
            NoteField::Category,
            NoteField::Owner,
            NoteField::Title,
            NoteField::Content,
        ]),
    )
        .prop_map(|(mut draft, field)| {
            draft.field_mut(field).clear();
            draft
        })
}

/// Non-empty snapshot of valid notes, newest first.
pub fn arb_notes(max: usize) -> impl Strategy<Value = Vec<Note>> {
    prop::collection::vec(arb_valid_draft(), 1..=max.max(1)).prop_map(|drafts| {
        let mut store = NoteStore::new();
        for d in &drafts {
            let _ = store.add_note(d);
        }
        store.snapshot()
    })
}

// ============================================================================
// UNIT TESTS
// ============================================================================
