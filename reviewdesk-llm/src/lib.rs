//! reviewdesk LLM - Report Generation
//!
//! Provider-agnostic text-generation transport plus the report generator
//! that turns a snapshot of notes into one outbound request.
//! The Gemini provider is the only concrete transport shipped here;
//! tests plug in their own.

pub mod credential;
pub mod error;
pub mod prompt;
pub mod providers;
pub mod report;
pub mod slot;

pub use credential::{ConfiguredCredential, CredentialSource, EnvCredential, StaticCredential};
pub use error::{LlmError, LlmResult, ReportError};
pub use prompt::{build_report_prompt, REPORT_SECTIONS};
pub use providers::GeminiClient;
pub use report::{
    ReportGenerator, EMPTY_REPORT_FALLBACK, NO_NOTES_MESSAGE, SERVICE_FAILURE_MESSAGE,
};
pub use slot::{ReportJob, ReportSlot, SlotClaim};

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

// ============================================================================
// TEXT GENERATION TRANSPORT
// ============================================================================

/// A single text-generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier (e.g., "gemini-3-flash-preview")
    pub model: String,
    /// Full prompt text
    pub prompt: String,
}

/// Result of a text-generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text; `None` when the service answered without a text payload
    pub text: Option<String>,
}

impl GenerationResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn empty() -> Self {
        Self { text: None }
    }
}

/// Trait for text-generation transports.
/// Implementations must be thread-safe (Send + Sync).
///
/// The credential is passed per call so that it can be resolved at call
/// time and never needs to live inside the transport.
///
/// # Example
/// ```ignore
/// struct EchoTransport;
///
/// #[async_trait]
/// impl TextGenerator for EchoTransport {
///     fn provider_name(&self) -> &str { "echo" }
///     async fn generate(&self, _key: &SecretString, req: &GenerationRequest) -> LlmResult<GenerationResponse> {
///         Ok(GenerationResponse::text(req.prompt.clone()))
///     }
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short provider name used in logs and errors.
    fn provider_name(&self) -> &str;

    /// Issue exactly one generation request.
    ///
    /// # Returns
    /// * `Ok(GenerationResponse)` - The service answered (text may be absent)
    /// * `Err(LlmError)` - Transport or service-side failure
    async fn generate(
        &self,
        api_key: &SecretString,
        request: &GenerationRequest,
    ) -> LlmResult<GenerationResponse>;
}
