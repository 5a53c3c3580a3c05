//! Report generator: one snapshot of notes in, one Markdown report out.

use crate::credential::CredentialSource;
use crate::error::ReportError;
use crate::prompt::build_report_prompt;
use crate::{GenerationRequest, TextGenerator};
use reviewdesk_core::Note;
use std::sync::Arc;

/// Returned without any outbound call when there is nothing to report on.
pub const NO_NOTES_MESSAGE: &str = "No notes provided to generate a report.";

/// Returned when the service answers without a text payload.
pub const EMPTY_REPORT_FALLBACK: &str = "Failed to generate report text.";

/// User-facing message for every transport or service failure.
pub const SERVICE_FAILURE_MESSAGE: &str = "Failed to communicate with the AI service.";

/// Stateless request/response wrapper around a [`TextGenerator`].
///
/// Never touches the note store; callers pass a snapshot.
#[derive(Clone)]
pub struct ReportGenerator {
    transport: Arc<dyn TextGenerator>,
    credential: Arc<dyn CredentialSource>,
    model: String,
}

impl ReportGenerator {
    /// Create a new report generator.
    ///
    /// # Arguments
    /// * `transport` - Text-generation transport (Gemini in production)
    /// * `credential` - Where to read the API key from at call time
    /// * `model` - Model identifier passed with every request
    pub fn new(
        transport: Arc<dyn TextGenerator>,
        credential: Arc<dyn CredentialSource>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            credential,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a report from the given notes.
    ///
    /// # Returns
    /// * `Ok(String)` - Report text, [`NO_NOTES_MESSAGE`] for an empty input,
    ///   or [`EMPTY_REPORT_FALLBACK`] when the service returned no text
    /// * `Err(ReportError::Configuration)` - API key missing, nothing was sent
    /// * `Err(ReportError::Service)` - Transport or service failure (cause is logged)
    pub async fn generate(&self, notes: &[Note]) -> Result<String, ReportError> {
        if notes.is_empty() {
            return Ok(NO_NOTES_MESSAGE.to_string());
        }

        let api_key = self.credential.api_key().ok_or_else(|| {
            let source = self.credential.describe();
            tracing::error!(source = %source, "API key is missing, report not requested");
            ReportError::Configuration {
                message: format!(
                    "API key is missing. Configure {} and try again.",
                    source
                ),
            }
        })?;

        let prompt = build_report_prompt(notes).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialize notes for report prompt");
            ReportError::Service
        })?;

        let request = GenerationRequest {
            model: self.model.clone(),
            prompt,
        };

        tracing::info!(
            provider = self.transport.provider_name(),
            model = %self.model,
            notes = notes.len(),
            "Requesting review report"
        );

        match self.transport.generate(&api_key, &request).await {
            Ok(response) => match response.text.filter(|t| !t.is_empty()) {
                Some(text) => {
                    tracing::info!(chars = text.len(), "Review report generated");
                    Ok(text)
                }
                None => {
                    tracing::warn!(
                        provider = self.transport.provider_name(),
                        "Response contained no report text"
                    );
                    Ok(EMPTY_REPORT_FALLBACK.to_string())
                }
            },
            Err(err) => {
                tracing::error!(
                    provider = self.transport.provider_name(),
                    error = %err,
                    "Error generating report"
                );
                Err(ReportError::Service)
            }
        }
    }
}

impl std::fmt::Debug for ReportGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportGenerator")
            .field("provider", &self.transport.provider_name())
            .field("model", &self.model)
            .finish()
    }
}
