//! License terms resolution
//!
//! Turns questionnaire answers into structured license terms. The primary
//! path delegates to a completion API and validates the reply; any failure
//! there degrades to a fixed conservative default, so resolution never
//! blocks the licensing flow on an unreliable backend.

use std::sync::Arc;

use crate::domain::entities::{question_catalog, Answers, LicenseTerms, Question};
use crate::domain::ports::{ChatRequest, LlmClient};

const SYSTEM_PROMPT: &str = "You are an intellectual property licensing expert who \
    translates creator preferences into standard license terms.";

/// Service for generating license terms from questionnaire answers
pub struct LicenseService<L>
where
    L: LlmClient,
{
    llm: Arc<L>,
}

impl<L> LicenseService<L>
where
    L: LlmClient,
{
    pub fn new(llm: Arc<L>) -> Self {
        Self { llm }
    }

    /// The fixed questionnaire shown before license generation
    pub fn questions(&self) -> &'static [Question] {
        question_catalog()
    }

    /// Resolve questionnaire answers into license terms
    ///
    /// Never fails: transport errors, malformed replies and schema-invalid
    /// payloads all degrade to the conservative fallback. The underlying
    /// failure is logged, not propagated.
    pub async fn resolve(&self, answers: &Answers) -> LicenseTerms {
        let request = ChatRequest::new(SYSTEM_PROMPT, build_prompt(answers));

        match self.llm.complete(request).await {
            Ok(reply) => match parse_terms(&reply) {
                Ok(terms) => terms,
                Err(e) => {
                    tracing::warn!("Generated license terms failed validation: {}", e);
                    fallback_terms()
                }
            },
            Err(e) => {
                tracing::warn!("License generation call failed: {}", e);
                fallback_terms()
            }
        }
    }
}

/// Build the user prompt embedding the raw answers mapping
fn build_prompt(answers: &Answers) -> String {
    // Answers is a BTreeMap, so the embedded JSON is deterministic
    let answers_json =
        serde_json::to_string_pretty(answers).unwrap_or_else(|_| "{}".to_string());

    format!(
        "Based on the following creator preferences, produce standard license terms.\n\
        \n\
        Creator answers:\n\
        {answers_json}\n\
        \n\
        Reply with a JSON object containing exactly these fields:\n\
        - commercialUse: boolean (commercial use allowed)\n\
        - derivatives: boolean (derivative works allowed)\n\
        - attribution: boolean (attribution required)\n\
        - shareAlike: boolean (derivatives must share alike)\n\
        - territory: string[] (covered regions)\n\
        - channels: string[] (allowed distribution channels)\n\
        - timeframe: number (license duration in months, 0 for perpetual)\n\
        - royalty: number (royalty percentage, 0-100)\n\
        \n\
        Reply with valid JSON only."
    )
}

/// Parse and validate a completion reply as license terms
///
/// serde enforces the required-field set: commercialUse, derivatives,
/// attribution, territory, channels and timeframe must be present, while
/// shareAlike and royalty default when omitted.
fn parse_terms(reply: &str) -> Result<LicenseTerms, serde_json::Error> {
    serde_json::from_str(reply.trim())
}

/// The deterministic conservative default: non-commercial, no derivatives,
/// attribution and share-alike required, regional scope, one year, 10% royalty
pub fn fallback_terms() -> LicenseTerms {
    LicenseTerms {
        commercial_use: false,
        derivatives: false,
        attribution: true,
        share_alike: true,
        territory: vec!["Mainland China".to_string()],
        channels: vec!["Social media".to_string()],
        timeframe: 12,
        royalty: Some(10),
    }
}
