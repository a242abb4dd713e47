//! Gemini-backed guide generation via the `generateContent` REST endpoint.
//!
//! One non-streaming POST per guide. The prompt template is fixed; only the
//! hotel name and city vary. Every failure path (missing credential,
//! transport error, non-2xx status, malformed or empty body) is logged and
//! collapsed into [`GUIDE_UNAVAILABLE`].

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::config::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GUIDE_MODEL, ResolvedConfig};
use crate::guide::provider::{GUIDE_UNAVAILABLE, GuideError, GuideProvider};

// ============================================================================
// Gemini generateContent wire types
// ============================================================================

#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Debug)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    text: String,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// The fixed prompt template, parameterized by hotel name and city only.
fn build_prompt(hotel_name: &str, city: &str) -> String {
    format!(
        "You are a friendly and knowledgeable travel guide. Create a concise and exciting local \
         guide for a tourist staying at the \"{hotel_name}\" in {city}. The guide should be in \
         markdown format. Include the following sections: \n\
         - A brief, welcoming intro to the city.\n\
         - **Top 3 Nearby Attractions**: List three must-see attractions close to the hotel, \
         with a one-sentence description for each.\n\
         - **Hidden Gem**: Suggest one lesser-known local spot (like a small cafe, a park, a \
         unique shop, or a viewpoint).\n\
         - **Local Cuisine to Try**: Recommend two specific local dishes or drinks and suggest \
         a type of place to find them (e.g., 'a traditional trattoria', 'a bustling food \
         market').\n\
         Keep the tone enthusiastic and helpful."
    )
}

// ============================================================================
// Provider Implementation
// ============================================================================

pub struct GeminiProvider {
    api_key: Option<String>,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider.
    ///
    /// # Arguments
    /// * `api_key` - Gemini API key; `None` makes every call degrade to the
    ///   apology string without touching the network
    /// * `base_url` - Optional custom base URL (defaults to Google's API)
    /// * `model` - Optional model override
    pub fn new(api_key: Option<String>, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_GUIDE_MODEL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            Some(config.gemini_base_url.clone()),
            Some(config.guide_model.clone()),
        )
    }

    /// The fallible inner call. The public trait method is what swallows
    /// these errors.
    async fn request_guide(&self, prompt: &str) -> Result<String, GuideError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GuideError::Config("no API key configured".to_string()))?;

        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
        };

        info!("Requesting local guide from {} (model {})", self.base_url, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GuideError::Network(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GuideError::Api { status, message });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GuideError::Parse(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GuideError::Parse("response contained no text".to_string()));
        }
        Ok(text)
    }
}

#[async_trait]
impl GuideProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate_local_guide(&self, hotel_name: &str, city: &str) -> String {
        let prompt = build_prompt(hotel_name, city);
        match self.request_guide(&prompt).await {
            Ok(text) => {
                info!("Local guide generated: {} bytes", text.len());
                text
            }
            Err(e) => {
                warn!("Local guide generation failed: {e}");
                GUIDE_UNAVAILABLE.to_string()
            }
        }
    }
}
