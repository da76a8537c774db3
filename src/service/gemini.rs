//! Gemini REST client and the analysis orchestrator built on it.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::prompt::build_prompt;
use super::schema::response_schema;
use super::{parse_reply, SkinAnalyzer};
use crate::config::Config;
use crate::error::{ConfigError, ServiceError};
use crate::model::{AnalysisRequest, AnalysisResult};

const RESPONSE_MIME_TYPE: &str = "application/json";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f64,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
        })
    }

    fn build_request(&self, request: &AnalysisRequest) -> GenerateContentRequest {
        let prompt = build_prompt(request.symptoms.as_deref());

        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineDataPayload {
                            mime_type: request.mime_type.clone(),
                            data: BASE64_STANDARD.encode(&request.image),
                        },
                    },
                    Part::Text { text: prompt },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE.to_string(),
                response_schema: response_schema(),
                temperature: self.temperature,
            },
        }
    }

    /// Sends one request and returns the text of the first candidate.
    async fn generate(&self, body: &GenerateContentRequest) -> Result<String, ServiceError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_text_response(parsed)
    }
}

#[async_trait]
impl SkinAnalyzer for GeminiClient {
    async fn analyze(&self, request: AnalysisRequest) -> AnalysisResult {
        log::info!(
            "Submitting {} byte {} image for analysis (symptoms: {})",
            request.image.len(),
            request.mime_type,
            request.symptoms.is_some()
        );

        let body = self.build_request(&request);
        match self.generate(&body).await.and_then(|text| parse_reply(&text)) {
            Ok(result) => {
                if let Some(message) = result.error() {
                    log::warn!("Gemini declined to analyse the image: {message}");
                } else if result.is_no_findings() {
                    log::info!("Analysis returned no findings");
                } else if let Some(report) = result.report() {
                    log::info!("Analysis returned {} condition(s)", report.conditions.len());
                }
                result
            }
            Err(err) => {
                log::error!("Failed to obtain an analysis from Gemini: {err}");
                AnalysisResult::unavailable()
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataPayload {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, ServiceError> {
    let text: String = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(ServiceError::EmptyResponse)
    } else {
        Ok(text)
    }
}

fn map_http_error(status: StatusCode, body: String) -> ServiceError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    ServiceError::Status {
        status: status.as_u16(),
        message,
    }
}
