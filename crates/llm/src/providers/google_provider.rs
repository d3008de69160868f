use common::{ConfigError, NetworkError, OperationTimer, WardrobeError, WardrobeResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Ключ передаётся заголовком, а не в строке запроса
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Провайдер Gemini `generateContent` со структурированным JSON ответом.
///
/// Ключ может отсутствовать: тогда любой вызов завершается ошибкой
/// конфигурации до построения запроса. Повторов нет.
#[derive(Debug, Clone)]
pub struct GoogleProvider {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl GoogleProvider {
    pub fn new(api_key: Option<String>, model: String, timeout: Duration) -> WardrobeResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                WardrobeError::Ai(NetworkError::Transport(format!(
                    "Failed to create HTTP client: {e}"
                )))
            })?;

        Ok(Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
            timeout,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get the API endpoint for the model
    fn get_api_endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// URL в текст ошибки не попадает
    fn from_reqwest_error(&self, error: reqwest::Error) -> NetworkError {
        if error.is_timeout() {
            NetworkError::Timeout(self.timeout.as_secs())
        } else {
            NetworkError::Transport(error.without_url().to_string())
        }
    }

    /// Один запрос с частями `parts` и схемой ответа. Возвращает текст
    /// первой части первого кандидата (строка JSON).
    pub async fn generate_json(
        &self,
        operation: &str,
        parts: Vec<GooglePart>,
        response_schema: Value,
    ) -> WardrobeResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ConfigError::MissingCredential {
                var: "GEMINI_API_KEY",
            })?;

        let google_request = GoogleRequest {
            contents: vec![GoogleContent {
                parts,
                role: Some("user".to_string()),
            }],
            generation_config: GoogleGenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        };

        let mut timer = OperationTimer::new(operation);
        timer.add_field("model", &self.model);
        let result = self.send(api_key, &google_request).await;
        timer.finish_with_result(&result);

        result.map_err(WardrobeError::Ai)
    }

    async fn send(&self, api_key: &str, request: &GoogleRequest) -> Result<String, NetworkError> {
        let start_time = Instant::now();
        debug!("Sending request to Gemini (model: {})", self.model);

        let response = self
            .client
            .post(self.get_api_endpoint())
            .header(API_KEY_HEADER, api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.from_reqwest_error(e))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            error!("Gemini request failed: status {} - {}", code, body);
            return Err(NetworkError::Status { code, body });
        }

        let raw = response
            .text()
            .await
            .map_err(|e| self.from_reqwest_error(e))?;
        let google_response: GoogleResponse = serde_json::from_str(&raw)
            .map_err(|e| NetworkError::InvalidBody(format!("Failed to parse response: {e}")))?;

        let text = google_response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
            .filter(|text| !text.trim().is_empty())
            .ok_or(NetworkError::EmptyResponse)?;

        info!(
            "Received response from Gemini ({:?}, {} chars)",
            start_time.elapsed(),
            text.len()
        );
        Ok(text)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GoogleRequest {
    contents: Vec<GoogleContent>,
    generation_config: GoogleGenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
struct GoogleContent {
    parts: Vec<GooglePart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

/// Часть запроса: текст или встроенное изображение
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl GooglePart {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// base64 без префикса data URL
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GoogleGenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    candidates: Vec<GoogleCandidate>,
}

#[derive(Debug, Deserialize)]
struct GoogleCandidate {
    content: Option<GoogleResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GoogleResponseContent {
    #[serde(default)]
    parts: Vec<GoogleResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GoogleResponsePart {
    text: Option<String>,
}
