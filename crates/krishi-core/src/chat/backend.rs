//! HTTP collaborator that proxies chat and voice requests to the model.

use async_trait::async_trait;
use log::debug;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::{
    error::{KrishiError, Result},
    models::Language,
};

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "KRISHI_API_BASE_URL";

/// Base URL used when neither the builder nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Recorded audio handed to the voice endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub file_name: String,
}

impl AudioClip {
    /// A webm clip, the format browsers record by default.
    pub fn webm(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            media_type: "audio/webm".to_string(),
            file_name: "voice.webm".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Body of a successful `/chat` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub reply_ml: Option<String>,
    #[serde(default)]
    pub reply_en: Option<String>,
}

impl ChatReply {
    /// Non-empty reply in exactly `lang`.
    pub fn text_in(&self, lang: Language) -> Option<&str> {
        let text = match lang {
            Language::Malayalam => self.reply_ml.as_deref(),
            Language::English => self.reply_en.as_deref(),
        };
        text.filter(|t| !t.trim().is_empty())
    }

    /// Reply to show for a conversation in `lang`: the language's own field,
    /// then the generic `reply`, then the other language.
    pub fn best_text(&self, lang: Language) -> Option<&str> {
        self.text_in(lang)
            .or_else(|| self.reply.as_deref().filter(|t| !t.trim().is_empty()))
            .or_else(|| self.text_in(lang.other()))
    }
}

/// Body of a successful `/voice-demo` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VoiceReply {
    pub reply_ml: String,
    pub reply_en: String,
}

impl VoiceReply {
    /// Returns `(primary, secondary)` for a conversation in `lang`.
    pub fn split(self, lang: Language) -> (String, String) {
        match lang {
            Language::Malayalam => (self.reply_ml, self.reply_en),
            Language::English => (self.reply_en, self.reply_ml),
        }
    }
}

/// Remote model backend.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends a text message and returns the model's reply.
    async fn chat(&self, message: &str) -> Result<ChatReply>;

    /// Sends an optional audio clip with a prompt and returns both
    /// language renditions of the reply.
    async fn voice_demo(&self, audio: Option<&AudioClip>, prompt: &str) -> Result<VoiceReply>;
}

/// [`ChatBackend`] speaking JSON and multipart over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn builder() -> HttpBackendBuilder {
        HttpBackendBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    /// Turns a response into `T`, mapping non-2xx statuses to
    /// `KrishiError::Backend` with the raw body.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KrishiError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| KrishiError::transport("Failed to decode backend response", e))
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn chat(&self, message: &str) -> Result<ChatReply> {
        let url = self.endpoint("chat");
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| KrishiError::transport("Failed to reach chat endpoint", e))?;

        Self::decode(response).await
    }

    async fn voice_demo(&self, audio: Option<&AudioClip>, prompt: &str) -> Result<VoiceReply> {
        let url = self.endpoint("voice-demo");
        debug!("POST {url} (audio: {})", audio.is_some());

        let mut form = Form::new().text("prompt", prompt.to_string());
        if let Some(clip) = audio {
            let part = Part::bytes(clip.bytes.clone())
                .file_name(clip.file_name.clone())
                .mime_str(&clip.media_type)
                .map_err(|e| KrishiError::transport("Invalid audio media type", e))?;
            form = form.part("audio", part);
        }

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| KrishiError::transport("Failed to reach voice endpoint", e))?;

        Self::decode(response).await
    }
}

/// Builder for [`HttpBackend`].
#[derive(Debug, Clone, Default)]
pub struct HttpBackendBuilder {
    base_url: Option<String>,
}

impl HttpBackendBuilder {
    pub fn new() -> Self {
        Self { base_url: None }
    }

    /// Sets the base URL, e.g. `https://example.org/api`.
    ///
    /// If not specified, `KRISHI_API_BASE_URL` is consulted, then
    /// [`DEFAULT_BASE_URL`].
    pub fn with_base_url<S: Into<String>>(mut self, base_url: Option<S>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.into());
        }
        self
    }

    /// Builds the backend.
    ///
    /// # Errors
    ///
    /// Returns `KrishiError::Configuration` if the resolved base URL does not
    /// parse or the HTTP client cannot be created.
    pub fn build(self) -> Result<HttpBackend> {
        let base_url = resolve_base_url(self.base_url, std::env::var(BASE_URL_ENV).ok());
        Url::parse(&base_url).map_err(|e| KrishiError::Configuration {
            message: format!("Invalid backend base URL '{base_url}': {e}"),
        })?;

        let client = Client::builder()
            .build()
            .map_err(|e| KrishiError::Configuration {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(HttpBackend { client, base_url })
    }
}

/// Explicit value first, then the environment, then the default. Blank values
/// are ignored.
fn resolve_base_url(explicit: Option<String>, from_env: Option<String>) -> String {
    explicit
        .into_iter()
        .chain(from_env)
        .map(|url| url.trim().to_string())
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url_precedence() {
        assert_eq!(
            resolve_base_url(Some("http://a/api".into()), Some("http://b/api".into())),
            "http://a/api"
        );
        assert_eq!(
            resolve_base_url(None, Some("http://b/api".into())),
            "http://b/api"
        );
        assert_eq!(resolve_base_url(None, Some("  ".into())), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let err = HttpBackend::builder()
            .with_base_url(Some("not a url"))
            .build()
            .unwrap_err();
        assert!(matches!(err, KrishiError::Configuration { .. }));
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let backend = HttpBackend::builder()
            .with_base_url(Some("http://localhost:8000/api/"))
            .build()
            .expect("Failed to build backend");
        assert_eq!(backend.endpoint("chat"), "http://localhost:8000/api/chat");
    }

    #[test]
    fn test_best_text_fallbacks() {
        let reply = ChatReply {
            reply: Some("generic".into()),
            reply_ml: Some("മലയാളം".into()),
            reply_en: None,
        };
        assert_eq!(reply.best_text(Language::Malayalam), Some("മലയാളം"));
        assert_eq!(reply.best_text(Language::English), Some("generic"));

        let only_ml = ChatReply {
            reply_ml: Some("മലയാളം".into()),
            ..ChatReply::default()
        };
        assert_eq!(only_ml.best_text(Language::English), Some("മലയാളം"));

        let blank = ChatReply {
            reply: Some(" ".into()),
            ..ChatReply::default()
        };
        assert_eq!(blank.best_text(Language::English), None);
    }

    #[test]
    fn test_voice_reply_split() {
        let reply = VoiceReply {
            reply_ml: "ml".into(),
            reply_en: "en".into(),
        };
        assert_eq!(
            reply.clone().split(Language::English),
            ("en".to_string(), "ml".to_string())
        );
        assert_eq!(
            reply.split(Language::Malayalam),
            ("ml".to_string(), "en".to_string())
        );
    }
}
