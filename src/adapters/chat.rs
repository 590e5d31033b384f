use crate::config::ChatProviderConfig;
use crate::domain::ports::ChatProvider;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use std::sync::OnceLock;

const SYSTEM_PROMPT: &str = "You are AquaBot, an AI assistant for fishermen. \
Respond only in plain text paragraphs: no tables, no headings, no bullet \
points unless the user explicitly asks. Keep answers conversational, calm \
and practical, at most 6-8 sentences unless asked for more.";

/// Strip markdown artifacts the providers emit despite the prompt rules:
/// tables, headings, list markers, numbered steps, stacked blank lines.
pub fn clean_reply(text: &str) -> String {
    static TABLE: OnceLock<Regex> = OnceLock::new();
    static HEADING: OnceLock<Regex> = OnceLock::new();
    static LIST_MARKER: OnceLock<Regex> = OnceLock::new();
    static NUMBERED: OnceLock<Regex> = OnceLock::new();
    static BLANK_RUNS: OnceLock<Regex> = OnceLock::new();

    let table = TABLE.get_or_init(|| Regex::new(r"\|.*\|").unwrap());
    let heading = HEADING.get_or_init(|| Regex::new(r"(?m)^#+\s.*$").unwrap());
    let list_marker = LIST_MARKER.get_or_init(|| Regex::new(r"[-*•✔️✅]").unwrap());
    let numbered = NUMBERED.get_or_init(|| Regex::new(r"\d+\.\s+").unwrap());
    let blank_runs = BLANK_RUNS.get_or_init(|| Regex::new(r"\n{2,}").unwrap());

    let text = table.replace_all(text, "");
    let text = heading.replace_all(&text, "");
    let text = list_marker.replace_all(&text, "");
    let text = numbered.replace_all(&text, "");
    let text = blank_runs.replace_all(&text, "\n\n");
    text.trim().to_string()
}

pub struct GeminiChat {
    client: Client,
    config: ChatProviderConfig,
}

impl GeminiChat {
    pub fn new(config: ChatProviderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ChatProvider for GeminiChat {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn reply(&self, message: &str) -> Result<String> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::upstream("gemini", "no API key configured"))?;

        let url = format!(
            "{}/v1/models/gemini-1.5-flash:generateContent",
            self.config.base_url
        );
        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": format!("{SYSTEM_PROMPT}\n\nUSER MESSAGE:\n{message}")}],
            }],
            "generationConfig": {"temperature": 0.6, "maxOutputTokens": 300},
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&body)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| ApiError::upstream("gemini", e))?;

        if !response.status().is_success() {
            return Err(ApiError::upstream(
                "gemini",
                format!("status {}", response.status()),
            ));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| ApiError::upstream("gemini", format!("malformed response: {e}")))?;

        let text = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| ApiError::upstream("gemini", "empty completion"))?;

        Ok(clean_reply(text))
    }
}

pub struct GroqChat {
    client: Client,
    config: ChatProviderConfig,
}

impl GroqChat {
    pub fn new(config: ChatProviderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ChatProvider for GroqChat {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn reply(&self, message: &str) -> Result<String> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::upstream("groq", "no API key configured"))?;

        let url = format!("{}/openai/v1/chat/completions", self.config.base_url);
        let body = serde_json::json!({
            "model": "openai/gpt-oss-20b",
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": message},
            ],
            "temperature": 0.7,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(key)
            .json(&body)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| ApiError::upstream("groq", e))?;

        if !response.status().is_success() {
            return Err(ApiError::upstream(
                "groq",
                format!("status {}", response.status()),
            ));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| ApiError::upstream("groq", format!("malformed response: {e}")))?;

        let text = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| ApiError::upstream("groq", "empty completion"))?;

        Ok(clean_reply(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn provider_config(server: &MockServer, key: Option<&str>) -> ChatProviderConfig {
        ChatProviderConfig {
            base_url: server.base_url(),
            api_key: key.map(str::to_string),
            timeout: Duration::from_secs(2),
        }
    }

    #[test]
    fn clean_reply_strips_markdown_artifacts() {
        let raw = "# Catch Report\n\n| fish | price |\n- Mackerel is running\n1. head out early\n\n\n\nGood luck";
        let cleaned = clean_reply(raw);

        assert!(!cleaned.contains('#'));
        assert!(!cleaned.contains('|'));
        assert!(!cleaned.contains("- "));
        assert!(!cleaned.contains("1. "));
        assert!(!cleaned.contains("\n\n\n"));
        assert!(cleaned.ends_with("Good luck"));
    }

    #[test]
    fn clean_reply_keeps_plain_text() {
        let raw = "Early morning is best. Stay near the reef.";
        assert_eq!(clean_reply(raw), raw);
    }

    #[tokio::test]
    async fn gemini_extracts_candidate_text() {
        let server = MockServer::start();
        let gemini_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/models/gemini-1.5-flash:generateContent")
                .query_param("key", "g-key");
            then.status(200).json_body(serde_json::json!({
                "candidates": [{
                    "content": {"parts": [{"text": "Calm seas today."}]},
                }],
            }));
        });

        let chat = GeminiChat::new(provider_config(&server, Some("g-key")));
        let reply = chat.reply("how are conditions?").await.unwrap();

        gemini_mock.assert();
        assert_eq!(reply, "Calm seas today.");
    }

    #[tokio::test]
    async fn groq_extracts_choice_text() {
        let server = MockServer::start();
        let groq_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/openai/v1/chat/completions")
                .header("authorization", "Bearer q-key");
            then.status(200).json_body(serde_json::json!({
                "choices": [{"message": {"content": "Watch the wind this evening."}}],
            }));
        });

        let chat = GroqChat::new(provider_config(&server, Some("q-key")));
        let reply = chat.reply("wind forecast?").await.unwrap();

        groq_mock.assert();
        assert_eq!(reply, "Watch the wind this evening.");
    }

    #[tokio::test]
    async fn missing_key_never_hits_the_network() {
        let server = MockServer::start();
        let chat = GeminiChat::new(provider_config(&server, None));
        let err = chat.reply("hello").await.unwrap_err();
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn provider_error_is_upstream() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/openai/v1/chat/completions");
            then.status(429);
        });

        let chat = GroqChat::new(provider_config(&server, Some("q-key")));
        let err = chat.reply("hello").await.unwrap_err();
        assert!(err.is_upstream());
    }
}
