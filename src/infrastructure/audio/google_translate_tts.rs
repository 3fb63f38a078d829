use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};

pub const DEFAULT_GOOGLE_TTS_URL: &str = "https://translate.google.com";
/// The endpoint rejects longer `q` parameters.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Speech from the Google Translate TTS endpoint. Long texts are split into
/// word-aligned chunks and the returned MP3 streams are concatenated.
pub struct GoogleTranslateTts {
    client: Client,
    base_url: String,
    language: String,
}

impl GoogleTranslateTts {
    pub fn new(
        base_url: Option<String>,
        language: String,
        timeout: Duration,
    ) -> Result<Self, SpeechSynthesisError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0")
            .build()
            .map_err(|e| SpeechSynthesisError::Misconfigured(format!("client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_GOOGLE_TTS_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            language,
        })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SpeechSynthesisError> {
        let url = format!("{}/translate_tts", self.base_url);
        let index = index.to_string();
        let total = total.to_string();
        let text_len = chunk.chars().count().to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.language.as_str()),
                ("q", chunk),
                ("idx", index.as_str()),
                ("total", total.as_str()),
                ("textlen", text_len.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechSynthesisError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechSynthesisError::InvalidResponse(e.to_string()))?;

        if audio.is_empty() {
            return Err(SpeechSynthesisError::InvalidResponse(
                "empty audio chunk".to_string(),
            ));
        }

        Ok(audio.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechSynthesisError> {
        let chunks = split_into_chunks(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechSynthesisError::EmptyText);
        }

        tracing::debug!(
            chunks = chunks.len(),
            language = %self.language,
            "Requesting Google TTS audio"
        );

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            audio.extend(self.fetch_chunk(chunk, index, chunks.len()).await?);
        }

        Ok(audio)
    }
}

/// Splits text on whitespace into chunks of at most `max_chars` characters.
/// A single word longer than the limit is cut at character boundaries.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
