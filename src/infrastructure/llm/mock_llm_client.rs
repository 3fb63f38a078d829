use crate::application::ports::{LlmClient, LlmClientError};

/// Replies with a canned follow-up question regardless of the prompt.
pub struct MockLlmClient {
    reply: String,
}

impl MockLlmClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new("Can you walk me through a specific example of that?")
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str, _context: &str) -> Result<String, LlmClientError> {
        Ok(self.reply.clone())
    }
}
