use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};

/// "Speaks" by returning the UTF-8 bytes of the text, so callers can read back
/// exactly what would have been said.
pub struct MockSpeechSynthesizer;

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechSynthesisError> {
        Ok(text.as_bytes().to_vec())
    }
}
