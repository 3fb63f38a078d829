mod google_translate_tts;
mod mock_speech_synthesizer;
mod openai_speech_synthesizer;
mod speech_synthesizer_factory;

pub use google_translate_tts::{
    DEFAULT_GOOGLE_TTS_URL, GoogleTranslateTts, MAX_CHUNK_CHARS, split_into_chunks,
};
pub use mock_speech_synthesizer::MockSpeechSynthesizer;
pub use openai_speech_synthesizer::OpenAiSpeechSynthesizer;
pub use speech_synthesizer_factory::SpeechSynthesizerFactory;
