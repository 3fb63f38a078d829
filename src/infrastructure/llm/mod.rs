mod llm_question_generator;
mod mock_llm_client;
mod openai_client;
mod question_generator_factory;

pub use llm_question_generator::LlmQuestionGenerator;
pub use mock_llm_client::MockLlmClient;
pub use openai_client::OpenAiClient;
pub use question_generator_factory::QuestionGeneratorFactory;
