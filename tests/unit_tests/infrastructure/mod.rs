mod answer_sanitizer_test;
mod factory_test;
mod google_tts_chunking_test;
mod tracing_config_test;
