use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use interviewer::application::ports::SessionStore;
use interviewer::application::services::{InterviewService, SignalScorer};
use interviewer::infrastructure::audio::SpeechSynthesizerFactory;
use interviewer::infrastructure::llm::QuestionGeneratorFactory;
use interviewer::infrastructure::observability::{TracingConfig, init_tracing};
use interviewer::infrastructure::persistence::InMemorySessionStore;
use interviewer::infrastructure::sentiment::SentimentClassifierFactory;
use interviewer::infrastructure::vision::EmotionDetectorFactory;
use interviewer::presentation::config::SessionSettings;
use interviewer::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let rules = settings.interview.rules();

    // Models load here, before the listener binds, so no request waits on them.
    let sentiment_classifier = SentimentClassifierFactory::create(&settings.sentiment)
        .context("Failed to initialize sentiment classifier")?;
    let emotion_detector = EmotionDetectorFactory::create(&settings.emotion)
        .context("Failed to initialize emotion detector")?;
    let question_generator = QuestionGeneratorFactory::create(&settings.llm)
        .context("Failed to initialize question generator")?;
    let speech_synthesizer = SpeechSynthesizerFactory::create(&settings.speech)
        .context("Failed to initialize speech synthesizer")?;

    let session_store: Arc<dyn SessionStore> = Arc::new(
        InMemorySessionStore::with_max_sessions(settings.session.max_sessions),
    );

    let interview_service = Arc::new(InterviewService::new(
        Arc::clone(&session_store),
        SignalScorer::new(sentiment_classifier, emotion_detector, &rules),
        question_generator,
        speech_synthesizer,
        rules,
    ));

    tokio::spawn(sweep_idle_sessions(
        Arc::clone(&session_store),
        settings.session.clone(),
    ));

    let state = AppState {
        interview_service,
        session_store,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    tracing::info!(
        %addr,
        environment = %environment,
        max_turns = settings.interview.max_turns,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn sweep_idle_sessions(session_store: Arc<dyn SessionStore>, settings: SessionSettings) {
    let idle_timeout = chrono::Duration::from_std(Duration::from_secs(settings.idle_timeout_secs))
        .unwrap_or(chrono::Duration::MAX);
    let mut interval =
        tokio::time::interval(Duration::from_secs(settings.sweep_interval_secs.max(1)));

    loop {
        interval.tick().await;
        let Some(cutoff) = chrono::Utc::now().checked_sub_signed(idle_timeout) else {
            continue;
        };
        match session_store.evict_idle(cutoff).await {
            Ok(0) => {}
            Ok(evicted) => tracing::info!(evicted, "Evicted idle sessions"),
            Err(e) => tracing::warn!(error = %e, "Idle session sweep failed"),
        }
    }
}
