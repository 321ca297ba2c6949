//! Shared fixtures for the integration suite.

use gistmark::EvaluationRequest;

pub const REFERENCE_TEXT: &str = "Artificial intelligence has revolutionized the way we \
     interact with technology. Machine learning algorithms process vast amounts of data to \
     identify patterns and make predictions. Deep learning, a subset of machine learning, \
     uses neural networks to model complex relationships. These technologies are applied \
     across healthcare, finance, and transportation.";

pub const CANDIDATE_TEXT: &str = "AI uses machine learning and deep learning to process \
     data and make predictions. It is used in healthcare, finance, and transportation.";

pub fn request() -> EvaluationRequest {
    EvaluationRequest::new(REFERENCE_TEXT, CANDIDATE_TEXT, "detailed")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gistmark=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
