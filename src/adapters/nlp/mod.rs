//! NLP Strategy Adapters.
//!
//! Implementations of the sentiment, entity and risk strategy ports.
//!
//! ## Available Adapters
//!
//! - `KeywordSentimentStrategy`, `RegexEntityStrategy`, `HeuristicRiskStrategy` - rule-based, infallible
//! - `RemoteSentimentStrategy` - hosted text classifier
//! - `RemoteEntityStrategy` - hosted token classifier with simple aggregation
//! - `LogisticRiskStrategy` - fixed-parameter logistic model
//! - `Mock*Strategy` - configurable mocks for testing

mod basic;
mod inference_client;
mod logistic_risk;
mod mock;
mod remote_entities;
mod remote_sentiment;

pub use basic::{HeuristicRiskStrategy, KeywordSentimentStrategy, RegexEntityStrategy};
pub use inference_client::{truncate_chars, InferenceClient, InferenceConfig, DEFAULT_MAX_INPUT_CHARS};
pub use logistic_risk::{LogisticRiskStrategy, RiskModelError, RiskModelParams};
pub use mock::{MockEntityStrategy, MockRiskStrategy, MockSentimentStrategy};
pub use remote_entities::RemoteEntityStrategy;
pub use remote_sentiment::RemoteSentimentStrategy;

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;

    /// Serves `router` on an ephemeral local port and returns its base URL.
    pub async fn spawn_model_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/", addr)
    }
}
