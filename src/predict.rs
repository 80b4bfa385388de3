use crate::models::{PredictRequest, Prediction};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("prediction request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("prediction response was not a recognised body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("prediction task ended before producing a response")]
    Aborted,
}

/// The remote sentiment service.
pub trait Predictor: Send + Sync + 'static {
    fn predict(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Prediction, TransportError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPredictor {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Predictor for HttpPredictor {
    async fn predict(&self, text: &str) -> Result<Prediction, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { text })
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "prediction response received");

        Ok(serde_json::from_slice(&body)?)
    }
}
