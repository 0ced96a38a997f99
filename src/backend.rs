use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use crate::data_models::{SearchOutcome, SearchRequest};
use crate::error::{FrontendError, Result};

/// Anything that can answer a search request. The frontend only ever talks
/// to the backend through this trait.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome>;
}

/// The external search service, reached with `POST <endpoint>` and a JSON body.
pub struct HttpSearchBackend {
    client: Client,
    endpoint: String,
}

impl HttpSearchBackend {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The error body is never inspected; its shape is not part of the contract.
            tracing::warn!(%status, query = %request.query, method = %request.method, "search backend failed");
            return Err(FrontendError::Status(status));
        }

        let body = response.bytes().await?;
        let outcome = decode_outcome(&body)?;

        tracing::info!(
            query = %request.query,
            method = %request.method,
            results = outcome.results.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search backend answered"
        );
        Ok(outcome)
    }
}

/// Decodes a success body. Only a JSON object is accepted; a missing
/// `resultados` field means zero results.
pub fn decode_outcome(body: &[u8]) -> Result<SearchOutcome> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(FrontendError::UnexpectedShape(format!(
            "expected a JSON object, got {value}"
        )));
    }
    Ok(serde_json::from_value(value)?)
}

#[test]
fn test_decode_outcome_shapes() {
    let outcome = decode_outcome(br#"{"numero_resultados": 0}"#).unwrap();
    assert!(outcome.results.is_empty());

    assert!(matches!(
        decode_outcome(b"[]"),
        Err(FrontendError::UnexpectedShape(_))
    ));
    assert!(matches!(
        decode_outcome(b"<html>oops</html>"),
        Err(FrontendError::Decode(_))
    ));
    assert!(matches!(
        decode_outcome(br#"{"resultados": [{"Titulo": "no content"}]}"#),
        Err(FrontendError::Decode(_))
    ));
}

#[test]
fn test_decode_numeric_document_name() {
    let outcome = decode_outcome(
        br#"{"resultados":[{"Nombre":42,"Titulo":"t","Contenido":"c","Similitud":0.5}]}"#,
    )
    .unwrap();
    assert_eq!(outcome.results[0].name.as_deref(), Some("42"));
    assert_eq!(outcome.results[0].key(0), "42");
    assert_eq!(outcome.find("42").unwrap().title, "t");
}
