//! HTTP client for the promotions service.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    client::{ClientConfig, ClientError, PromotionsApi, endpoints::Endpoints},
    schema::Payload,
};

/// [`PromotionsApi`] over JSON/HTTP.
///
/// Every call sends exactly one request. Nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct HttpPromotionsClient {
    endpoints: Endpoints,
    http: Client,
}

impl HttpPromotionsClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoints: Endpoints::new(&config.base_url),
            http: builder.build()?,
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        read_body(status, &body)
    }
}

#[async_trait]
impl PromotionsApi for HttpPromotionsClient {
    async fn create(&self, payload: &Payload) -> Result<Value, ClientError> {
        let url = self.endpoints.collection();

        debug!(%url, "POST promotion");

        self.send(self.http.post(&url).json(payload)).await
    }

    async fn update(&self, id: &str, payload: &Payload) -> Result<Value, ClientError> {
        let url = self.endpoints.member(id);

        debug!(%url, "PUT promotion");

        self.send(self.http.put(&url).json(payload)).await
    }

    async fn retrieve(&self, id: &str) -> Result<Value, ClientError> {
        let url = self.endpoints.member(id);

        debug!(%url, "GET promotion");

        self.send(self.http.get(&url)).await
    }

    async fn delete(&self, id: &str) -> Result<Value, ClientError> {
        let url = self.endpoints.member(id);

        debug!(%url, "DELETE promotion");

        self.send(self.http.delete(&url)).await.map_err(|error| {
            warn!(%url, "delete failed: {error}");

            ClientError::Unspecified
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<Value>, ClientError> {
        let url = self.endpoints.search(query);

        debug!(%url, "GET promotions");

        into_records(self.send(self.http.get(&url)).await?)
    }

    async fn health(&self) -> Result<String, ClientError> {
        let url = self.endpoints.health();

        debug!(%url, "GET health");

        let body = self.send(self.http.get(&url)).await?;

        Ok(body
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Interpret a response status and body.
///
/// An empty success body reads as `null`. Failures carry the body's `message`
/// field, falling back to the status text.
pub(crate) fn read_body(status: StatusCode, body: &[u8]) -> Result<Value, ClientError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|error| error.message)
            .unwrap_or_else(|| status.to_string());

        return Err(ClientError::Server { status, message });
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_slice(body)?)
}

/// Records of a list response, in server order.
pub(crate) fn into_records(body: Value) -> Result<Vec<Value>, ClientError> {
    match body {
        Value::Array(records) => Ok(records),
        Value::Null => Ok(Vec::new()),
        _ => Err(ClientError::NotAList),
    }
}
