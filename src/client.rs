//! Promotions resource client.

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

use crate::schema::Payload;

mod config;
mod endpoints;
mod errors;
mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use errors::ClientError;
pub use http::HttpPromotionsClient;

/// Operations on the remote promotions resource.
///
/// Each call resolves to exactly one outcome.
#[automock]
#[async_trait]
pub trait PromotionsApi: Send + Sync {
    /// `POST /promotions`; returns the created record including its `id`.
    async fn create(&self, payload: &Payload) -> Result<Value, ClientError>;

    /// `PUT /promotions/{id}`; returns the updated record.
    async fn update(&self, id: &str, payload: &Payload) -> Result<Value, ClientError>;

    /// `GET /promotions/{id}`.
    async fn retrieve(&self, id: &str) -> Result<Value, ClientError>;

    /// `DELETE /promotions/{id}`; returns the deleted record, or `null` for an
    /// empty body.
    ///
    /// Every failure is reported as [`ClientError::Unspecified`].
    async fn delete(&self, id: &str) -> Result<Value, ClientError>;

    /// `GET /promotions?{query}`; records in server order.
    async fn search(&self, query: &str) -> Result<Vec<Value>, ClientError>;

    /// `GET /health`; the reported service status.
    async fn health(&self) -> Result<String, ClientError>;
}
