//! Promotions Admin prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    client::{ClientConfig, ClientError, HttpPromotionsClient, PromotionsApi},
    controller::{PromotionsController, SUCCESS_MESSAGE},
    form::{FormField, FormState},
    query::SearchCriteria,
    results::{ResultRow, ResultsTable},
    schema::{ParseSchemaVersionError, Payload, SchemaVersion},
};
