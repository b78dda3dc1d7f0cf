//! Promotions Admin
//!
//! Administrative client for the promotions REST resource. Keeps a form in
//! sync with the resource's JSON representation across create, retrieve,
//! update, delete and search, for both the v1 and v2 schemas.

pub mod client;
pub mod controller;
pub mod form;
pub mod prelude;
pub mod query;
pub mod results;
pub mod schema;
