//! Promotions Controller
//!
//! Owns the form, the flash message and the results table, and runs the form
//! actions against a [`PromotionsApi`]. Actions borrow the controller
//! mutably, so one action finishes before the next can start.

use serde_json::Value;
use tracing::{info, warn};

use crate::{
    client::{ClientError, PromotionsApi},
    form::{FormField, FormState},
    query::{self, SearchCriteria},
    results::ResultsTable,
    schema::{self, SchemaVersion, display_value},
};

/// Flash message shown after a successful action.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Drives the promotion form for one schema version.
#[derive(Debug)]
pub struct PromotionsController<A> {
    api: A,
    version: SchemaVersion,
    form: FormState,
    flash: Option<String>,
    results: Option<ResultsTable>,
}

impl<A: PromotionsApi> PromotionsController<A> {
    /// Create a controller with an empty form.
    pub fn new(api: A, version: SchemaVersion) -> Self {
        Self {
            api,
            version,
            form: FormState::new(),
            flash: None,
            results: None,
        }
    }

    /// Schema version the form is mapped with.
    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Current form values.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access for user edits.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Last flash message, if any.
    pub fn flash(&self) -> Option<&str> {
        self.flash.as_deref()
    }

    /// Table from the last successful search.
    pub fn results(&self) -> Option<&ResultsTable> {
        self.results.as_ref()
    }

    /// Create a promotion from the form.
    ///
    /// On success the form is refilled from the created record, which
    /// captures the assigned `id`. On failure the form is left as is.
    ///
    /// # Errors
    ///
    /// Returns the failure that was flashed.
    pub async fn create(&mut self) -> Result<(), ClientError> {
        let payload = schema::to_payload(&self.form, self.version);

        match self.api.create(&payload).await {
            Ok(record) => {
                self.form = schema::to_form_state(&record, self.version);

                info!(id = self.form.get(FormField::Id), "promotion created");

                self.flash_message(SUCCESS_MESSAGE);

                Ok(())
            }
            Err(error) => Err(self.fail("create", error)),
        }
    }

    /// Update the promotion addressed by the form's `id`.
    ///
    /// The `id` is not validated; a bad one is reported by the server.
    ///
    /// # Errors
    ///
    /// Returns the failure that was flashed.
    pub async fn update(&mut self) -> Result<(), ClientError> {
        let id = self.form.get(FormField::Id).to_string();
        let payload = schema::to_payload(&self.form, self.version);

        match self.api.update(&id, &payload).await {
            Ok(record) => {
                self.form = schema::to_form_state(&record, self.version);

                info!(%id, "promotion updated");

                self.flash_message(SUCCESS_MESSAGE);

                Ok(())
            }
            Err(error) => Err(self.fail("update", error)),
        }
    }

    /// Load the promotion addressed by the form's `id`.
    ///
    /// A failed lookup clears the whole form.
    ///
    /// # Errors
    ///
    /// Returns the failure that was flashed.
    pub async fn retrieve(&mut self) -> Result<(), ClientError> {
        let id = self.form.get(FormField::Id).to_string();

        match self.api.retrieve(&id).await {
            Ok(record) => {
                self.form = schema::to_form_state(&record, self.version);

                info!(%id, "promotion retrieved");

                self.flash_message(SUCCESS_MESSAGE);

                Ok(())
            }
            Err(error) => {
                self.form.clear();

                Err(self.fail("retrieve", error))
            }
        }
    }

    /// Delete the promotion addressed by the form's `id`.
    ///
    /// # Errors
    ///
    /// Returns the failure that was flashed, always the generic one.
    pub async fn delete(&mut self) -> Result<(), ClientError> {
        let id = self.form.get(FormField::Id).to_string();

        match self.api.delete(&id).await {
            Ok(record) => {
                let deleted = deleted_id(&record, &id);

                self.form.clear();

                info!(id = %deleted, "promotion deleted");

                self.flash_message(format!("Promotion with ID [{deleted}] has been Deleted!"));

                Ok(())
            }
            Err(error) => {
                warn!(%id, "delete failed: {error}");

                Err(self.fail("delete", ClientError::Unspecified))
            }
        }
    }

    /// Reset `id` and every mapped field. No request is made.
    pub fn clear(&mut self) {
        self.form.clear();
    }

    /// Search with the criteria in the form and replace the results table.
    ///
    /// A failed search keeps the previous table.
    ///
    /// # Errors
    ///
    /// Returns the failure that was flashed.
    pub async fn search(&mut self) -> Result<(), ClientError> {
        let criteria = SearchCriteria::from_form(&self.form, self.version);
        let query = query::build(&criteria, self.version);

        match self.api.search(&query).await {
            Ok(records) => {
                let table = ResultsTable::from_records(&records, self.version);

                info!(%query, rows = table.len(), "promotions found");

                self.results = Some(table);
                self.flash_message(SUCCESS_MESSAGE);

                Ok(())
            }
            Err(error) => Err(self.fail("search", error)),
        }
    }

    fn flash_message(&mut self, message: impl Into<String>) {
        self.flash = Some(message.into());
    }

    fn fail(&mut self, action: &str, error: ClientError) -> ClientError {
        warn!(action, status = ?error.status(), "promotion request failed: {error}");

        self.flash_message(error.to_string());

        error
    }
}

fn deleted_id(record: &Value, requested: &str) -> String {
    let id = display_value(record.get("id"));

    if id.is_empty() {
        requested.to_string()
    } else {
        id
    }
}
