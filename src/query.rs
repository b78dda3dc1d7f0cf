//! Search Query
//!
//! Builds the query string for the promotion list endpoint. Criteria are
//! always emitted in the order `name`, `category`, availability.
//!
//! Availability is only ever sent as the version's true literal, so a search
//! cannot ask for unavailable promotions.

use smallvec::SmallVec;
use urlencoding::encode;

use crate::{
    form::{FormField, FormState},
    schema::SchemaVersion,
};

/// Sparse set of search criteria read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Exact promotion name.
    pub name: Option<String>,

    /// Exact category.
    pub category: Option<String>,

    /// Only available promotions.
    pub available: bool,
}

impl SearchCriteria {
    /// Read criteria from the form.
    ///
    /// Empty text controls are left out; availability is set only when the
    /// control holds the version's true literal.
    pub fn from_form(form: &FormState, version: SchemaVersion) -> Self {
        Self {
            name: non_empty(form.get(FormField::Name)),
            category: non_empty(form.get(FormField::Category)),
            available: version.is_available(form.get(FormField::Available)),
        }
    }

    /// Whether no criterion is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && !self.available
    }
}

/// Compose the query string, without a leading `?`.
///
/// Values are percent-encoded, so user text never adds `&` or `=`
/// separators. No criteria yields an empty string.
pub fn build(criteria: &SearchCriteria, version: SchemaVersion) -> String {
    let mut pairs = SmallVec::<[String; 3]>::new();

    if let Some(name) = &criteria.name {
        pairs.push(format!("name={}", encode(name)));
    }

    if let Some(category) = &criteria.category {
        pairs.push(format!("category={}", encode(category)));
    }

    if criteria.available {
        pairs.push(format!(
            "{}={}",
            version.availability_param(),
            version.true_literal()
        ));
    }

    pairs.join("&")
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
