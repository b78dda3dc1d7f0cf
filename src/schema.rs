//! Schema Mapping
//!
//! Converts between the flat [`FormState`] and the JSON representation of a
//! promotion for a given [`SchemaVersion`].

use serde_json::{Map, Value};

use crate::form::{FormField, FormState};

mod version;

pub use version::{ParseSchemaVersionError, SchemaVersion};

/// JSON payload of a single promotion.
pub type Payload = Map<String, Value>;

/// Build the request payload for `version` from the form.
///
/// Only the fields the version defines are written, and `id` never is. Text
/// controls are sent exactly as typed; `available` is `true` only when the
/// control holds the version's true literal.
pub fn to_payload(form: &FormState, version: SchemaVersion) -> Payload {
    version
        .fields()
        .iter()
        .map(|&field| {
            let value = match field {
                FormField::Available => Value::Bool(version.is_available(form.get(field))),
                _ => Value::String(form.get(field).to_string()),
            };

            (version.key(field).to_string(), value)
        })
        .collect()
}

/// Fill a form from a promotion payload.
///
/// Missing or malformed fields become empty controls. `available` is written
/// as the version's true literal only for a JSON `true`.
pub fn to_form_state(payload: &Value, version: SchemaVersion) -> FormState {
    let mut form = FormState::new();

    form.set(FormField::Id, display_value(payload.get("id")));

    for &field in version.fields() {
        let value = payload.get(version.key(field));

        let text = match field {
            FormField::Available => version
                .available_literal(matches!(value, Some(Value::Bool(true))))
                .to_string(),
            _ => display_value(value),
        };

        form.set(field, text);
    }

    form
}

/// Text a JSON value shows in a form control or table cell.
pub(crate) fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
