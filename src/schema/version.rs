//! Schema Versions

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

use crate::form::FormField;

const V1_FIELDS: &[FormField] = &[FormField::Name, FormField::Category, FormField::Available];

const V2_FIELDS: &[FormField] = &[
    FormField::Name,
    FormField::GoodsName,
    FormField::Price,
    FormField::Discount,
    FormField::Category,
    FormField::Available,
];

/// Returned when a schema version string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown schema version `{0}`, expected `v1` or `v2`")]
pub struct ParseSchemaVersionError(String);

/// Promotion resource schema contract.
///
/// Each version fixes the payload field set, the name key, the literal casing
/// used for `available` in the form and the search parameter for availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemaVersion {
    /// `name`, `category`, `available`.
    V1,

    /// `promo_name`, `goods_name`, `price`, `discount`, `category`, `available`.
    #[default]
    V2,
}

impl SchemaVersion {
    /// Form controls carried in the resource payload, `id` excluded.
    pub fn fields(self) -> &'static [FormField] {
        match self {
            SchemaVersion::V1 => V1_FIELDS,
            SchemaVersion::V2 => V2_FIELDS,
        }
    }

    /// JSON key of a control in the resource payload.
    pub fn key(self, field: FormField) -> &'static str {
        match (self, field) {
            (SchemaVersion::V2, FormField::Name) => "promo_name",
            _ => field.as_str(),
        }
    }

    /// JSON key holding the promotion name.
    pub fn name_key(self) -> &'static str {
        self.key(FormField::Name)
    }

    /// Literal the `available` control holds for `true`.
    pub fn true_literal(self) -> &'static str {
        match self {
            SchemaVersion::V1 => "true",
            SchemaVersion::V2 => "True",
        }
    }

    /// Literal the `available` control holds for `false`.
    pub fn false_literal(self) -> &'static str {
        match self {
            SchemaVersion::V1 => "false",
            SchemaVersion::V2 => "False",
        }
    }

    /// Form literal for a boolean.
    pub fn available_literal(self, available: bool) -> &'static str {
        if available {
            self.true_literal()
        } else {
            self.false_literal()
        }
    }

    /// Strict, case-sensitive comparison against [`SchemaVersion::true_literal`].
    ///
    /// Anything else, including the other version's literal, is `false`.
    pub fn is_available(self, literal: &str) -> bool {
        literal == self.true_literal()
    }

    /// Query parameter used to filter search results by availability.
    pub fn availability_param(self) -> &'static str {
        match self {
            SchemaVersion::V1 => "available",
            SchemaVersion::V2 => "availability",
        }
    }
}

impl Display for SchemaVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SchemaVersion::V1 => f.write_str("v1"),
            SchemaVersion::V2 => f.write_str("v2"),
        }
    }
}

impl FromStr for SchemaVersion {
    type Err = ParseSchemaVersionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(SchemaVersion::V1),
            "v2" | "2" => Ok(SchemaVersion::V2),
            _ => Err(ParseSchemaVersionError(value.to_string())),
        }
    }
}
