//! Form State
//!
//! In-memory mirror of the promotion form controls. Every value is kept as the
//! literal string the control holds; nothing is parsed or normalised here.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A control on the promotion form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Server-assigned identifier, only used for addressing.
    Id,

    /// Promotion name (`name` in v1, `promo_name` in v2).
    Name,

    /// Name of the goods on promotion.
    GoodsName,

    /// Price of the goods.
    Price,

    /// Discount percentage.
    Discount,

    /// Category the promotion belongs to.
    Category,

    /// Availability literal (`true`/`false` or `True`/`False`).
    Available,
}

impl FormField {
    /// Every control on the form, in display order.
    pub const ALL: [FormField; 7] = [
        FormField::Id,
        FormField::Name,
        FormField::GoodsName,
        FormField::Price,
        FormField::Discount,
        FormField::Category,
        FormField::Available,
    ];

    /// Control key as used by the form.
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::Name => "name",
            FormField::GoodsName => "goods_name",
            FormField::Price => "price",
            FormField::Discount => "discount",
            FormField::Category => "category",
            FormField::Available => "available",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Current values of the promotion form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    id: String,
    name: String,
    goods_name: String,
    price: String,
    discount: String,
    category: String,
    available: String,
}

impl FormState {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a control.
    pub fn get(&self, field: FormField) -> &str {
        self.slot(field)
    }

    /// Replace the value of a control.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Builder-style variant of [`FormState::set`].
    #[must_use]
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Reset every control, including `id`, to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every control is empty.
    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    fn slot(&self, field: FormField) -> &String {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::GoodsName => &self.goods_name,
            FormField::Price => &self.price,
            FormField::Discount => &self.discount,
            FormField::Category => &self.category,
            FormField::Available => &self.available,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Id => &mut self.id,
            FormField::Name => &mut self.name,
            FormField::GoodsName => &mut self.goods_name,
            FormField::Price => &mut self.price,
            FormField::Discount => &mut self.discount,
            FormField::Category => &mut self.category,
            FormField::Available => &mut self.available,
        }
    }
}
