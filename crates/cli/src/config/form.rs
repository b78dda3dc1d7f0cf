//! Form Values

use clap::Args;
use promotions_admin::form::{FormField, FormState};

/// Initial form values, one option per control.
#[derive(Debug, Args)]
pub(crate) struct FormArgs {
    /// Promotion id
    #[arg(long, global = true)]
    pub id: Option<String>,

    /// Promotion name
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Goods on promotion (v2)
    #[arg(long, global = true)]
    pub goods_name: Option<String>,

    /// Price of the goods (v2)
    #[arg(long, global = true)]
    pub price: Option<String>,

    /// Discount percentage (v2)
    #[arg(long, global = true)]
    pub discount: Option<String>,

    /// Category
    #[arg(long, global = true)]
    pub category: Option<String>,

    /// Availability as the form holds it: true/false (v1) or True/False (v2)
    #[arg(long, global = true)]
    pub available: Option<String>,
}

impl FormArgs {
    /// Form with the given controls filled in, verbatim.
    pub(crate) fn into_form_state(self) -> FormState {
        let values = [
            (FormField::Id, self.id),
            (FormField::Name, self.name),
            (FormField::GoodsName, self.goods_name),
            (FormField::Price, self.price),
            (FormField::Discount, self.discount),
            (FormField::Category, self.category),
            (FormField::Available, self.available),
        ];

        let mut form = FormState::new();

        for (field, value) in values {
            if let Some(value) = value {
                form.set(field, value);
            }
        }

        form
    }
}
