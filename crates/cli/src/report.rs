//! Command Output
//!
//! Prints what the admin page would show after an action: the flash message,
//! the form controls and, after a search, the results table.

use std::io;

use promotions_admin::prelude::*;

use crate::config::Action;

/// Write the controller's visible state to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) fn write_report<A: PromotionsApi>(
    mut out: impl io::Write,
    controller: &PromotionsController<A>,
    action: Action,
) -> io::Result<()> {
    if let Some(flash) = controller.flash() {
        writeln!(out, "{flash}")?;
    }

    let form = controller.form();
    let version = controller.version();

    writeln!(out, "id: {}", form.get(FormField::Id))?;

    for field in version.fields() {
        writeln!(out, "{}: {}", version.key(*field), form.get(*field))?;
    }

    if action == Action::Search
        && let Some(table) = controller.results()
    {
        table.write_to(&mut out)?;
    }

    Ok(())
}
