// UI layer: the progress spinner shown while the request is in flight and
// the aligned label/value table printed once the account data is in hand.

use std::io::{self, Write};
use std::time::Duration;

use indicatif::ProgressBar;

use crate::api::AccountData;

/// Smallest width of the label column, padding included.
const MIN_CELL_WIDTH: usize = 4;
/// Spaces between the widest label and the value column.
const CELL_PADDING: usize = 1;

/// Spinner drawn on stderr. indicatif hides it when stderr is not a
/// terminal, so piped output stays clean.
pub fn fetch_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching account info...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Labels and formatted values, in display order.
pub fn account_rows(data: &AccountData) -> Vec<(&'static str, String)> {
    vec![
        ("ActiveSince", data.active_since.clone()),
        ("Balance", data.balance.to_string()),
        ("Managed", data.managed.to_string()),
        (
            "TransferUsed",
            format!("{}/{} GB", data.transfer_used, data.transfer_pool),
        ),
        ("TransferBillable", data.transfer_billable.to_string()),
    ]
}

/// Write `label:` cells padded so every value starts in the same column,
/// then flush.
pub fn write_table<W: Write>(out: &mut W, rows: &[(&str, String)]) -> io::Result<()> {
    let width = rows
        .iter()
        .map(|(label, _)| label.len() + 1 + CELL_PADDING)
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH);

    for (label, value) in rows {
        let cell = format!("{}:", label);
        if value.is_empty() {
            writeln!(out, "{}", cell)?;
        } else {
            writeln!(out, "{:<width$}{}", cell, value, width = width)?;
        }
    }
    out.flush()
}

/// Render the account table.
pub fn render_account(out: &mut impl Write, data: &AccountData) -> io::Result<()> {
    write_table(out, &account_rows(data))
}
