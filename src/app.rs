// Runs load -> fetch -> check -> render once. The first failure stops the
// run; nothing reaches `out` unless every earlier stage succeeded.

use std::io::Write;

use tracing::debug;

use crate::api::ApiClient;
use crate::config;
use crate::error::AppError;
use crate::ui;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Run the whole pipeline and return the process exit code. Failures are
/// reported on `err` as `[ERROR] ...` lines.
pub fn run<O: Write, E: Write>(
    token: Option<String>,
    base_url: &str,
    out: &mut O,
    err: &mut E,
) -> u8 {
    match execute(token, base_url, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(error = ?e, "account info run failed");
            for line in e.diagnostics() {
                let _ = writeln!(err, "[ERROR] {}", line);
            }
            let _ = err.flush();
            EXIT_FAILURE
        }
    }
}

fn execute<O: Write>(token: Option<String>, base_url: &str, out: &mut O) -> Result<(), AppError> {
    let token = config::token_from(token)?;
    let api = ApiClient::new(base_url)?;

    let spinner = ui::fetch_spinner();
    let fetched = api.fetch_account_info(&token);
    spinner.finish_and_clear();

    let info = fetched?;
    debug!(action = %info.action, errors = info.errors.len(), "decoded account info");
    let data = info.into_checked()?;

    ui::render_account(out, &data)?;
    Ok(())
}
