// Entrypoint for the CLI application.
// - Keeps `main` small: install logging, read the token and hand the
//   standard streams to `app::run`.
// - Returns `anyhow::Result` so a logging setup failure is reported too.

use std::io;
use std::process::ExitCode;

use anyhow::anyhow;
use linode_account_info::{app, config};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout carries nothing but the table.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    let token = std::env::var(config::TOKEN_VAR).ok();
    let code = app::run(
        token,
        &config::default_base_url(),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    Ok(ExitCode::from(code))
}
