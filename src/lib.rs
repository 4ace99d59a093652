// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) only sets up logging and hands the environment to `app::run`.
//
// Module responsibilities:
// - `config`: Fixed endpoint constants and the credential loader.
// - `api`: Encapsulates the HTTP call to the account endpoint and the
//   decoded response types.
// - `ui`: Renders the decoded account record as an aligned table.
// - `error`: The error taxonomy shared by all stages.
// - `app`: Runs the stages in order and maps failures to diagnostics and
//   an exit code.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod ui;
