use std::io;

use crate::api::ApiError;

/// Every way a run can fail. All variants are fatal.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required environment input is absent or empty.
    #[error("Env {0} not set")]
    Config(&'static str),

    #[error("Failed to fetch account info: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to fetch account info: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint answered but reported logical errors.
    #[error("API returned {} error(s)", .0.len())]
    Application(Vec<ApiError>),

    #[error("Failed to write account table: {0}")]
    Output(#[from] io::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the api key.
        AppError::Transport(err.without_url())
    }
}

impl AppError {
    /// Lines for stderr, without the `[ERROR] ` prefix. Application errors
    /// produce one line per entry; everything else a single line.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            AppError::Application(errors) => errors.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_error_lists_every_entry() {
        let err = AppError::Application(vec![
            ApiError { message: "Invalid API key".into(), code: 4 },
            ApiError { message: "Rate limited".into(), code: 30 },
        ]);
        assert_eq!(
            err.diagnostics(),
            vec!["Invalid API key (4)".to_string(), "Rate limited (30)".to_string()]
        );
    }

    #[test]
    fn decode_error_is_a_single_fetch_line() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        let lines = err.diagnostics();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Failed to fetch account info: "));
    }
}
