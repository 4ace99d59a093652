// Fixed endpoint settings and the credential loader. The token is the only
// runtime input; everything else is a compile-time constant.

use crate::error::AppError;

/// Host serving the v3 API.
pub const API_HOST: &str = "api.linode.com";

/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "LINODE_API_TOKEN";

/// Value of the `api_action` query parameter.
pub const API_ACTION: &str = "account.info";

pub fn default_base_url() -> String {
    format!("https://{}/", API_HOST)
}

/// Accept the raw value of `LINODE_API_TOKEN` as a token. Unset and empty
/// are both treated as missing.
pub fn token_from(value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AppError::Config(TOKEN_VAR)),
    }
}
