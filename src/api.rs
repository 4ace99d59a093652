// API client module: a small blocking HTTP client for the account.info
// action of the v3 API, plus the shapes its JSON response decodes into.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::config::API_ACTION;
use crate::error::AppError;

/// Holds a reqwest blocking client and the base URL requests are sent to.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Decoded `account.info` response. Fields that are missing or `null`
/// decode to their zero value, so an error-only body still yields a record
/// whose `errors` can be inspected.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AccountInfo {
    #[serde(rename = "ACTION", deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(rename = "DATA", deserialize_with = "null_as_default")]
    pub data: AccountData,
    #[serde(rename = "ERRORARRAY", deserialize_with = "null_entries_as_default")]
    pub errors: Vec<ApiError>,
}

/// Account usage and billing figures. Transfer values are in GB.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct AccountData {
    #[serde(deserialize_with = "null_as_default")]
    pub active_since: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transfer_pool: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub transfer_used: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub transfer_billable: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub managed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub balance: f64,
}

/// One entry of `ERRORARRAY`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ApiError {
    #[serde(rename = "ERRORMESSAGE", deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(rename = "ERRORCODE", deserialize_with = "null_as_default")]
    pub code: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `null` list is empty; a `null` entry is a zero-valued entry.
fn null_entries_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let entries: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl AccountInfo {
    /// Hand out the account data only if the endpoint reported no errors.
    pub fn into_checked(self) -> Result<AccountData, AppError> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(AppError::Application(self.errors))
        }
    }
}

impl ApiClient {
    /// Client for a base URL, normally `config::default_base_url()`. No
    /// request timeout is set: a request blocks until the transport
    /// resolves or fails.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(ApiClient {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Issue a single GET for account.info and decode the body. The HTTP
    /// status is not interpreted; logical failures come back in
    /// `AccountInfo::errors`.
    pub fn fetch_account_info(&self, token: &str) -> Result<AccountInfo, AppError> {
        debug!(base_url = %self.base_url, action = API_ACTION, "requesting account info");
        let res = self
            .client
            .get(&self.base_url)
            .query(&[("api_key", token), ("api_action", API_ACTION)])
            .send()?;
        debug!(status = %res.status(), "received account info response");

        // `res` is consumed here, releasing the connection on every path.
        let body = res.bytes()?;
        let info: AccountInfo = serde_json::from_slice(&body)?;
        Ok(info)
    }
}
