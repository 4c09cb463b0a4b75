use serde::Serialize;
use thiserror::Error;

const SETTINGS_URL: &str = "https://api.sipgate.com/v2/settings/sipgateio";

pub type SipgateResult<T> = Result<T, SipgateError>;

#[derive(Debug, Error)]
pub enum SipgateError {
    #[error("sipgate API rejected the webhook registration with status {0}. Check SIPGATE_TOKEN_ID and SIPGATE_TOKEN.")]
    RegistrationFailed(reqwest::StatusCode),
    #[error("Failed to reach the sipgate API: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct IncomingUrl<'a> {
    #[serde(rename = "incomingUrl")]
    incoming_url: &'a str,
}

/// Registers `url` as the account's incoming webhook URL. The token pair
/// comes from the collected environment (personal access token with the
/// `settings:write` scope).
pub fn register_incoming_url(token_id: &str, token: &str, url: &str) -> SipgateResult<()> {
    let response = reqwest::blocking::Client::new()
        .put(SETTINGS_URL)
        .basic_auth(token_id, Some(token))
        .json(&IncomingUrl { incoming_url: url })
        .send()?;

    if response.status().is_success() {
        return Ok(());
    }

    Err(SipgateError::RegistrationFailed(response.status()))
}
