use log::debug;
use serde::Deserialize;

use crate::error::FetchError;
use crate::transport::{Request, Transport};

pub const FACT_API_URL: &str = "https://uselessfacts.jsph.pl/random.json?language=en";

#[derive(Debug, Deserialize)]
struct FactResponse {
    text: Option<String>,
}

/// Fetch one random fun fact. A single attempt; any failure surfaces
/// immediately so the user can retry or pass an explicit message.
pub async fn fetch_fact(transport: &dyn Transport) -> Result<String, FetchError> {
    debug!("Fetching fun fact from {FACT_API_URL}");
    let response = transport
        .send(Request::get(FACT_API_URL))
        .await
        .map_err(FetchError::Transport)?;

    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status(response.status));
    }

    let payload: FactResponse = serde_json::from_slice(&response.body)?;
    match payload.text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(FetchError::MissingText),
    }
}
