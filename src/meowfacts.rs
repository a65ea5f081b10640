//! Client for the meowfacts cat fact API.

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const MEOWFACTS_URL: &str = "https://meowfacts.herokuapp.com/";
const HTTP_TIMEOUT_SECONDS: u64 = 10;

/// The JSON shape returned by the API.
#[derive(Debug, Deserialize)]
pub struct FactResponse {
    pub data: Vec<String>,
}

#[derive(Error, Debug)]
pub enum FactError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),
    #[error("failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no cat facts received")]
    NoFacts,
}

/// Fetch a single cat fact from the API.
pub async fn fetch_fact() -> Result<String, FactError> {
    fetch_fact_from(MEOWFACTS_URL, Duration::from_secs(HTTP_TIMEOUT_SECONDS)).await
}

async fn fetch_fact_from(base_url: &str, timeout: Duration) -> Result<String, FactError> {
    let client: Client = Client::builder().timeout(timeout).build()?;

    let response: Response = client.get(base_url).send().await?;

    let status: StatusCode = response.status();
    if status != StatusCode::OK {
        return Err(FactError::UnexpectedStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    let parsed: FactResponse = serde_json::from_slice(&body)?;

    parsed.data.into_iter().next().ok_or(FactError::NoFacts)
}
