//! Fetching shared by the configuration loader, the record sources and the
//! detail page.

use common::error::FetchError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// GETs `url` and returns the body. Any non-2xx status is an error.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;
    response_text(response).await
}

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let text = response_text(response).await?;
    Ok(serde_json::from_str(&text)?)
}

async fn response_text(response: Response) -> Result<String, FetchError> {
    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        });
    }
    response
        .text()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))
}
