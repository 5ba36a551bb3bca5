use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, SscClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .default_headers(headers)
        .timeout(config.ssc().timeout())
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum SscClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
