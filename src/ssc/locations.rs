use crate::app_config::AppConfig;
use crate::domain::LocationRequest;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::{info, instrument};

/// Builds the SSC locations URL, `{base}/locations/{observatories}/{start},{end}/{COORDSYS}/`.
/// Each part is pushed as a single path segment, so `/`, `?` and `#` are percent-encoded.
pub fn locations_url(base_url: &str, request: &LocationRequest) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl { url: base_url.to_owned(), reason };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("it cannot have a path".to_string()))?
        .pop_if_empty()
        .push("locations")
        .push(&request.observatories)
        .push(&format!("{},{}", request.start_time, request.end_time))
        .push(request.coordinate_system.as_str())
        .push("");
    Ok(url)
}

/// Fetches the raw locations document from SSC. The body is returned untouched so that
/// parsing failures can be told apart from transport failures.
#[instrument(skip(client, config))]
pub async fn fetch_locations(client: &Client, config: &AppConfig, request: &LocationRequest) -> Result<String, FetchError> {
    let url = locations_url(config.ssc().url(), request)?;
    info!("Retrieving satellite locations from {}...", url);

    let body = client
        .get(url)
        .query(&[("resolutionFactor", request.resolution_factor.as_str())])
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    info!("Retrieving satellite locations... OK, {} bytes", body.len());
    Ok(body)
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("SSC is unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("invalid SSC url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    /// The status SSC answered with, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Unavailable(err) => err.status(),
            FetchError::InvalidUrl { .. } => None,
        }
    }
}
