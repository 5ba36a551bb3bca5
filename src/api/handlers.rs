use crate::api::{ApiError, AppState, LocationQuery};
use crate::domain::SatelliteLocations;
use crate::ssc::{fetch_locations, normalize_locations};
use axum::Json;
use axum::extract::{Query, State};
use tracing::{info, instrument};

pub async fn home() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " is running!")
}

#[instrument(skip(state))]
pub async fn get_satellite_locations(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SatelliteLocations>, ApiError> {
    let request = pairs.into_iter().collect::<LocationQuery>().validate(state.config().defaults())?;
    let body = fetch_locations(state.client(), state.config(), &request).await?;
    let locations = normalize_locations(&body)?;

    match locations.message() {
        Some(message) => info!("Serving no satellite locations: {}", message),
        None => info!("Serving {} satellite locations", locations.len()),
    }
    Ok(Json(locations))
}
