use crate::api::ApiError;
use crate::app_config::Defaults;
use crate::domain::{CoordinateSystem, LocationRequest, SscTime};
use tracing::{debug, warn};

/// Raw query parameters of `GET /api/get-satellite-locations`. Empty values count as absent.
#[derive(Debug, Default)]
pub struct LocationQuery {
    pub observatories: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub coordinate_system: Option<String>,
    pub resolution_factor: Option<String>,
}

/// Collects raw query pairs. The first occurrence of a repeated parameter wins and unknown
/// parameters are ignored.
impl FromIterator<(String, String)> for LocationQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = LocationQuery::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "observatories" => &mut query.observatories,
                "start_time" => &mut query.start_time,
                "end_time" => &mut query.end_time,
                "coordinate_system" => &mut query.coordinate_system,
                "resolution_factor" => &mut query.resolution_factor,
                _ => {
                    debug!("Ignoring unknown query parameter '{}'", name);
                    continue;
                }
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl LocationQuery {
    pub fn validate(self, defaults: &Defaults) -> Result<LocationRequest, ApiError> {
        let start_time = parse_time("start_time", self.start_time)?;
        let end_time = parse_time("end_time", self.end_time)?;

        let observatories = non_empty(self.observatories).unwrap_or_else(|| {
            debug!("No observatories given, using '{}'", defaults.observatories());
            defaults.observatories().to_owned()
        });

        let resolution_factor = non_empty(self.resolution_factor).unwrap_or_else(|| {
            debug!("No resolution factor given, using '{}'", defaults.resolution_factor());
            defaults.resolution_factor().to_owned()
        });

        Ok(LocationRequest {
            observatories,
            start_time,
            end_time,
            coordinate_system: parse_coordinate_system(self.coordinate_system),
            resolution_factor,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_time(parameter: &'static str, value: Option<String>) -> Result<SscTime, ApiError> {
    let Some(value) = non_empty(value) else {
        warn!("⚠️ Rejecting request, {} is missing", parameter);
        return Err(ApiError::MissingParameter(parameter));
    };

    value.parse::<SscTime>().map_err(|source| {
        warn!("⚠️ Rejecting request, {}", source);
        ApiError::InvalidTimeFormat { parameter, source }
    })
}

fn parse_coordinate_system(value: Option<String>) -> CoordinateSystem {
    match non_empty(value) {
        Some(value) => value.parse().unwrap_or_else(|err| {
            warn!("⚠️ {}, using {}", err, CoordinateSystem::default());
            CoordinateSystem::default()
        }),
        None => {
            warn!("⚠️ No coordinate system given, using {}", CoordinateSystem::default());
            CoordinateSystem::default()
        }
    }
}
