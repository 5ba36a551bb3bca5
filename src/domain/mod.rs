mod coordinate_system;
mod location_request;
mod satellite_locations;
mod ssc_time;

pub use coordinate_system::CoordinateSystem;
pub use location_request::LocationRequest;
pub use satellite_locations::SatelliteLocations;
pub use ssc_time::{SscTime, SscTimeError};
