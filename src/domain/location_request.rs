use crate::domain::{CoordinateSystem, SscTime};

/// A validated request for satellite locations, ready to be sent to SSC.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRequest {
    pub observatories: String,
    pub start_time: SscTime,
    pub end_time: SscTime,
    pub coordinate_system: CoordinateSystem,
    pub resolution_factor: String,
}
