mod error;
mod handlers;
mod params;
mod routes;

pub use error::ApiError;
pub use params::LocationQuery;
pub use routes::{AppState, router};
