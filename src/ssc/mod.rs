mod client;
mod envelope;
mod locations;
mod normalize;

pub use client::new_client;
pub use locations::{FetchError, fetch_locations};
pub use normalize::{NormalizeError, normalize_locations};
