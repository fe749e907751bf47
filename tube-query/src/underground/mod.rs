//! Underground model service client.
//!
//! The backend owns all routing and graph logic; this module only speaks
//! its REST surface:
//!
//! - `GET /route/{origin}/{destination}` — journey as ordered segments
//! - `GET /station/{station}/interchanges` — lines serving a station
//! - `GET /station/{station}` — station details
//! - `GET /line/{line}/list-stations` — stations on a line
//!
//! The backend reports failures in-band as an `{"error": ...}` JSON body
//! (sent with a 400 status); these decode to [`UndergroundError::Service`],
//! kept distinct from transport failures.

mod client;
mod error;
mod mock;
mod types;

pub use client::{UndergroundClient, UndergroundConfig};
pub use error::UndergroundError;
pub use mock::MockUnderground;
pub use types::{RouteSegment, StationInfo};

/// Lookups the interpreter needs from the underground service.
///
/// This abstraction allows the interpreter to be tested with mock data.
pub trait UndergroundApi {
    /// Get the recommended journey between two stations, in travel order.
    async fn route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteSegment>, UndergroundError>;

    /// Get the lines serving a station.
    async fn interchanges(&self, station: &str) -> Result<Vec<String>, UndergroundError>;
}
