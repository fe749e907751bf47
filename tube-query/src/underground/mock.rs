//! Mock underground client for testing without a running backend.

use std::collections::HashMap;

use super::UndergroundApi;
use super::error::UndergroundError;
use super::types::RouteSegment;

/// Mock client serving canned replies.
///
/// Mimics the real `UndergroundClient` interface. Journeys are keyed by
/// origin and destination, line lists by station; a lookup for anything
/// not seeded produces the same in-band error the backend sends for an
/// unknown station.
#[derive(Debug, Clone, Default)]
pub struct MockUnderground {
    journeys: HashMap<(String, String), Vec<RouteSegment>>,
    interchanges: HashMap<String, Vec<String>>,
}

impl MockUnderground {
    /// Create an empty mock; every lookup reports an unknown station.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the journey returned for an origin/destination pair.
    pub fn with_journey(
        mut self,
        origin: &str,
        destination: &str,
        segments: Vec<RouteSegment>,
    ) -> Self {
        self.journeys
            .insert((origin.to_string(), destination.to_string()), segments);
        self
    }

    /// Seed the line list returned for a station.
    pub fn with_interchanges(mut self, station: &str, lines: Vec<String>) -> Self {
        self.interchanges
            .insert(station.to_string(), lines);
        self
    }

    fn unknown_station(name: &str) -> UndergroundError {
        UndergroundError::Service {
            message: format!("No such station '{name}'"),
        }
    }
}

impl UndergroundApi for MockUnderground {
    async fn route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteSegment>, UndergroundError> {
        self.journeys
            .get(&(origin.to_string(), destination.to_string()))
            .cloned()
            .ok_or_else(|| Self::unknown_station(origin))
    }

    async fn interchanges(&self, station: &str) -> Result<Vec<String>, UndergroundError> {
        self.interchanges
            .get(station)
            .cloned()
            .ok_or_else(|| Self::unknown_station(station))
    }
}
