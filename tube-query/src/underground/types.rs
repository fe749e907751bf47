//! Wire types for the underground service.

use serde::Deserialize;

/// One leg of a journey: board `line` and leave it at `destination`.
///
/// The backend also names the station where the line is boarded; the
/// rendered directions never use it, so it is optional here and replies
/// that omit it still parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteSegment {
    #[serde(default)]
    pub start: Option<String>,
    pub line: String,
    pub destination: String,
}

impl RouteSegment {
    /// Construct a segment without a boarding station.
    pub fn new(line: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            start: None,
            line: line.into(),
            destination: destination.into(),
        }
    }
}

/// Station details from `GET /station/{station}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StationInfo {
    pub name: String,
    pub district: String,
    /// Fare zones the station is in (1-9); interchanges on a zone
    /// boundary have more than one.
    pub zones: Vec<u8>,
    pub lines: Vec<String>,
}

/// In-band error reply body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorReply {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_route_segment() {
        let json = r#"{"start": "Euston", "line": "Northern", "destination": "Morden"}"#;
        let seg: RouteSegment = serde_json::from_str(json).unwrap();

        assert_eq!(seg.start.as_deref(), Some("Euston"));
        assert_eq!(seg.line, "Northern");
        assert_eq!(seg.destination, "Morden");
    }

    #[test]
    fn route_segment_start_is_optional() {
        let json = r#"{"line": "Northern", "destination": "Morden"}"#;
        let seg: RouteSegment = serde_json::from_str(json).unwrap();

        assert_eq!(seg, RouteSegment::new("Northern", "Morden"));
    }

    #[test]
    fn deserialize_journey_in_order() {
        let json = r#"[
            {"start": "Epping", "line": "Central", "destination": "Bank"},
            {"start": "Bank", "line": "Northern", "destination": "Morden"}
        ]"#;
        let journey: Vec<RouteSegment> = serde_json::from_str(json).unwrap();

        assert_eq!(journey.len(), 2);
        assert_eq!(journey[0].line, "Central");
        assert_eq!(journey[1].line, "Northern");
    }

    #[test]
    fn deserialize_station_info() {
        let json = r#"{
            "name": "Baker Street",
            "district": "Marylebone",
            "zones": [1],
            "lines": ["Bakerloo", "Circle", "Hammersmith & City", "Jubilee", "Metropolitan"]
        }"#;
        let info: StationInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.name, "Baker Street");
        assert_eq!(info.zones, vec![1]);
        assert_eq!(info.lines.len(), 5);
    }

    #[test]
    fn deserialize_error_reply() {
        let json = r#"{"error": "No such station 'Narnia'"}"#;
        let reply: ErrorReply = serde_json::from_str(json).unwrap();

        assert_eq!(reply.error, "No such station 'Narnia'");
    }

    #[test]
    fn error_reply_rejects_success_shapes() {
        assert!(serde_json::from_str::<ErrorReply>(r#"["Victoria", "Northern"]"#).is_err());
        assert!(serde_json::from_str::<ErrorReply>(r#"{"name": "Bank"}"#).is_err());
    }
}
