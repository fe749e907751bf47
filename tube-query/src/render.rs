//! Natural-language rendering of service replies.
//!
//! Formatting is deterministic and preserves the order the backend
//! returned; nothing is sorted or deduplicated here.

use crate::underground::RouteSegment;

/// Rendering failures.
///
/// An empty journey or line list is a malformed reply from the backend —
/// a real journey has at least one leg and every station is served by at
/// least one line — and is reported rather than formatted into a broken
/// sentence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Journey has no segments
    #[error("journey has no segments")]
    EmptyJourney,

    /// Station has no serving lines
    #[error("station has no serving lines")]
    EmptyLineList,
}

/// Render a journey as travel directions.
///
/// Each segment becomes "the {line} to {destination}", joined in travel
/// order: "Take the Central to Bank, then take the Northern to Morden."
pub fn journey(segments: &[RouteSegment]) -> Result<String, RenderError> {
    if segments.is_empty() {
        return Err(RenderError::EmptyJourney);
    }

    let legs: Vec<String> = segments
        .iter()
        .map(|seg| format!("the {} to {}", seg.line, seg.destination))
        .collect();

    Ok(format!("Take {}.", legs.join(", then take ")))
}

/// Render the lines serving a station.
///
/// A single line reads "Just {line}."; several are joined with commas
/// and a final "and": "Victoria, Northern and Central."
pub fn interchanges(lines: &[String]) -> Result<String, RenderError> {
    match lines {
        [] => Err(RenderError::EmptyLineList),
        [only] => Ok(format!("Just {only}.")),
        [rest @ .., last] => Ok(format!("{} and {last}.", rest.join(", "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_segment_journey() {
        let segments = vec![RouteSegment::new("Northern", "Morden")];
        assert_eq!(journey(&segments).unwrap(), "Take the Northern to Morden.");
    }

    #[test]
    fn multi_segment_journey_in_travel_order() {
        let segments = vec![
            RouteSegment::new("Central", "Bank"),
            RouteSegment::new("Northern", "Morden"),
        ];

        assert_eq!(
            journey(&segments).unwrap(),
            "Take the Central to Bank, then take the Northern to Morden."
        );
    }

    #[test]
    fn three_segment_journey() {
        let segments = vec![
            RouteSegment::new("Victoria", "Oxford Circus"),
            RouteSegment::new("Central", "Bank"),
            RouteSegment::new("Northern", "Morden"),
        ];

        assert_eq!(
            journey(&segments).unwrap(),
            "Take the Victoria to Oxford Circus, then take the Central to Bank, \
             then take the Northern to Morden."
        );
    }

    #[test]
    fn empty_journey_is_rejected() {
        assert_eq!(journey(&[]), Err(RenderError::EmptyJourney));
    }

    #[test]
    fn single_line() {
        assert_eq!(interchanges(&lines(&["Victoria"])).unwrap(), "Just Victoria.");
    }

    #[test]
    fn two_lines() {
        assert_eq!(
            interchanges(&lines(&["Victoria", "Northern"])).unwrap(),
            "Victoria and Northern."
        );
    }

    #[test]
    fn three_lines() {
        assert_eq!(
            interchanges(&lines(&["Victoria", "Northern", "Central"])).unwrap(),
            "Victoria, Northern and Central."
        );
    }

    #[test]
    fn line_order_is_preserved() {
        assert_eq!(
            interchanges(&lines(&["Northern", "Central", "Bakerloo"])).unwrap(),
            "Northern, Central and Bakerloo."
        );
    }

    #[test]
    fn empty_line_list_is_rejected() {
        assert_eq!(interchanges(&[]), Err(RenderError::EmptyLineList));
    }
}
