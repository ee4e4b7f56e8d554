//! Booking draft and passenger-count models.

use serde::{Deserialize, Serialize};

/// The partially filled booking record built up across dialogue steps.
///
/// Each field is set exactly once, by its owning step; nothing resets a field
/// short of starting a new session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    /// Origin city token, trimmed and upper-cased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Destination city token, trimmed and upper-cased. Empty if the cities
    /// input had no " to " separator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// ISO `yyyy-MM-dd` travel date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Human-readable passenger summary, e.g. `"2 Adults, 1 Children, ..."`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passengers: Option<String>,
    /// Free-text details for the first passenger, stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_details: Option<String>,
}

/// Split free-text city input into (origin, destination).
///
/// The separator is a case-insensitive `" to "`. Input without it yields the
/// whole text as origin and an empty destination; with more than one
/// separator only the first two segments count, anything after the second
/// separator is dropped. Malformed input is coerced, never rejected.
pub fn parse_cities(input: &str) -> (String, String) {
    match find_separator(input) {
        Some(idx) => {
            let origin = &input[..idx];
            let rest = &input[idx + 4..];
            let destination = match find_separator(rest) {
                Some(next) => &rest[..next],
                None => rest,
            };
            (
                origin.trim().to_uppercase(),
                destination.trim().to_uppercase(),
            )
        }
        None => (input.trim().to_uppercase(), String::new()),
    }
}

// Byte-wise ASCII scan so the index stays valid on non-ASCII city names.
fn find_separator(input: &str) -> Option<usize> {
    input
        .as_bytes()
        .windows(4)
        .position(|w| w.eq_ignore_ascii_case(b" to "))
}

/// Four independent passenger counters, edited before being frozen into the
/// draft's summary string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerCounts {
    pub adults: u8,
    pub children: u8,
    pub seniors: u8,
    pub infants: u8,
}

impl PassengerCounts {
    /// Maximum per counter (the selector offers 0..=9).
    pub const MAX: u8 = 9;

    /// Build counts with the booking constraints applied: at least one adult,
    /// every counter capped at [`Self::MAX`].
    pub fn new(adults: u8, children: u8, seniors: u8, infants: u8) -> Self {
        Self {
            adults: adults.clamp(1, Self::MAX),
            children: children.min(Self::MAX),
            seniors: seniors.min(Self::MAX),
            infants: infants.min(Self::MAX),
        }
    }

    /// The frozen summary stored in the draft and echoed to the transcript.
    pub fn summary(&self) -> String {
        format!(
            "{} Adults, {} Children, {} Senior Citizens, {} Infants",
            self.adults, self.children, self.seniors, self.infants
        )
    }
}

impl Default for PassengerCounts {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            seniors: 0,
            infants: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cities_splits_on_separator() {
        let (origin, destination) = parse_cities("Delhi to Mumbai");
        assert_eq!(origin, "DELHI");
        assert_eq!(destination, "MUMBAI");
    }

    #[test]
    fn parse_cities_separator_is_case_insensitive() {
        let (origin, destination) = parse_cities("Delhi TO Mumbai");
        assert_eq!(origin, "DELHI");
        assert_eq!(destination, "MUMBAI");

        let (origin, destination) = parse_cities("delhi To mumbai");
        assert_eq!(origin, "DELHI");
        assert_eq!(destination, "MUMBAI");
    }

    #[test]
    fn parse_cities_trims_whitespace() {
        let (origin, destination) = parse_cities("  Delhi   to   Mumbai  ");
        assert_eq!(origin, "DELHI");
        assert_eq!(destination, "MUMBAI");
    }

    #[test]
    fn parse_cities_without_separator_coerces() {
        let (origin, destination) = parse_cities("Delhi");
        assert_eq!(origin, "DELHI");
        assert_eq!(destination, "");
    }

    #[test]
    fn parse_cities_keeps_only_first_two_segments() {
        let (origin, destination) = parse_cities("Goa to Delhi to Mumbai");
        assert_eq!(origin, "GOA");
        assert_eq!(destination, "DELHI");
    }

    #[test]
    fn parse_cities_does_not_split_inside_words() {
        // "Toronto" contains "to" but not the " to " separator.
        let (origin, destination) = parse_cities("Toronto");
        assert_eq!(origin, "TORONTO");
        assert_eq!(destination, "");
    }

    #[test]
    fn counts_require_at_least_one_adult() {
        let counts = PassengerCounts::new(0, 2, 0, 1);
        assert_eq!(counts.adults, 1);
        assert_eq!(counts.children, 2);
        assert_eq!(counts.infants, 1);
    }

    #[test]
    fn counts_cap_at_max() {
        let counts = PassengerCounts::new(12, 10, 9, 200);
        assert_eq!(counts.adults, 9);
        assert_eq!(counts.children, 9);
        assert_eq!(counts.seniors, 9);
        assert_eq!(counts.infants, 9);
    }

    #[test]
    fn counts_accept_zero_for_non_adults() {
        let counts = PassengerCounts::new(1, 0, 0, 0);
        assert_eq!(counts.children, 0);
        assert_eq!(counts.seniors, 0);
        assert_eq!(counts.infants, 0);
    }

    #[test]
    fn summary_format() {
        let counts = PassengerCounts::new(2, 1, 0, 1);
        assert_eq!(
            counts.summary(),
            "2 Adults, 1 Children, 0 Senior Citizens, 1 Infants"
        );
    }

    #[test]
    fn draft_serde_uses_camel_case() {
        let draft = BookingDraft {
            origin: Some("DEL".to_string()),
            passenger_details: Some("Jane Doe, female".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["origin"], "DEL");
        assert_eq!(json["passengerDetails"], "Jane Doe, female");
        assert!(json.get("destination").is_none());
    }
}
