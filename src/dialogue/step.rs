//! Booking dialogue state machine — tracks which step the conversation is on.

use serde::{Deserialize, Serialize};

/// The steps of the booking conversation.
///
/// Progresses linearly: Cities → Date → Passengers → Confirmation →
/// FlightSelection → PassengerDetails. The session is complete once the
/// passenger-details input has been stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingStep {
    Cities,
    Date,
    Passengers,
    Confirmation,
    FlightSelection,
    PassengerDetails,
}

impl BookingStep {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: BookingStep) -> bool {
        use BookingStep::*;
        matches!(
            (self, target),
            (Cities, Date)
                | (Date, Passengers)
                | (Passengers, Confirmation)
                | (Confirmation, FlightSelection)
                | (FlightSelection, PassengerDetails)
        )
    }

    /// Whether this step is the last one in the script.
    pub fn is_last(&self) -> bool {
        matches!(self, Self::PassengerDetails)
    }

    /// Get the next step in the linear progression, if any.
    pub fn next(&self) -> Option<BookingStep> {
        use BookingStep::*;
        match self {
            Cities => Some(Date),
            Date => Some(Passengers),
            Passengers => Some(Confirmation),
            Confirmation => Some(FlightSelection),
            FlightSelection => Some(PassengerDetails),
            PassengerDetails => None,
        }
    }
}

impl Default for BookingStep {
    fn default() -> Self {
        Self::Cities
    }
}

impl std::fmt::Display for BookingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cities => "cities",
            Self::Date => "date",
            Self::Passengers => "passengers",
            Self::Confirmation => "confirmation",
            Self::FlightSelection => "flightSelection",
            Self::PassengerDetails => "passengerDetails",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions() {
        use BookingStep::*;
        let transitions = [
            (Cities, Date),
            (Date, Passengers),
            (Passengers, Confirmation),
            (Confirmation, FlightSelection),
            (FlightSelection, PassengerDetails),
        ];
        for (from, to) in transitions {
            assert!(
                from.can_transition_to(to),
                "{from} should transition to {to}"
            );
        }
    }

    #[test]
    fn invalid_transitions() {
        use BookingStep::*;
        // Skip steps
        assert!(!Cities.can_transition_to(Passengers));
        assert!(!Date.can_transition_to(Confirmation));
        // Go backward
        assert!(!Confirmation.can_transition_to(Date));
        // Past the end
        assert!(!PassengerDetails.can_transition_to(Cities));
        // Self-transition
        assert!(!Confirmation.can_transition_to(Confirmation));
    }

    #[test]
    fn next_walks_all_steps() {
        use BookingStep::*;
        let expected = [Date, Passengers, Confirmation, FlightSelection, PassengerDetails];
        let mut current = Cities;
        for expected_next in expected {
            let next = current.next().unwrap();
            assert_eq!(next, expected_next);
            current = next;
        }
        assert!(current.next().is_none());
        assert!(current.is_last());
    }

    #[test]
    fn display_matches_serde() {
        use BookingStep::*;
        let steps = [
            Cities,
            Date,
            Passengers,
            Confirmation,
            FlightSelection,
            PassengerDetails,
        ];
        for step in steps {
            let display = format!("{step}");
            let json = serde_json::to_string(&step).unwrap();
            // JSON wraps in quotes
            assert_eq!(
                format!("\"{display}\""),
                json,
                "Display and serde should match for {step:?}"
            );
        }
    }
}
