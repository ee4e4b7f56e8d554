//! Scripted bot copy — a pure mapping from (step, draft) to the next bot
//! message, plus rendering for flight-search results.

use serde_json::Value;

use super::draft::BookingDraft;
use super::step::BookingStep;

/// Opening bot message, sent when a chat session starts.
pub const GREETING: &str = "Fantastic! I'm here to assist you with that. 🛫 \
Could you please tell me your origin and destination cities? 🌏✨";

/// Bot message shown when the search succeeds but no flights match.
pub const NO_FLIGHTS: &str =
    "No flights found for the selected route and date. Please try different details.";

/// Bot message shown when the flight search call fails.
pub const SEARCH_FAILED: &str = "Failed to fetch flight data. Please try again later.";

/// The prompt the bot asks on entering `step`, given the draft so far.
///
/// A dispatch table keyed by the step tag; `Cities` has no entry because its
/// prompt is the session greeting.
pub fn next_bot_message(step: BookingStep, draft: &BookingDraft) -> Option<String> {
    match step {
        BookingStep::Cities => None,
        BookingStep::Date => Some("Please provide the date of your onward travel.".to_string()),
        BookingStep::Passengers => Some(
            "Noted. Please provide the number of passengers, specifying adults, \
             children, senior citizens, and infants."
                .to_string(),
        ),
        BookingStep::Confirmation => Some(format!(
            "Please confirm the following details:\n\
             - Origin: {}\n\
             - Destination: {}\n\
             - Type: One-way\n\
             - Date of Onward Travel (DOT): {}\n\
             - Passengers: {}\n\
             Type \"yes,\" \"confirm,\" or \"proceed\" to confirm.",
            draft.origin.as_deref().unwrap_or_default(),
            draft.destination.as_deref().unwrap_or_default(),
            draft.date.as_deref().unwrap_or_default(),
            draft.passengers.as_deref().unwrap_or_default(),
        )),
        BookingStep::FlightSelection => {
            Some("Please select the onward flight below ⤵️.".to_string())
        }
        BookingStep::PassengerDetails => Some(
            "Please provide the first name, last name, and gender of the first adult passenger."
                .to_string(),
        ),
    }
}

/// Render relayed search JSON as chat bubbles, one per flight.
///
/// Only a non-empty top-level array counts as results; anything else is the
/// "no data" case. Missing fields render as empty segments rather than
/// dropping the entry.
pub fn render_flight_results(results: &Value) -> Vec<String> {
    let Some(flights) = results.as_array() else {
        return Vec::new();
    };
    flights
        .iter()
        .map(|f| {
            format!(
                "✈️ {} | Departure: {} | Price: {}",
                field(f, "flight"),
                field(f, "time"),
                field(f, "price"),
            )
        })
        .collect()
}

fn field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}
