//! Session — the dialogue engine driving one booking conversation.
//!
//! Tracks the current step, accumulates the draft, appends to the transcript,
//! and decides the bot's replies. The only suspension point is the flight
//! search fired at the confirmation step; everything else is synchronous.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::gateway::FlightSearch;

use super::draft::{BookingDraft, PassengerCounts, parse_cities};
use super::prompts::{self, next_bot_message};
use super::step::BookingStep;
use super::transcript::{Message, Transcript};

/// Words that confirm the booking summary, matched case-insensitively as
/// substrings of the user's reply.
const AFFIRMATIONS: [&str; 3] = ["yes", "confirm", "proceed"];

/// One discrete user action, already shaped by the input widget in play.
#[derive(Debug, Clone)]
pub enum UserInput {
    /// Free text from the chat box.
    Text(String),
    /// A calendar selection.
    Date(NaiveDate),
    /// The four passenger counters.
    Passengers(PassengerCounts),
}

/// Messages appended by one user action: the user echo (absent when the input
/// was rejected or ignored) followed by zero or more bot replies.
///
/// The channel layer paces delivery — the engine itself never sleeps.
#[derive(Debug, Default)]
pub struct Turn {
    pub user: Option<Message>,
    pub bot: Vec<Message>,
}

impl Turn {
    fn empty() -> Self {
        Self::default()
    }
}

/// One chat session: step, draft, transcript. Created when the client
/// connects, dropped when it goes away. Nothing is persisted.
pub struct Session {
    step: BookingStep,
    draft: BookingDraft,
    transcript: Transcript,
    flights: Arc<dyn FlightSearch>,
    complete: bool,
}

impl Session {
    /// Start a session. The greeting is already on the transcript.
    pub fn new(flights: Arc<dyn FlightSearch>) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_bot(prompts::GREETING);
        Self {
            step: BookingStep::default(),
            draft: BookingDraft::default(),
            transcript,
            flights,
            complete: false,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether the scripted flow has run to its end.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Apply one user action and return the newly appended messages.
    ///
    /// Input that does not match the current step's widget is ignored, as is
    /// anything after completion. A past date is rejected without a transition
    /// or draft change. Non-affirmative confirmation input is echoed and
    /// otherwise does nothing.
    pub async fn handle(&mut self, input: UserInput) -> Turn {
        if self.complete {
            tracing::debug!("Input after session completion ignored");
            return Turn::empty();
        }

        match (self.step, input) {
            (BookingStep::Cities, UserInput::Text(text)) => {
                let user = self.transcript.push_user(&text);
                let (origin, destination) = parse_cities(&text);
                self.draft.origin = Some(origin);
                self.draft.destination = Some(destination);
                self.advance(user)
            }

            (BookingStep::Date, UserInput::Date(date)) => {
                let today = Utc::now().date_naive();
                if date < today {
                    tracing::debug!(%date, "Past travel date rejected");
                    return Turn::empty();
                }
                let iso = date.format("%Y-%m-%d").to_string();
                let user = self.transcript.push_user(format!("Selected date: {iso}"));
                self.draft.date = Some(iso);
                self.advance(user)
            }

            (BookingStep::Passengers, UserInput::Passengers(counts)) => {
                // Re-clamp: the engine owns the adults >= 1 invariant, not the widget.
                let counts =
                    PassengerCounts::new(counts.adults, counts.children, counts.seniors, counts.infants);
                let summary = counts.summary();
                let user = self.transcript.push_user(&summary);
                self.draft.passengers = Some(summary);
                self.advance(user)
            }

            (BookingStep::Confirmation, UserInput::Text(text)) => {
                let user = self.transcript.push_user(&text);
                if !is_affirmative(&text) {
                    return Turn {
                        user: Some(user),
                        bot: Vec::new(),
                    };
                }
                self.step = BookingStep::FlightSelection;
                let mut bot = self.search_flights().await;
                if let Some(prompt) = next_bot_message(BookingStep::FlightSelection, &self.draft) {
                    bot.push(self.transcript.push_bot(prompt));
                }
                Turn {
                    user: Some(user),
                    bot,
                }
            }

            (BookingStep::FlightSelection, UserInput::Text(text)) => {
                // Placeholder step: any reply stands in for a selection.
                let user = self.transcript.push_user(&text);
                self.advance(user)
            }

            (BookingStep::PassengerDetails, UserInput::Text(text)) => {
                let user = self.transcript.push_user(&text);
                self.draft.passenger_details = Some(text);
                self.complete = true;
                Turn {
                    user: Some(user),
                    bot: Vec::new(),
                }
            }

            (step, input) => {
                tracing::debug!(%step, ?input, "Input does not match current step, ignored");
                Turn::empty()
            }
        }
    }

    /// Move to the next step and append its scripted prompt.
    fn advance(&mut self, user: Message) -> Turn {
        let mut bot = Vec::new();
        if let Some(next) = self.step.next() {
            debug_assert!(self.step.can_transition_to(next));
            self.step = next;
            if let Some(prompt) = next_bot_message(next, &self.draft) {
                bot.push(self.transcript.push_bot(prompt));
            }
        }
        Turn {
            user: Some(user),
            bot,
        }
    }

    /// Run exactly one flight search with the collected draft and render the
    /// outcome as bot messages. Failures collapse to a single fallback bubble.
    async fn search_flights(&mut self) -> Vec<Message> {
        let from = self.draft.origin.clone().unwrap_or_default();
        let to = self.draft.destination.clone().unwrap_or_default();
        let date = self.draft.date.clone().unwrap_or_default();

        match self.flights.search(&from, &to, &date).await {
            Ok(results) => {
                let bubbles = prompts::render_flight_results(&results);
                if bubbles.is_empty() {
                    vec![self.transcript.push_bot(prompts::NO_FLIGHTS)]
                } else {
                    bubbles
                        .into_iter()
                        .map(|text| self.transcript.push_bot(text))
                        .collect()
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, %from, %to, %date, "Flight search failed");
                vec![self.transcript.push_bot(prompts::SEARCH_FAILED)]
            }
        }
    }
}

fn is_affirmative(input: &str) -> bool {
    let lower = input.to_lowercase();
    AFFIRMATIONS.iter().any(|word| lower.contains(word))
}
