//! The booking dialogue — the scripted conversation that collects trip
//! parameters step by step.

pub mod draft;
pub mod prompts;
pub mod routes;
pub mod session;
pub mod step;
pub mod transcript;

pub use draft::{BookingDraft, PassengerCounts};
pub use session::{Session, Turn, UserInput};
pub use step::BookingStep;
pub use transcript::{Message, Sender, Transcript};
