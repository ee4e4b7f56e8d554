//! Flight Assist — conversational flight-booking backend.

pub mod config;
pub mod dialogue;
pub mod error;
pub mod gateway;
