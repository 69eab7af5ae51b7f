//! Roomie Algo - Compatibility matching service for the Roomie roommate-matching app
//!
//! This library provides the compatibility scorer used to pair an applicant
//! with the best-fitting resident: a weighted average over five preference
//! dimensions, plus explanation, room suggestion and per-dimension breakdown.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{compatibility_score, MatchError, Matcher};
pub use models::{FindMatchRequest, FindMatchResponse, Profile, RoomMatch, ScoringWeights};
