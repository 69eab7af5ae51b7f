// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    GuestFrequency, Lifestyle, MatchBreakdown, MusicLevel, Preferences, Profile, RoomMatch,
    RoomPreference, ScoringWeights, SleepSchedule, WorkStyle,
};
pub use requests::FindMatchRequest;
pub use responses::{ErrorResponse, FindMatchResponse, HealthResponse, ProfilesResponse};
