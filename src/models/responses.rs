use crate::models::domain::{Profile, RoomMatch};
use serde::{Deserialize, Serialize};

/// Response for the find match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchResponse {
    #[serde(rename = "match")]
    pub room_match: RoomMatch,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the profiles listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<Profile>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
