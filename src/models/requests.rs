use crate::models::domain::{Lifestyle, Preferences};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find the best roommate match for a surveyed applicant
///
/// The body carries the full applicant profile as assembled by the survey
/// client. An absent or empty id is allowed; the server assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 16, max = 120))]
    pub age: u8,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
    pub preferences: Preferences,
    pub lifestyle: Lifestyle,
}
