use serde::{Deserialize, Serialize};

/// Sleep schedule preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepSchedule {
    EarlyBird,
    NightOwl,
    Flexible,
}

impl SleepSchedule {
    /// Human-readable label, used in match explanations
    pub fn label(&self) -> &'static str {
        match self {
            SleepSchedule::EarlyBird => "early bird",
            SleepSchedule::NightOwl => "night owl",
            SleepSchedule::Flexible => "flexible sleeper",
        }
    }
}

/// Where the resident usually works during the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStyle {
    Home,
    Office,
    Mixed,
}

impl WorkStyle {
    pub fn label(&self) -> &'static str {
        match self {
            WorkStyle::Home => "home",
            WorkStyle::Office => "office",
            WorkStyle::Mixed => "mixed",
        }
    }
}

/// Room placement preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomPreference {
    Window,
    Quiet,
    NoPreference,
}

/// Typical music volume at home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicLevel {
    Quiet,
    Moderate,
    Loud,
}

impl MusicLevel {
    /// Numeric level used by the lifestyle sub-score (quiet=1, moderate=2, loud=3)
    pub fn level(&self) -> i32 {
        match self {
            MusicLevel::Quiet => 1,
            MusicLevel::Moderate => 2,
            MusicLevel::Loud => 3,
        }
    }
}

/// How often the resident hosts guests (collected by the survey, not scored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestFrequency {
    Never,
    Occasionally,
    Frequently,
}

/// Living preferences collected by the survey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "sleepSchedule")]
    pub sleep_schedule: SleepSchedule,
    /// 1-10 scale (1 = very messy, 10 = perfectly organized)
    pub cleanliness: u8,
    #[serde(rename = "workStyle")]
    pub work_style: WorkStyle,
    /// 1-10 scale (1 = quiet, 10 = very social)
    #[serde(rename = "socialLevel")]
    pub social_level: u8,
    #[serde(rename = "roomPreference")]
    pub room_preference: RoomPreference,
}

/// Lifestyle factors collected by the survey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lifestyle {
    pub smoking: bool,
    pub pets: bool,
    pub music: MusicLevel,
    pub guests: GuestFrequency,
}

/// A resident or applicant profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    #[serde(rename = "profilePicture", default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub preferences: Preferences,
    pub lifestyle: Lifestyle,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Per-dimension sub-scores reported alongside a match, each 0-100
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchBreakdown {
    #[serde(rename = "sleepCompatibility")]
    pub sleep: u8,
    #[serde(rename = "cleanlinessCompatibility")]
    pub cleanliness: u8,
    #[serde(rename = "socialCompatibility")]
    pub social: u8,
    #[serde(rename = "lifestyleCompatibility")]
    pub lifestyle: u8,
}

/// Result of matching an applicant against the resident pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMatch {
    #[serde(rename = "matchedUser")]
    pub matched_user: Profile,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "suggestedRoom")]
    pub suggested_room: String,
    pub explanation: String,
    #[serde(rename = "matchDetails")]
    pub match_details: MatchBreakdown,
}

/// Scoring weights, one per preference dimension; they sum to 1.0
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub sleep: f64,
    pub cleanliness: f64,
    pub social: f64,
    pub work_style: f64,
    pub room_preference: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sleep: 0.25,
            cleanliness: 0.30,
            social: 0.20,
            work_style: 0.15,
            room_preference: 0.10,
        }
    }
}
