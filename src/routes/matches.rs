use crate::core::{MatchError, Matcher};
use crate::models::{
    ErrorResponse, FindMatchRequest, FindMatchResponse, HealthResponse, Profile, ProfilesResponse,
};
use crate::services::ProfileStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_match))
        .route("/profiles", web::get().to(list_profiles));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.store.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find match endpoint
///
/// POST /api/v1/matches/find
///
/// The body is the applicant profile assembled by the survey client:
/// ```json
/// {
///   "name": "string",
///   "age": 24,
///   "preferences": { "sleepSchedule": "early_bird", ... },
///   "lifestyle": { "smoking": false, ... }
/// }
/// ```
async fn find_match(
    state: web::Data<AppState>,
    req: web::Json<FindMatchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let applicant = applicant_from_request(req.into_inner());

    tracing::info!(
        "Finding match for applicant: {} ({})",
        applicant.name,
        applicant.id
    );

    let pool = state.store.all();
    let mut rng = rand::thread_rng();

    match state.matcher.best_match(&applicant, pool, &mut rng) {
        Ok(room_match) => {
            tracing::info!(
                "Matched applicant {} with {} (score: {})",
                applicant.id,
                room_match.matched_user.id,
                room_match.compatibility_score
            );

            HttpResponse::Ok().json(FindMatchResponse {
                room_match,
                total_candidates: pool.len(),
            })
        }
        Err(e @ MatchError::NoCandidates(_)) => {
            tracing::warn!("No candidates for applicant {}: {}", applicant.id, e);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "No candidates available".to_string(),
                message: e.to_string(),
                status_code: 404,
            })
        }
    }
}

/// List all resident profiles
///
/// GET /api/v1/profiles
///
/// Backing data for the admin view of registered residents.
async fn list_profiles(state: web::Data<AppState>) -> impl Responder {
    let profiles = state.store.all().to_vec();
    let count = profiles.len();

    tracing::debug!("Listing {} resident profiles", count);

    HttpResponse::Ok().json(ProfilesResponse { profiles, count })
}

/// Build the applicant profile from a validated request
///
/// Assigns a fresh id when the client sent none, and clamps the 1-10
/// ratings at the boundary so the scorer never sees out-of-range values.
/// The scorer itself performs no validation.
fn applicant_from_request(req: FindMatchRequest) -> Profile {
    let id = match req.id {
        Some(id) if !id.is_empty() => id,
        _ => uuid::Uuid::new_v4().to_string(),
    };

    let mut preferences = req.preferences;
    preferences.cleanliness = preferences.cleanliness.clamp(1, 10);
    preferences.social_level = preferences.social_level.clamp(1, 10);

    Profile {
        id,
        name: req.name,
        age: req.age,
        profile_picture: req.profile_picture,
        preferences,
        lifestyle: req.lifestyle,
        created_at: Some(chrono::Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        GuestFrequency, Lifestyle, MusicLevel, Preferences, RoomPreference, SleepSchedule,
        WorkStyle,
    };

    fn create_request(id: Option<String>, cleanliness: u8) -> FindMatchRequest {
        FindMatchRequest {
            id,
            name: "Test Applicant".to_string(),
            age: 24,
            profile_picture: None,
            preferences: Preferences {
                sleep_schedule: SleepSchedule::EarlyBird,
                cleanliness,
                work_style: WorkStyle::Mixed,
                social_level: 6,
                room_preference: RoomPreference::Window,
            },
            lifestyle: Lifestyle {
                smoking: false,
                pets: false,
                music: MusicLevel::Moderate,
                guests: GuestFrequency::Occasionally,
            },
        }
    }

    #[test]
    fn test_missing_id_gets_assigned() {
        let profile = applicant_from_request(create_request(None, 8));
        assert!(!profile.id.is_empty());

        let profile = applicant_from_request(create_request(Some(String::new()), 8));
        assert!(!profile.id.is_empty());
    }

    #[test]
    fn test_provided_id_is_kept() {
        let profile = applicant_from_request(create_request(Some("abc".to_string()), 8));
        assert_eq!(profile.id, "abc");
    }

    #[test]
    fn test_ratings_clamped_at_boundary() {
        let profile = applicant_from_request(create_request(None, 0));
        assert_eq!(profile.preferences.cleanliness, 1);

        let profile = applicant_from_request(create_request(None, 200));
        assert_eq!(profile.preferences.cleanliness, 10);
    }

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
