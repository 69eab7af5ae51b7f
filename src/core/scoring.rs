use crate::models::{MatchBreakdown, Profile, RoomPreference, ScoringWeights, SleepSchedule, WorkStyle};

/// Calculate the overall compatibility score (0-100) between two profiles
///
/// Scoring formula:
/// score = (
///     sleep_score * 0.25 +             # Matching sleep schedules
///     cleanliness_score * 0.30 +       # Similar cleanliness standards
///     social_score * 0.20 +            # Similar social energy
///     work_style_score * 0.15 +        # Compatible work-from-home patterns
///     room_preference_score * 0.10     # Compatible room placement wishes
/// )
///
/// The weights sum to 1.0, so the weighted sum is the score directly,
/// rounded to the nearest integer. Symmetric in its inputs.
pub fn compatibility_score(a: &Profile, b: &Profile, weights: &ScoringWeights) -> u8 {
    let total = sleep_score(a, b) * weights.sleep
        + cleanliness_score(a, b) * weights.cleanliness
        + social_score(a, b) * weights.social
        + work_style_score(a, b) * weights.work_style
        + room_preference_score(a, b) * weights.room_preference;

    total.round().clamp(0.0, 100.0) as u8
}

/// Sleep schedule sub-score (0-100)
///
/// Opposite fixed schedules still receive a nonzero floor: roommates on
/// opposite schedules rarely collide at home, so this is deliberate.
#[inline]
pub fn sleep_score(a: &Profile, b: &Profile) -> f64 {
    let (sa, sb) = (a.preferences.sleep_schedule, b.preferences.sleep_schedule);
    if sa == sb {
        100.0
    } else if sa == SleepSchedule::Flexible || sb == SleepSchedule::Flexible {
        75.0
    } else {
        30.0
    }
}

/// Cleanliness sub-score (0-100), penalizing large rating differences
#[inline]
pub fn cleanliness_score(a: &Profile, b: &Profile) -> f64 {
    let diff = (a.preferences.cleanliness as f64 - b.preferences.cleanliness as f64).abs();
    (100.0 - diff * 15.0).max(0.0)
}

/// Social level sub-score (0-100)
#[inline]
pub fn social_score(a: &Profile, b: &Profile) -> f64 {
    let diff = (a.preferences.social_level as f64 - b.preferences.social_level as f64).abs();
    (100.0 - diff * 12.0).max(0.0)
}

/// Work style sub-score (0-100)
///
/// A mixed schedule partially overlaps with either fixed style.
#[inline]
pub fn work_style_score(a: &Profile, b: &Profile) -> f64 {
    let (wa, wb) = (a.preferences.work_style, b.preferences.work_style);
    if wa == wb {
        100.0
    } else if wa == WorkStyle::Mixed || wb == WorkStyle::Mixed {
        80.0
    } else {
        60.0
    }
}

/// Room preference sub-score (0-100)
#[inline]
pub fn room_preference_score(a: &Profile, b: &Profile) -> f64 {
    let (ra, rb) = (a.preferences.room_preference, b.preferences.room_preference);
    if ra == rb || ra == RoomPreference::NoPreference || rb == RoomPreference::NoPreference {
        100.0
    } else {
        50.0
    }
}

/// Lifestyle sub-score (0-100)
///
/// Starts at 100 and deducts 20 for a smoking mismatch, 10 for a pet
/// mismatch, and 10 per step of music level difference; floored at 0.
#[inline]
pub fn lifestyle_score(a: &Profile, b: &Profile) -> f64 {
    let mut score: i32 = 100;

    if a.lifestyle.smoking != b.lifestyle.smoking {
        score -= 20;
    }
    if a.lifestyle.pets != b.lifestyle.pets {
        score -= 10;
    }

    let music_diff = (a.lifestyle.music.level() - b.lifestyle.music.level()).abs();
    score -= music_diff * 10;

    score.max(0) as f64
}

/// Per-dimension breakdown reported alongside the overall score
pub fn breakdown(a: &Profile, b: &Profile) -> MatchBreakdown {
    MatchBreakdown {
        sleep: sleep_score(a, b) as u8,
        cleanliness: cleanliness_score(a, b) as u8,
        social: social_score(a, b) as u8,
        lifestyle: lifestyle_score(a, b) as u8,
    }
}
