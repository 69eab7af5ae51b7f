use crate::models::{Profile, SleepSchedule};

/// Maximum number of clauses included in an explanation
const MAX_CLAUSES: usize = 3;

/// Build a human-readable explanation for why two profiles match
///
/// Clauses are collected in a fixed priority order (sleep, cleanliness,
/// social, work style) and the first three are joined into a sentence.
/// Output is fully deterministic for the same pair of profiles.
pub fn match_explanation(a: &Profile, b: &Profile) -> String {
    let mut clauses: Vec<String> = Vec::new();

    // Sleep schedule
    let (sa, sb) = (a.preferences.sleep_schedule, b.preferences.sleep_schedule);
    if sa == sb {
        clauses.push(format!("Both are {}s", sa.label()));
    } else if sa == SleepSchedule::Flexible || sb == SleepSchedule::Flexible {
        clauses.push("Flexible sleep schedules complement each other".to_string());
    }

    // Cleanliness banding
    let clean_diff =
        (a.preferences.cleanliness as i32 - b.preferences.cleanliness as i32).abs();
    if clean_diff <= 2 {
        clauses.push("Similar cleanliness standards".to_string());
    } else if clean_diff <= 4 {
        clauses.push("Complementary organization styles".to_string());
    }

    // Social level banding
    let social_diff =
        (a.preferences.social_level as i32 - b.preferences.social_level as i32).abs();
    if social_diff <= 2 {
        clauses.push("Balanced social energy".to_string());
    } else if social_diff <= 4 {
        clauses.push("Good balance of social and quiet time".to_string());
    }

    // Work style
    if a.preferences.work_style == b.preferences.work_style {
        clauses.push(format!(
            "Both prefer {} work",
            a.preferences.work_style.label()
        ));
    }

    if clauses.is_empty() {
        clauses.push("Complementary personalities that could work well together".to_string());
    }

    clauses.truncate(MAX_CLAUSES);
    format!("{}.", clauses.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        GuestFrequency, Lifestyle, MusicLevel, Preferences, RoomPreference, WorkStyle,
    };

    fn create_test_profile(
        sleep: SleepSchedule,
        cleanliness: u8,
        work: WorkStyle,
        social: u8,
    ) -> Profile {
        Profile {
            id: "test".to_string(),
            name: "Test User".to_string(),
            age: 25,
            profile_picture: None,
            preferences: Preferences {
                sleep_schedule: sleep,
                cleanliness,
                work_style: work,
                social_level: social,
                room_preference: RoomPreference::NoPreference,
            },
            lifestyle: Lifestyle {
                smoking: false,
                pets: false,
                music: MusicLevel::Moderate,
                guests: GuestFrequency::Occasionally,
            },
            created_at: None,
        }
    }

    #[test]
    fn test_shared_sleep_schedule_clause() {
        let a = create_test_profile(SleepSchedule::EarlyBird, 5, WorkStyle::Office, 5);
        let b = create_test_profile(SleepSchedule::EarlyBird, 5, WorkStyle::Home, 5);

        let explanation = match_explanation(&a, &b);
        assert!(explanation.starts_with("Both are early birds"));
    }

    #[test]
    fn test_clause_limit_and_order() {
        // Everything matches: sleep, cleanliness, social, work all qualify,
        // but only the first three clauses survive.
        let a = create_test_profile(SleepSchedule::NightOwl, 7, WorkStyle::Home, 6);
        let b = a.clone();

        let explanation = match_explanation(&a, &b);
        assert_eq!(
            explanation,
            "Both are night owls, Similar cleanliness standards, Balanced social energy."
        );
        assert!(!explanation.contains("work"));
    }

    #[test]
    fn test_fallback_sentence() {
        let a = create_test_profile(SleepSchedule::EarlyBird, 1, WorkStyle::Office, 1);
        let b = create_test_profile(SleepSchedule::NightOwl, 10, WorkStyle::Home, 10);

        assert_eq!(
            match_explanation(&a, &b),
            "Complementary personalities that could work well together."
        );
    }

    #[test]
    fn test_deterministic_output() {
        let a = create_test_profile(SleepSchedule::Flexible, 6, WorkStyle::Mixed, 4);
        let b = create_test_profile(SleepSchedule::NightOwl, 8, WorkStyle::Mixed, 7);

        assert_eq!(match_explanation(&a, &b), match_explanation(&a, &b));
    }

    #[test]
    fn test_flexible_schedule_clause() {
        let a = create_test_profile(SleepSchedule::Flexible, 1, WorkStyle::Office, 1);
        let b = create_test_profile(SleepSchedule::NightOwl, 10, WorkStyle::Home, 10);

        let explanation = match_explanation(&a, &b);
        assert_eq!(
            explanation,
            "Flexible sleep schedules complement each other."
        );
    }
}
