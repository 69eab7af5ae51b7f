use crate::models::{
    GuestFrequency, Lifestyle, MusicLevel, Preferences, Profile, RoomPreference, SleepSchedule,
    WorkStyle,
};
use chrono::TimeZone;

/// In-memory resident profile store
///
/// The demo deployment runs against a fixed set of resident profiles;
/// there is no external database. The store is read-only after startup
/// and shared across workers behind an Arc.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Store preloaded with the demo resident pool
    pub fn with_seed_data() -> Self {
        Self::new(seed_profiles())
    }

    /// All resident profiles, in stable registration order
    pub fn all(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

struct SeedProfile {
    id: &'static str,
    name: &'static str,
    age: u8,
    sleep_schedule: SleepSchedule,
    cleanliness: u8,
    work_style: WorkStyle,
    social_level: u8,
    room_preference: RoomPreference,
    smoking: bool,
    pets: bool,
    music: MusicLevel,
    guests: GuestFrequency,
    registered: (i32, u32, u32),
}

const SEED_PROFILES: [SeedProfile; 5] = [
    SeedProfile {
        id: "1",
        name: "Sarah Chen",
        age: 24,
        sleep_schedule: SleepSchedule::EarlyBird,
        cleanliness: 8,
        work_style: WorkStyle::Mixed,
        social_level: 6,
        room_preference: RoomPreference::Window,
        smoking: false,
        pets: false,
        music: MusicLevel::Moderate,
        guests: GuestFrequency::Occasionally,
        registered: (2024, 1, 15),
    },
    SeedProfile {
        id: "2",
        name: "Emma Rodriguez",
        age: 26,
        sleep_schedule: SleepSchedule::NightOwl,
        cleanliness: 7,
        work_style: WorkStyle::Home,
        social_level: 8,
        room_preference: RoomPreference::Quiet,
        smoking: false,
        pets: true,
        music: MusicLevel::Quiet,
        guests: GuestFrequency::Frequently,
        registered: (2024, 1, 20),
    },
    SeedProfile {
        id: "3",
        name: "Maya Patel",
        age: 23,
        sleep_schedule: SleepSchedule::Flexible,
        cleanliness: 9,
        work_style: WorkStyle::Office,
        social_level: 5,
        room_preference: RoomPreference::Window,
        smoking: false,
        pets: false,
        music: MusicLevel::Quiet,
        guests: GuestFrequency::Never,
        registered: (2024, 1, 25),
    },
    SeedProfile {
        id: "4",
        name: "Zoe Williams",
        age: 25,
        sleep_schedule: SleepSchedule::EarlyBird,
        cleanliness: 6,
        work_style: WorkStyle::Mixed,
        social_level: 7,
        room_preference: RoomPreference::NoPreference,
        smoking: false,
        pets: true,
        music: MusicLevel::Moderate,
        guests: GuestFrequency::Occasionally,
        registered: (2024, 2, 1),
    },
    SeedProfile {
        id: "5",
        name: "Aria Johnson",
        age: 22,
        sleep_schedule: SleepSchedule::NightOwl,
        cleanliness: 5,
        work_style: WorkStyle::Home,
        social_level: 9,
        room_preference: RoomPreference::Window,
        smoking: false,
        pets: false,
        music: MusicLevel::Loud,
        guests: GuestFrequency::Frequently,
        registered: (2024, 2, 5),
    },
];

/// The five demo resident profiles
pub fn seed_profiles() -> Vec<Profile> {
    SEED_PROFILES
        .iter()
        .map(|seed| {
            let (year, month, day) = seed.registered;
            Profile {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                age: seed.age,
                profile_picture: None,
                preferences: Preferences {
                    sleep_schedule: seed.sleep_schedule,
                    cleanliness: seed.cleanliness,
                    work_style: seed.work_style,
                    social_level: seed.social_level,
                    room_preference: seed.room_preference,
                },
                lifestyle: Lifestyle {
                    smoking: seed.smoking,
                    pets: seed.pets,
                    music: seed.music,
                    guests: seed.guests,
                },
                created_at: chrono::Utc
                    .with_ymd_and_hms(year, month, day, 0, 0, 0)
                    .single(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_pool_has_five_residents() {
        let store = ProfileStore::with_seed_data();
        assert_eq!(store.len(), 5);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let store = ProfileStore::with_seed_data();
        let mut ids: Vec<&str> = store.all().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_get_by_id() {
        let store = ProfileStore::with_seed_data();
        let profile = store.get("3").expect("profile 3 missing");
        assert_eq!(profile.name, "Maya Patel");
        assert_eq!(profile.preferences.cleanliness, 9);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_seed_ratings_within_scale() {
        for profile in ProfileStore::with_seed_data().all() {
            assert!((1..=10).contains(&profile.preferences.cleanliness));
            assert!((1..=10).contains(&profile.preferences.social_level));
        }
    }
}
