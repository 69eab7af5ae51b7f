use crate::models::{Profile, RoomPreference};
use rand::Rng;

const FLOORS: std::ops::RangeInclusive<u8> = 2..=5;
const ROOM_NUMBERS: std::ops::RangeInclusive<u8> = 1..=8;
const WINGS: [char; 3] = ['A', 'B', 'C'];

/// Suggest a room label for a matched pair
///
/// The floor, room number and wing are drawn from the supplied RNG so
/// callers that need reproducible output (tests, replays) can pass a
/// seeded generator. The feature suffix is deterministic: it depends
/// only on whether either party prefers a window or a quiet room.
pub fn suggest_room<R: Rng + ?Sized>(rng: &mut R, a: &Profile, b: &Profile) -> String {
    let prefer_window = a.preferences.room_preference == RoomPreference::Window
        || b.preferences.room_preference == RoomPreference::Window;
    let prefer_quiet = a.preferences.room_preference == RoomPreference::Quiet
        || b.preferences.room_preference == RoomPreference::Quiet;

    let floor = rng.gen_range(FLOORS);
    let room_num = rng.gen_range(ROOM_NUMBERS);
    let wing = WINGS[rng.gen_range(0..WINGS.len())];

    let feature = match (prefer_window, prefer_quiet) {
        (true, false) => ", Near Window",
        (false, true) => ", Quiet Side",
        (true, true) => ", Garden View",
        (false, false) => "",
    };

    format!("Room {}0{}-{}{}", floor, room_num, wing, feature)
}
