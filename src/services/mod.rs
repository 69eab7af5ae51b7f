// Service exports
pub mod profiles;

pub use profiles::{seed_profiles, ProfileStore};
