// Core algorithm exports
pub mod explain;
pub mod matcher;
pub mod rooms;
pub mod scoring;

pub use explain::match_explanation;
pub use matcher::{MatchError, Matcher};
pub use rooms::suggest_room;
pub use scoring::{breakdown, compatibility_score};
