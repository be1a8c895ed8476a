pub mod activity_type;
pub mod details;
pub mod preferences;
pub mod record;

pub use activity_type::ActivityType;
pub use details::{
    ActivityDetails, BottleContents, DiaperKind, NursingSide, SleepKind,
};
pub use preferences::{
    CustomPreferences, FeedingPreferences, PumpingPreferences, SleepPreferences,
};
pub use record::ActivityRecord;
