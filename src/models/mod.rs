pub mod prayer;
pub mod record;
pub mod remembrance;
pub mod stats;

pub use prayer::{PrayerObservation, PrayerType, Prayers, PresenceLevel};
pub use record::{DailyRecord, StruggleLevel};
pub use remembrance::{ChecklistItem, CounterKind, Remembrance};
pub use stats::{Badge, DayScore, Streak, Summary};
