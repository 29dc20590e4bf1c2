use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayScore {
    pub date: NaiveDate,
    pub score: i64,
}

impl DayScore {
    pub fn meets(&self, target: i64) -> bool {
        self.score >= target
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    FirstSteps,
    TargetReached,
    WeekStreak,
    MonthStreak,
    FullCongregation,
    Fasting,
}

impl Badge {
    pub fn all() -> [Badge; 6] {
        [
            Badge::FirstSteps,
            Badge::TargetReached,
            Badge::WeekStreak,
            Badge::MonthStreak,
            Badge::FullCongregation,
            Badge::Fasting,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Badge::FirstSteps => "First Steps",
            Badge::TargetReached => "Target Reached",
            Badge::WeekStreak => "Seven-Day Streak",
            Badge::MonthStreak => "Thirty-Day Streak",
            Badge::FullCongregation => "Five in Jama'ah",
            Badge::Fasting => "Fasting Day",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Badge::FirstSteps => "scored on at least one day",
            Badge::TargetReached => "reached the daily target",
            Badge::WeekStreak => "met the target seven days in a row",
            Badge::MonthStreak => "met the target thirty days in a row",
            Badge::FullCongregation => "prayed all five prayers in congregation on one day",
            Badge::Fasting => "logged a voluntary fast",
        }
    }
}

/// Aggregates over a scored history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub days: u32,
    pub total: i64,
    pub average: f64,
    pub best: Option<DayScore>,
    pub days_meeting_target: u32,
    pub streak: Streak,
    pub badges: Vec<Badge>,
}

impl Summary {
    pub fn target_ratio(&self) -> f64 {
        if self.days == 0 {
            0.0
        } else {
            self.days_meeting_target as f64 / self.days as f64
        }
    }
}
