use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Prayers, Remembrance};

/// Self-reported difficulty of the day's circumstances.
/// Stored in record documents as its numeric factor (1.0, 1.05 or 1.1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum StruggleLevel {
    #[default]
    Normal,
    Moderate,
    High,
}

impl StruggleLevel {
    pub fn all() -> [StruggleLevel; 3] {
        [StruggleLevel::Normal, StruggleLevel::Moderate, StruggleLevel::High]
    }

    pub fn factor(&self) -> f64 {
        match self {
            StruggleLevel::Normal => 1.0,
            StruggleLevel::Moderate => 1.05,
            StruggleLevel::High => 1.1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StruggleLevel::Normal => "normal",
            StruggleLevel::Moderate => "moderate",
            StruggleLevel::High => "high",
        }
    }
}

impl TryFrom<f64> for StruggleLevel {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        StruggleLevel::all()
            .into_iter()
            .find(|level| (level.factor() - value).abs() < 1e-9)
            .ok_or_else(|| format!("struggle factor must be one of 1.0, 1.05, 1.1, got {}", value))
    }
}

impl From<StruggleLevel> for f64 {
    fn from(level: StruggleLevel) -> f64 {
        level.factor()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuranLog {
    pub memorization_units: u32,
    pub revision_units: u32,
    /// Repetitions of today's portion, when the memorization workflow is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_count: Option<u32>,
    pub completed_tasks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeLog {
    pub study_minutes: u32,
    pub reading_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_pages: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomVoluntaryEntry {
    pub label: String,
    #[serde(default)]
    pub minutes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoluntaryLog {
    pub qiyam_minutes: u32,
    pub duha_minutes: u32,
    pub rawatib_minutes: u32,
    pub fasting: bool,
    /// Carried for the record; not scored.
    pub custom: Vec<CustomVoluntaryEntry>,
}

impl VoluntaryLog {
    pub fn total_minutes(&self) -> u64 {
        self.qiyam_minutes as u64 + self.duha_minutes as u64 + self.rawatib_minutes as u64
    }
}

/// Everything observed on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub prayers: Prayers,
    #[serde(default)]
    pub quran: QuranLog,
    #[serde(default)]
    pub knowledge: KnowledgeLog,
    #[serde(default)]
    pub remembrance: Remembrance,
    #[serde(default)]
    pub voluntary: VoluntaryLog,
    #[serde(default)]
    pub custom_deed_ids: BTreeSet<String>,
    #[serde(default)]
    pub struggle: StruggleLevel,
    #[serde(default)]
    pub has_burden: bool,
    #[serde(default)]
    pub is_repented: bool,
    #[serde(default)]
    pub notes: String,
}

impl DailyRecord {
    /// All-zero record, as created on first access to a date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            prayers: Prayers::default(),
            quran: QuranLog::default(),
            knowledge: KnowledgeLog::default(),
            remembrance: Remembrance::default(),
            voluntary: VoluntaryLog::default(),
            custom_deed_ids: BTreeSet::new(),
            struggle: StruggleLevel::Normal,
            has_burden: false,
            is_repented: false,
            notes: String::new(),
        }
    }

    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
