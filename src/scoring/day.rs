use chrono::NaiveDate;
use serde::Serialize;

use crate::config::WeightConfig;
use crate::models::{DailyRecord, PrayerType, StruggleLevel};
use crate::scoring::score_prayer;

/// Task ids with one of these prefixes are linking or scheduled-revision tasks.
const REVISION_TASK_PREFIXES: &[&str] = &["link", "rabt", "revision"];

pub fn is_revision_task(task_id: &str) -> bool {
    let id = task_id.to_lowercase();
    REVISION_TASK_PREFIXES.iter().any(|p| id.starts_with(p))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayModifier {
    Burden,
    Struggle(StruggleLevel),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrayerScore {
    pub prayer: PrayerType,
    pub points: f64,
}

/// Every additive part of a day's score, plus the whole-day adjustment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBreakdown {
    pub date: NaiveDate,
    pub prayers: Vec<PrayerScore>,
    pub prayers_total: f64,
    pub memorization: f64,
    pub revision_tasks: f64,
    pub declared_revision: f64,
    pub quran_tasks: f64,
    pub knowledge: f64,
    pub checklist: f64,
    pub counters: f64,
    pub voluntary: f64,
    pub fasting: f64,
    pub custom_deeds: f64,
    pub raw_total: f64,
    pub modifier: DayModifier,
    pub multiplier: f64,
    pub score: i64,
}

impl DayBreakdown {
    /// Labelled subtotals in the order they are added up.
    pub fn subtotals(&self) -> [(&'static str, f64); 11] {
        [
            ("Prayers", self.prayers_total),
            ("Memorization", self.memorization),
            ("Revision tasks", self.revision_tasks),
            ("Revision units", self.declared_revision),
            ("Other Qur'an tasks", self.quran_tasks),
            ("Knowledge", self.knowledge),
            ("Adhkar checklist", self.checklist),
            ("Counters", self.counters),
            ("Voluntary prayer", self.voluntary),
            ("Fasting", self.fasting),
            ("Custom deeds", self.custom_deeds),
        ]
    }
}

pub fn score_day(record: &DailyRecord, config: &WeightConfig) -> i64 {
    breakdown_day(record, config).score
}

pub fn breakdown_day(record: &DailyRecord, config: &WeightConfig) -> DayBreakdown {
    let prayers: Vec<PrayerScore> = record
        .prayers
        .iter()
        .map(|(prayer, obs)| PrayerScore {
            prayer,
            points: score_prayer(obs, record.has_burden, config),
        })
        .collect();
    let prayers_total: f64 = prayers.iter().map(|p| p.points).sum();

    let quran = &record.quran;
    let memorization = quran.memorization_units as f64 * config.per_memorization_unit
        + quran.repetition_count.unwrap_or(0) as f64 * config.per_page;

    let revision_task_count = quran
        .completed_tasks
        .iter()
        .filter(|t| is_revision_task(t))
        .count();
    let other_task_count = quran.completed_tasks.len() - revision_task_count;
    let revision_tasks = revision_task_count as f64 * config.per_revision_unit;
    let declared_revision = quran.revision_units as f64 * config.per_revision_unit;
    let quran_tasks = other_task_count as f64 * config.per_quran_task;

    let knowledge = &record.knowledge;
    let knowledge = knowledge.study_minutes as f64 * config.per_study_minute
        + knowledge.reading_minutes as f64 * config.per_reading_minute
        + knowledge.reading_pages.unwrap_or(0) as f64 * config.per_page;

    let remembrance = &record.remembrance;
    let checklist = remembrance.checklist.done_count() as f64 * config.per_checklist_item;
    let counters = remembrance.counters.total() as f64 * config.per_counter_increment;

    let voluntary = record.voluntary.total_minutes() as f64 * config.per_voluntary_minute;
    let fasting = if record.voluntary.fasting {
        config.per_fasting_day
    } else {
        0.0
    };

    let custom_deeds: f64 = record
        .custom_deed_ids
        .iter()
        .map(|id| match config.custom_deed(id) {
            Some(deed) => deed.points,
            None => {
                log::debug!("{}: custom deed '{}' is no longer configured", record.date, id);
                0.0
            }
        })
        .sum();

    let raw_total = prayers_total
        + memorization
        + revision_tasks
        + declared_revision
        + quran_tasks
        + knowledge
        + checklist
        + counters
        + voluntary
        + fasting
        + custom_deeds;

    let (modifier, multiplier) = if record.has_burden {
        (DayModifier::Burden, config.burden_multiplier())
    } else {
        (DayModifier::Struggle(record.struggle), record.struggle.factor())
    };

    let score = (raw_total * multiplier).round() as i64;

    log::debug!(
        "{}: prayers={} quran={} knowledge={} adhkar={} voluntary={} custom={} raw={} x{} => {}",
        record.date,
        prayers_total,
        memorization + revision_tasks + declared_revision + quran_tasks,
        knowledge,
        checklist + counters,
        voluntary + fasting,
        custom_deeds,
        raw_total,
        multiplier,
        score
    );

    DayBreakdown {
        date: record.date,
        prayers,
        prayers_total,
        memorization,
        revision_tasks,
        declared_revision,
        quran_tasks,
        knowledge,
        checklist,
        counters,
        voluntary,
        fasting,
        custom_deeds,
        raw_total,
        modifier,
        multiplier,
        score,
    }
}
