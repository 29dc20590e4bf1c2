use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::ConfigError;
use crate::models::PresenceLevel;

pub const PRESENCE_LEVELS: usize = PresenceLevel::MAX as usize + 1;

const DEFAULT_PRESENCE_MULTIPLIERS: [f64; PRESENCE_LEVELS] = [-0.5, -0.25, 0.0, 0.25, 0.5, 1.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDeed {
    pub id: String,
    pub label: String,
    pub points: f64,
}

/// Point values used to turn a daily record into a score.
///
/// Deserializing always goes through [`merge_config`] against the built-in
/// default, so files written by older versions load with every field present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredWeights")]
pub struct WeightConfig {
    pub fard_congregation: f64,
    pub fard_solo: f64,
    /// Fallback for surrounding deeds without their own weight.
    pub routine_sunnah: f64,
    pub per_memorization_unit: f64,
    pub per_revision_unit: f64,
    pub per_page: f64,
    pub per_study_minute: f64,
    pub per_reading_minute: f64,
    pub per_checklist_item: f64,
    pub per_counter_increment: f64,
    pub per_voluntary_minute: f64,
    pub per_fasting_day: f64,
    /// Completed Qur'an sub-tasks that are not linking/revision tasks.
    pub per_quran_task: f64,
    pub burden_deduction_percent: f64,
    /// Indexed by presence level 0..=5.
    pub presence_multipliers: [f64; PRESENCE_LEVELS],
    pub surrounding_deed_weights: BTreeMap<String, f64>,
    pub custom_deeds: Vec<CustomDeed>,
}

impl Default for WeightConfig {
    fn default() -> Self {
        let surrounding_deed_weights = [
            ("adhan_response", 100.0),
            ("early_arrival", 150.0),
            ("first_row", 200.0),
            ("post_prayer_adhkar", 75.0),
        ]
        .into_iter()
        .map(|(id, w)| (id.to_string(), w))
        .collect();

        Self {
            fard_congregation: 2700.0,
            fard_solo: 100.0,
            routine_sunnah: 50.0,
            per_memorization_unit: 500.0,
            per_revision_unit: 200.0,
            per_page: 20.0,
            per_study_minute: 10.0,
            per_reading_minute: 5.0,
            per_checklist_item: 100.0,
            per_counter_increment: 1.0,
            per_voluntary_minute: 20.0,
            per_fasting_day: 1000.0,
            per_quran_task: 50.0,
            burden_deduction_percent: 30.0,
            presence_multipliers: DEFAULT_PRESENCE_MULTIPLIERS,
            surrounding_deed_weights,
            custom_deeds: vec![],
        }
    }
}

impl WeightConfig {
    pub fn presence_multiplier(&self, level: PresenceLevel) -> f64 {
        self.presence_multipliers[level.index()]
    }

    pub fn surrounding_weight(&self, deed_id: &str) -> f64 {
        self.surrounding_deed_weights
            .get(deed_id)
            .copied()
            .unwrap_or(self.routine_sunnah)
    }

    pub fn custom_deed(&self, deed_id: &str) -> Option<&CustomDeed> {
        self.custom_deeds.iter().find(|d| d.id == deed_id)
    }

    /// Multiplier applied to a burdened day's raw total.
    pub fn burden_multiplier(&self) -> f64 {
        1.0 - self.burden_deduction_percent / 100.0
    }

    fn scalar_weights(&self) -> [(&'static str, f64); 13] {
        [
            ("fard_congregation", self.fard_congregation),
            ("fard_solo", self.fard_solo),
            ("routine_sunnah", self.routine_sunnah),
            ("per_memorization_unit", self.per_memorization_unit),
            ("per_revision_unit", self.per_revision_unit),
            ("per_page", self.per_page),
            ("per_study_minute", self.per_study_minute),
            ("per_reading_minute", self.per_reading_minute),
            ("per_checklist_item", self.per_checklist_item),
            ("per_counter_increment", self.per_counter_increment),
            ("per_voluntary_minute", self.per_voluntary_minute),
            ("per_fasting_day", self.per_fasting_day),
            ("per_quran_task", self.per_quran_task),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let neutral = self.presence_multiplier(PresenceLevel::NEUTRAL);
        if neutral != 0.0 {
            return Err(ConfigError::PresenceNotNeutral(neutral));
        }
        for (level, value) in self.presence_multipliers.iter().copied().enumerate() {
            if !value.is_finite() || value <= -1.0 {
                return Err(ConfigError::PresenceTooLow { level, value });
            }
            if level > 0 && value < self.presence_multipliers[level - 1] {
                return Err(ConfigError::PresenceDecreasing { level });
            }
        }

        for (name, value) in self.scalar_weights() {
            check_weight(name, value)?;
        }
        for (id, value) in &self.surrounding_deed_weights {
            check_weight(id, *value)?;
        }

        let pct = self.burden_deduction_percent;
        if !(0.0..=100.0).contains(&pct) {
            return Err(ConfigError::BurdenOutOfRange(pct));
        }

        let mut seen = BTreeSet::new();
        for deed in &self.custom_deeds {
            if deed.id.trim().is_empty() {
                return Err(ConfigError::EmptyDeedId);
            }
            if !seen.insert(deed.id.as_str()) {
                return Err(ConfigError::DuplicateDeed(deed.id.clone()));
            }
            check_weight(&deed.id, deed.points)?;
        }
        Ok(())
    }

    pub fn add_custom_deed(&mut self, deed: CustomDeed) -> Result<(), ConfigError> {
        if deed.id.trim().is_empty() {
            return Err(ConfigError::EmptyDeedId);
        }
        if self.custom_deed(&deed.id).is_some() {
            return Err(ConfigError::DuplicateDeed(deed.id));
        }
        check_weight(&deed.id, deed.points)?;
        self.custom_deeds.push(deed);
        Ok(())
    }

    pub fn remove_custom_deed(&mut self, deed_id: &str) -> Result<CustomDeed, ConfigError> {
        let pos = self
            .custom_deeds
            .iter()
            .position(|d| d.id == deed_id)
            .ok_or_else(|| ConfigError::UnknownDeed(deed_id.to_string()))?;
        Ok(self.custom_deeds.remove(pos))
    }
}

fn check_weight(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeight(name.to_string()))
    }
}

/// A weight table as found on disk; any field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoredWeights {
    pub fard_congregation: Option<f64>,
    pub fard_solo: Option<f64>,
    pub routine_sunnah: Option<f64>,
    pub per_memorization_unit: Option<f64>,
    pub per_revision_unit: Option<f64>,
    pub per_page: Option<f64>,
    pub per_study_minute: Option<f64>,
    pub per_reading_minute: Option<f64>,
    pub per_checklist_item: Option<f64>,
    pub per_counter_increment: Option<f64>,
    pub per_voluntary_minute: Option<f64>,
    pub per_fasting_day: Option<f64>,
    pub per_quran_task: Option<f64>,
    pub burden_deduction_percent: Option<f64>,
    pub presence_multipliers: Option<Vec<f64>>,
    pub surrounding_deed_weights: Option<BTreeMap<String, f64>>,
    pub custom_deeds: Option<Vec<CustomDeed>>,
}

impl From<StoredWeights> for WeightConfig {
    fn from(stored: StoredWeights) -> Self {
        merge_config(stored, &WeightConfig::default())
    }
}

/// Fill every field missing from `stored` so the result is complete.
///
/// Missing scalars take the default's value, a missing mapping or list is
/// empty, and a short presence table is completed from the default table.
pub fn merge_config(stored: StoredWeights, default: &WeightConfig) -> WeightConfig {
    let mut presence_multipliers = default.presence_multipliers;
    if let Some(levels) = stored.presence_multipliers {
        for (slot, value) in presence_multipliers.iter_mut().zip(levels) {
            *slot = value;
        }
    }

    WeightConfig {
        fard_congregation: stored.fard_congregation.unwrap_or(default.fard_congregation),
        fard_solo: stored.fard_solo.unwrap_or(default.fard_solo),
        routine_sunnah: stored.routine_sunnah.unwrap_or(default.routine_sunnah),
        per_memorization_unit: stored
            .per_memorization_unit
            .unwrap_or(default.per_memorization_unit),
        per_revision_unit: stored.per_revision_unit.unwrap_or(default.per_revision_unit),
        per_page: stored.per_page.unwrap_or(default.per_page),
        per_study_minute: stored.per_study_minute.unwrap_or(default.per_study_minute),
        per_reading_minute: stored.per_reading_minute.unwrap_or(default.per_reading_minute),
        per_checklist_item: stored.per_checklist_item.unwrap_or(default.per_checklist_item),
        per_counter_increment: stored
            .per_counter_increment
            .unwrap_or(default.per_counter_increment),
        per_voluntary_minute: stored
            .per_voluntary_minute
            .unwrap_or(default.per_voluntary_minute),
        per_fasting_day: stored.per_fasting_day.unwrap_or(default.per_fasting_day),
        per_quran_task: stored.per_quran_task.unwrap_or(default.per_quran_task),
        burden_deduction_percent: stored
            .burden_deduction_percent
            .unwrap_or(default.burden_deduction_percent),
        presence_multipliers,
        surrounding_deed_weights: stored.surrounding_deed_weights.unwrap_or_default(),
        custom_deeds: stored.custom_deeds.unwrap_or_default(),
    }
}
