use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerType {
    Fajr,
    Zuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerType {
    pub fn all() -> [PrayerType; 5] {
        [
            PrayerType::Fajr,
            PrayerType::Zuhr,
            PrayerType::Asr,
            PrayerType::Maghrib,
            PrayerType::Isha,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "Fajr",
            PrayerType::Zuhr => "Zuhr",
            PrayerType::Asr => "Asr",
            PrayerType::Maghrib => "Maghrib",
            PrayerType::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for PrayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Inward attentiveness during a prayer, 0 (absent-minded) to 5.
/// Level 2 is the neutral baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PresenceLevel(u8);

impl PresenceLevel {
    pub const MAX: u8 = 5;
    pub const NEUTRAL: PresenceLevel = PresenceLevel(2);

    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::MAX).then_some(PresenceLevel(level))
    }

    #[cfg(test)]
    pub fn all() -> impl Iterator<Item = PresenceLevel> {
        (0..=Self::MAX).map(PresenceLevel)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for PresenceLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PresenceLevel::new(value)
            .ok_or_else(|| format!("presence level must be 0..={}, got {}", Self::MAX, value))
    }
}

impl From<PresenceLevel> for u8 {
    fn from(level: PresenceLevel) -> u8 {
        level.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrayerObservation {
    pub performed: bool,
    pub in_congregation: bool,
    pub presence: PresenceLevel,
    pub surrounding_deed_ids: BTreeSet<String>,
}

/// The five obligatory prayers of one day, one observation each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Prayers {
    pub fajr: PrayerObservation,
    #[serde(alias = "dhuhr")]
    pub zuhr: PrayerObservation,
    pub asr: PrayerObservation,
    pub maghrib: PrayerObservation,
    pub isha: PrayerObservation,
}

impl Prayers {
    pub fn get(&self, prayer: PrayerType) -> &PrayerObservation {
        match prayer {
            PrayerType::Fajr => &self.fajr,
            PrayerType::Zuhr => &self.zuhr,
            PrayerType::Asr => &self.asr,
            PrayerType::Maghrib => &self.maghrib,
            PrayerType::Isha => &self.isha,
        }
    }

    #[cfg(test)]
    pub fn get_mut(&mut self, prayer: PrayerType) -> &mut PrayerObservation {
        match prayer {
            PrayerType::Fajr => &mut self.fajr,
            PrayerType::Zuhr => &mut self.zuhr,
            PrayerType::Asr => &mut self.asr,
            PrayerType::Maghrib => &mut self.maghrib,
            PrayerType::Isha => &mut self.isha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerType, &PrayerObservation)> {
        PrayerType::all().into_iter().map(move |p| (p, self.get(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_level_rejects_out_of_range() {
        assert!(PresenceLevel::new(5).is_some());
        assert!(PresenceLevel::new(6).is_none());
        assert!(serde_json::from_str::<PresenceLevel>("9").is_err());
        assert_eq!(serde_json::from_str::<PresenceLevel>("3").unwrap().index(), 3);
    }

    #[test]
    fn prayers_accept_dhuhr_alias() {
        let prayers: Prayers =
            serde_json::from_str(r#"{"dhuhr": {"performed": true}}"#).unwrap();
        assert!(prayers.get(PrayerType::Zuhr).performed);
        assert!(!prayers.get(PrayerType::Fajr).performed);
    }

    #[test]
    fn iter_walks_prayers_in_day_order() {
        let order: Vec<PrayerType> = Prayers::default().iter().map(|(p, _)| p).collect();
        assert_eq!(order, PrayerType::all().to_vec());
    }

    #[test]
    fn prayers_reject_misspelled_keys() {
        let err = serde_json::from_str::<Prayers>(r#"{"magrib": {"performed": true}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("magrib"));
    }
}
