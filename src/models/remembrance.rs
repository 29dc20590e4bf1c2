use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItem {
    Morning,
    Evening,
    BeforeSleep,
    AfterPrayer,
}

impl ChecklistItem {
    pub fn all() -> [ChecklistItem; 4] {
        [
            ChecklistItem::Morning,
            ChecklistItem::Evening,
            ChecklistItem::BeforeSleep,
            ChecklistItem::AfterPrayer,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChecklistItem::Morning => "Morning Adhkar",
            ChecklistItem::Evening => "Evening Adhkar",
            ChecklistItem::BeforeSleep => "Before-Sleep Adhkar",
            ChecklistItem::AfterPrayer => "Post-Salah Adhkar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterKind {
    Istighfar,
    Salawat,
    Tasbih,
    Tahmid,
    Tahlil,
}

impl CounterKind {
    pub fn all() -> [CounterKind; 5] {
        [
            CounterKind::Istighfar,
            CounterKind::Salawat,
            CounterKind::Tasbih,
            CounterKind::Tahmid,
            CounterKind::Tahlil,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CounterKind::Istighfar => "istighfar",
            CounterKind::Salawat => "salawat",
            CounterKind::Tasbih => "tasbih",
            CounterKind::Tahmid => "tahmid",
            CounterKind::Tahlil => "tahlil",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Checklist {
    pub morning: bool,
    pub evening: bool,
    pub before_sleep: bool,
    pub after_prayer: bool,
}

impl Checklist {
    pub fn is_done(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::Morning => self.morning,
            ChecklistItem::Evening => self.evening,
            ChecklistItem::BeforeSleep => self.before_sleep,
            ChecklistItem::AfterPrayer => self.after_prayer,
        }
    }

    pub fn done_count(&self) -> u32 {
        ChecklistItem::all()
            .into_iter()
            .filter(|item| self.is_done(*item))
            .count() as u32
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Counters {
    pub istighfar: u32,
    pub salawat: u32,
    pub tasbih: u32,
    pub tahmid: u32,
    pub tahlil: u32,
}

impl Counters {
    pub fn get(&self, kind: CounterKind) -> u32 {
        match kind {
            CounterKind::Istighfar => self.istighfar,
            CounterKind::Salawat => self.salawat,
            CounterKind::Tasbih => self.tasbih,
            CounterKind::Tahmid => self.tahmid,
            CounterKind::Tahlil => self.tahlil,
        }
    }

    pub fn total(&self) -> u64 {
        CounterKind::all()
            .into_iter()
            .map(|k| self.get(k) as u64)
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Remembrance {
    pub checklist: Checklist,
    pub counters: Counters,
}
