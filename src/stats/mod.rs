//! Statistics and badges derived from a scored history.

use chrono::NaiveDate;

use crate::config::WeightConfig;
use crate::models::{Badge, DailyRecord, DayScore, Streak, Summary};
use crate::scoring::score_day;

pub fn score_history(records: &[DailyRecord], weights: &WeightConfig) -> Vec<DayScore> {
    records
        .iter()
        .map(|r| DayScore {
            date: r.date,
            score: score_day(r, weights),
        })
        .collect()
}

/// Target streaks over consecutive calendar days.
///
/// `current` is the run ending at the latest recorded date, so a history whose
/// last day missed the target has no current streak.
pub fn calculate_streak(scores: &[DayScore], target: i64) -> Streak {
    let mut dates: Vec<NaiveDate> = scores
        .iter()
        .filter(|s| s.meets(target))
        .map(|s| s.date)
        .collect();
    dates.sort();
    dates.dedup();

    let best = calculate_best_streak(&dates);

    let latest = scores.iter().map(|s| s.date).max();
    let mut current = 0u32;
    if let Some(mut check_date) = latest {
        for d in dates.iter().rev() {
            if *d != check_date {
                break;
            }
            current += 1;
            match check_date.pred_opt() {
                Some(prev) => check_date = prev,
                None => break,
            }
        }
    }

    Streak { current, best }
}

fn calculate_best_streak(sorted: &[NaiveDate]) -> u32 {
    if sorted.is_empty() {
        return 0;
    }

    let mut best = 0u32;
    let mut current = 1u32;

    for i in 1..sorted.len() {
        let prev = sorted[i - 1];
        let curr = sorted[i];
        if prev.succ_opt() == Some(curr) {
            current += 1;
        } else {
            current = 1;
        }
        best = best.max(current);
    }
    best.max(current)
}

pub fn earned_badges(
    records: &[DailyRecord],
    scores: &[DayScore],
    target: i64,
    streak: &Streak,
) -> Vec<Badge> {
    Badge::all()
        .into_iter()
        .filter(|badge| match badge {
            Badge::FirstSteps => scores.iter().any(|s| s.score > 0),
            Badge::TargetReached => scores.iter().any(|s| s.meets(target)),
            Badge::WeekStreak => streak.best >= 7,
            Badge::MonthStreak => streak.best >= 30,
            Badge::FullCongregation => records.iter().any(|r| {
                r.prayers
                    .iter()
                    .all(|(_, obs)| obs.performed && obs.in_congregation)
            }),
            Badge::Fasting => records.iter().any(|r| r.voluntary.fasting),
        })
        .collect()
}

pub fn summarize(records: &[DailyRecord], scores: &[DayScore], target: i64) -> Summary {
    let days = scores.len() as u32;
    let total: i64 = scores.iter().map(|s| s.score).sum();
    let average = if days == 0 {
        0.0
    } else {
        total as f64 / days as f64
    };
    // earliest date wins a tie
    let best = scores
        .iter()
        .fold(None::<&DayScore>, |best, s| match best {
            Some(b) if b.score >= s.score => Some(b),
            _ => Some(s),
        })
        .cloned();
    let days_meeting_target = scores.iter().filter(|s| s.meets(target)).count() as u32;
    let streak = calculate_streak(scores, target);
    let badges = earned_badges(records, scores, target, &streak);

    Summary {
        days,
        total,
        average,
        best,
        days_meeting_target,
        streak,
        badges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn scores(values: &[(u32, i64)]) -> Vec<DayScore> {
        values
            .iter()
            .map(|(d, score)| DayScore {
                date: day(*d),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn streak_counts_consecutive_target_days() {
        let history = scores(&[(1, 100), (2, 100), (3, 10), (4, 100), (5, 100), (6, 100)]);
        assert_eq!(calculate_streak(&history, 100), Streak { current: 3, best: 3 });
    }

    #[test]
    fn gap_in_dates_breaks_streak() {
        let history = scores(&[(1, 100), (2, 100), (3, 100), (5, 100)]);
        assert_eq!(calculate_streak(&history, 100), Streak { current: 1, best: 3 });
    }

    #[test]
    fn missed_last_day_has_no_current_streak() {
        let history = scores(&[(1, 100), (2, 100), (3, 0)]);
        assert_eq!(calculate_streak(&history, 100), Streak { current: 0, best: 2 });
    }

    #[test]
    fn empty_history_summary() {
        let summary = summarize(&[], &[], 100);
        assert_eq!(summary.days, 0);
        assert_eq!(summary.average, 0.0);
        assert!(summary.best.is_none());
        assert!(summary.badges.is_empty());
        assert_eq!(summary.target_ratio(), 0.0);
    }

    #[test]
    fn summary_over_scored_records() {
        let weights = WeightConfig::default();
        let mut records: Vec<DailyRecord> = (1..=3).map(|d| DailyRecord::new(day(d))).collect();
        for prayer in crate::models::PrayerType::all() {
            let obs = records[1].prayers.get_mut(prayer);
            obs.performed = true;
            obs.in_congregation = true;
        }
        records[2].remembrance.counters.istighfar = 50;

        let history = score_history(&records, &weights);
        assert_eq!(history[1].score, 5 * 2700);

        let summary = summarize(&records, &history, 10_000);
        assert_eq!(summary.days, 3);
        assert_eq!(summary.total, 13_550);
        assert_eq!(summary.best.as_ref().map(|b| b.date), Some(day(2)));
        assert_eq!(summary.days_meeting_target, 1);
        assert_eq!(
            summary.badges,
            vec![Badge::FirstSteps, Badge::TargetReached, Badge::FullCongregation]
        );
    }

    #[test]
    fn week_streak_badge() {
        let history = scores(&[(1, 5), (2, 5), (3, 5), (4, 5), (5, 5), (6, 5), (7, 5)]);
        let records: Vec<DailyRecord> = history.iter().map(|s| DailyRecord::new(s.date)).collect();
        let summary = summarize(&records, &history, 5);
        assert!(summary.badges.contains(&Badge::WeekStreak));
        assert!(!summary.badges.contains(&Badge::MonthStreak));
    }
}
