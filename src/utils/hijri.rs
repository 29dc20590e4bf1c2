use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

/// Hijri label for a record's date, shifted by `offset_days` for local moon
/// sighting. `None` when the date is outside the converter's range.
pub fn hijri_label(date: NaiveDate, offset_days: i32) -> Option<String> {
    let adjusted = date + Duration::days(offset_days as i64);
    match HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    ) {
        Ok(hd) => Some(format!(
            "{} {} {}",
            hd.day(),
            hijri_month_name(hd.month()),
            hd.year()
        )),
        Err(e) => {
            log::debug!("no hijri date for {}: {}", adjusted, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(hijri_month_name(9), "Ramadan");
        assert_eq!(hijri_month_name(13), "Unknown");
    }

    #[test]
    fn offset_shifts_the_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let base = hijri_label(date, 0);
        let shifted = hijri_label(date, 1);
        assert!(base.is_some());
        assert_ne!(base, shifted);
    }
}
