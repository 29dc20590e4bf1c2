use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

use crate::cli::args::{ConfigCommands, DeedCommands};
use crate::config::{AppConfig, CustomDeed};
use crate::models::{ChecklistItem, CounterKind, DailyRecord};
use crate::records::{load_record, load_records};
use crate::scoring::{DayBreakdown, DayModifier, breakdown_day};
use crate::stats::{score_history, summarize};
use crate::utils::format::{format_percent, format_points, progress_bar};
use crate::utils::hijri::hijri_label;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn date_heading(date: NaiveDate, config: &AppConfig) -> String {
    let gregorian = date.format("%Y-%m-%d").to_string();
    if !config.display.show_hijri {
        return gregorian;
    }
    match hijri_label(date, config.display.hijri_offset) {
        Some(hijri) => format!("{} ({})", gregorian, hijri),
        None => gregorian,
    }
}

// ─── Score ───────────────────────────────────────────────────────────────────

pub fn handle_score(config: &AppConfig, file: &Path, json: bool) -> Result<()> {
    let record = load_record(file)?;
    let breakdown = breakdown_day(&record, &config.weights);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!();
    println_colored!(GOLD, "  Daily score — {}", date_heading(record.date, config));
    println!();

    print_prayers(&record, &breakdown);
    print_remembrance(&record);
    print_subtotals(&breakdown);

    let orphaned: Vec<&str> = record
        .custom_deed_ids
        .iter()
        .filter(|id| config.weights.custom_deed(id).is_none())
        .map(String::as_str)
        .collect();
    if !orphaned.is_empty() {
        println_colored!(DIM, "  Not configured (0 points): {}", orphaned.join(", "));
    }
    for entry in &record.voluntary.custom {
        println_colored!(DIM, "  Also logged: {} ({} min, not scored)", entry.label, entry.minutes);
    }

    println!();
    println!("  {:<20}  {}", "Raw total", format_points(breakdown.raw_total));
    match breakdown.modifier {
        DayModifier::Burden => println_colored!(
            RED,
            "  {:<20}  -{}%{}",
            "Burden",
            format_points(config.weights.burden_deduction_percent),
            if record.is_repented { "  (repented)" } else { "" }
        ),
        DayModifier::Struggle(level) => println!(
            "  {:<20}  ×{} ({})",
            "Struggle",
            level.factor(),
            level.as_str()
        ),
    }

    let target = config.daily_target;
    let ratio = breakdown.score as f64 / target as f64;
    let color = if breakdown.score >= target { GREEN } else { AMBER };
    println!();
    println_colored!(BOLD, "  Score: {} / {}", breakdown.score, target);
    println_colored!(
        color,
        "  {}  {}",
        progress_bar(breakdown.score.max(0) as u64, target as u64, 24),
        format_percent(ratio)
    );
    if !record.notes.is_empty() {
        println!();
        println_colored!(DIM, "  Notes: {}", record.notes);
    }
    println!();
    Ok(())
}

fn print_prayers(record: &DailyRecord, breakdown: &DayBreakdown) {
    for ps in &breakdown.prayers {
        let obs = record.prayers.get(ps.prayer);
        if !obs.performed {
            println_colored!(DIM, "  {:<10}  —", ps.prayer.display_name());
            continue;
        }
        let how = if obs.in_congregation { "jama'ah" } else { "alone" };
        println_colored!(
            GREEN,
            "  {:<10}  {:>7}  {} · presence {} · {} extra",
            ps.prayer.display_name(),
            format_points(ps.points),
            how,
            u8::from(obs.presence),
            obs.surrounding_deed_ids.len()
        );
    }
    println!();
}

fn print_remembrance(record: &DailyRecord) {
    let checklist = &record.remembrance.checklist;
    let done: Vec<&str> = ChecklistItem::all()
        .into_iter()
        .filter(|item| checklist.is_done(*item))
        .map(|item| item.display_name())
        .collect();
    let counters: Vec<String> = CounterKind::all()
        .into_iter()
        .filter(|k| record.remembrance.counters.get(*k) > 0)
        .map(|k| format!("{} {}", k.as_str(), record.remembrance.counters.get(k)))
        .collect();

    if !done.is_empty() {
        println_colored!(DIM, "  Adhkar: {}", done.join(", "));
    }
    if !counters.is_empty() {
        println_colored!(DIM, "  Counters: {}", counters.join(", "));
    }
    if !done.is_empty() || !counters.is_empty() {
        println!();
    }
}

fn print_subtotals(breakdown: &DayBreakdown) {
    for (label, value) in breakdown.subtotals() {
        if value == 0.0 {
            println_colored!(DIM, "  {:<20}  0", label);
        } else {
            println!("  {:<20}  {}", label, format_points(value));
        }
    }
}

// ─── History ─────────────────────────────────────────────────────────────────

pub fn handle_history(config: &AppConfig, paths: &[PathBuf], json: bool) -> Result<()> {
    let records = load_records(paths)?;
    let scores = score_history(&records, &config.weights);
    let summary = summarize(&records, &scores, config.daily_target);

    if json {
        let doc = serde_json::json!({
            "target": config.daily_target,
            "days": scores,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!();
    if scores.is_empty() {
        println_colored!(DIM, "  No records found");
        println!();
        return Ok(());
    }

    let target = config.daily_target;
    let scale = summary
        .best
        .as_ref()
        .map(|b| b.score)
        .unwrap_or(0)
        .max(target) as u64;

    println_colored!(GOLD, "  History  (target {})", target);
    println!();
    for day in &scores {
        let bar = progress_bar(day.score.max(0) as u64, scale, 20);
        let line = format!(
            "  {:<34}  {:>6}  {}",
            date_heading(day.date, config),
            day.score,
            bar
        );
        if day.meets(target) {
            println_colored!(GREEN, "{}  ✓", line);
        } else {
            println!("{}", line);
        }
    }

    println!();
    println_colored!(
        BOLD,
        "  Days: {}  ·  Total: {}  ·  Average: {}",
        summary.days,
        summary.total,
        format_points(summary.average.round())
    );
    if let Some(best) = &summary.best {
        println!("  Best day:    {} ({})", best.date.format("%Y-%m-%d"), best.score);
    }
    println!(
        "  On target:   {}/{} days ({})",
        summary.days_meeting_target,
        summary.days,
        format_percent(summary.target_ratio())
    );
    println!(
        "  Streak:      {} days current  |  {} days best",
        summary.streak.current, summary.streak.best
    );

    if !summary.badges.is_empty() {
        println!();
        println_colored!(GOLD, "  Badges");
        for badge in &summary.badges {
            println!("  ★ {:<20} {}", badge.display_name(), badge.description());
        }
    }
    println!();
    Ok(())
}

// ─── Template ────────────────────────────────────────────────────────────────

pub fn handle_template(date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let record = DailyRecord::new(date);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(path: &Path, action: &ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let config = AppConfig::load(path)?;
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                bail!("{:?} already exists (use --force to overwrite)", path);
            }
            AppConfig::default().save(path)?;
            println_colored!(GREEN, "  ✓ Wrote default config to {}", path.display());
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}

pub fn handle_target(path: &Path, config: &mut AppConfig, points: i64) -> Result<()> {
    if points <= 0 {
        bail!("Target must be a positive number of points");
    }
    config.daily_target = points;
    config.save(path)?;
    println_colored!(GREEN, "  ✓ Daily target set to {}", points);
    Ok(())
}

// ─── Custom deeds ────────────────────────────────────────────────────────────

pub fn handle_deed(path: &Path, config: &mut AppConfig, action: &DeedCommands) -> Result<()> {
    match action {
        DeedCommands::List => {
            println!();
            if config.weights.custom_deeds.is_empty() {
                println_colored!(DIM, "  No custom deeds");
            } else {
                println_colored!(GOLD, "  Custom deeds");
                println!();
                for deed in &config.weights.custom_deeds {
                    println!(
                        "  {:<20}  {:<30}  {}",
                        deed.id,
                        deed.label,
                        format_points(deed.points)
                    );
                }
            }
            println!();
        }
        DeedCommands::Add { id, label, points } => {
            config
                .weights
                .add_custom_deed(CustomDeed {
                    id: id.clone(),
                    label: label.clone(),
                    points: *points,
                })
                .context("Adding custom deed")?;
            config.save(path)?;
            println_colored!(GREEN, "  ✓ Added {} ({} points)", id, format_points(*points));
        }
        DeedCommands::Remove { id } => {
            let removed = config
                .weights
                .remove_custom_deed(id)
                .context("Removing custom deed")?;
            config.save(path)?;
            println_colored!(AMBER, "  Removed {}", removed.label);
        }
    }
    Ok(())
}
