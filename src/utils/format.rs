/// Format points as a whole number when possible, else with one decimal
pub fn format_points(points: f64) -> String {
    if points == points.floor() {
        format!("{}", points as i64)
    } else {
        format!("{:.1}", points)
    }
}

/// Format a ratio as a whole percentage, e.g. 0.456 -> "46%"
pub fn format_percent(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u64, total: u64, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}
