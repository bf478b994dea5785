use std::time::{SystemTime, UNIX_EPOCH};

/// Formats `seconds` rounded (half away from zero) to `decimal_places`, suffixed with `s`.
pub fn format_time(seconds: f64, decimal_places: usize) -> String {
    let scale = 10f64.powi(decimal_places.min(9) as i32);
    let rounded = (seconds * scale).round() / scale;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.decimal_places$}s")
}

pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub fn elapsed_seconds(start_time_ms: u64, now_ms: u64, round_time: bool) -> f64 {
    let elapsed = (now_ms as f64 - start_time_ms as f64) / 1000.0;
    if round_time { elapsed.floor() } else { elapsed }
}
