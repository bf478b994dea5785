use crate::format::style::{Color, Style};
use crate::format::time::format_time;

pub const PROGRESS_BAR_WIDTH: usize = 40;
const BLOCK: &str = "█";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    pub filled: usize,
    pub empty: usize,
}

/// Filled/empty split for the bar, or `None` when the run is too short,
/// already past its estimate, or there is no room.
pub fn bar_layout(elapsed: f64, estimated: f64, width: usize) -> Option<BarLayout> {
    if !(estimated > 2.0 && elapsed < estimated && width > 0) {
        return None;
    }
    let available = PROGRESS_BAR_WIDTH.min(width);
    if available < 2 {
        return None;
    }
    let ratio_len = ((elapsed / estimated) * available as f64).floor();
    let filled = ratio_len.clamp(0.0, available as f64) as usize;
    Some(BarLayout {
        filled,
        empty: available - filled,
    })
}

pub fn render_time(style: &dyn Style, elapsed: f64, estimated: f64, width: usize) -> String {
    let formatted = format_time(elapsed, 0);
    // More than a second over the estimate.
    let rendered_elapsed = if estimated > 0.0 && elapsed >= estimated + 1.0 {
        style.bold_color(Color::Yellow, &formatted)
    } else {
        formatted
    };

    let mut time = format!("{}        {rendered_elapsed}", style.bold("Time:"));
    if elapsed < estimated {
        time.push_str(", estimated ");
        time.push_str(&format_time(estimated, 0));
    }

    if let Some(layout) = bar_layout(elapsed, estimated, width) {
        time.push('\n');
        time.push_str(&render_bar(style, layout));
    }
    time
}

pub fn render_bar(style: &dyn Style, layout: BarLayout) -> String {
    let filled = (0..layout.filled)
        .map(|_| style.color(Color::Green, BLOCK))
        .collect::<String>();
    let empty = (0..layout.empty)
        .map(|_| style.color(Color::White, BLOCK))
        .collect::<String>();
    format!("{filled}{empty}")
}
