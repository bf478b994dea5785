mod aggregate;
mod progress;
mod render;
mod segments;

pub use aggregate::{LiveCounts, aggregate};
pub use progress::{BarLayout, PROGRESS_BAR_WIDTH, bar_layout, render_bar, render_time};
pub use render::{
    MergedTestCounts, RenderOptions, merge_test_counts, snapshot_segments, suite_segments,
    summarize, summarize_at, summarize_with_counts, test_segments,
};
pub use segments::{Segment, render_line};
#[cfg(test)]
pub(crate) use segments::visible_texts;

use crate::format::style::Style;
use crate::test_model::AggregatedResult;

/// Entry point used by reporters: one summary block for `result`.
pub fn get_summary(
    style: &dyn Style,
    result: &AggregatedResult,
    options: Option<&RenderOptions>,
) -> String {
    let defaults = RenderOptions::default();
    summarize(style, result, options.unwrap_or(&defaults))
}
