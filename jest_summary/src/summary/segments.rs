use crate::format::style::{Color, Style};

/// One conditionally shown piece of a summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub shown: bool,
    pub text: String,
    pub color: Color,
}

impl Segment {
    pub fn counted(count: i64, label: &str, color: Color) -> Self {
        Self {
            shown: count > 0,
            text: format!("{count} {label}"),
            color,
        }
    }

    pub fn when(shown: bool, text: String, color: Color) -> Self {
        Self { shown, text, color }
    }
}

#[cfg(test)]
pub(crate) fn visible_texts(segments: &[Segment]) -> Vec<&str> {
    segments
        .iter()
        .filter(|segment| segment.shown)
        .map(|segment| segment.text.as_str())
        .collect()
}

/// Bold label, then every shown segment followed by `", "`, then the tail.
pub fn render_line(style: &dyn Style, label: &str, segments: &[Segment], tail: &str) -> String {
    let mut out = style.bold(label);
    for segment in segments.iter().filter(|segment| segment.shown) {
        out.push_str(&style.bold_color(segment.color, &segment.text));
        out.push_str(", ");
    }
    out.push_str(tail);
    out
}
