use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Magenta,
    White,
}

/// Applies terminal styling to substrings.
pub trait Style {
    fn bold(&self, text: &str) -> String;

    fn color(&self, color: Color, text: &str) -> String;

    fn bold_color(&self, color: Color, text: &str) -> String {
        self.bold(&self.color(color, text))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl Style for AnsiStyle {
    fn bold(&self, text: &str) -> String {
        format!("\u{1b}[1m{text}\u{1b}[22m")
    }

    fn color(&self, color: Color, text: &str) -> String {
        let code = match color {
            Color::Red => 31,
            Color::Yellow => 33,
            Color::Green => 32,
            Color::Magenta => 35,
            Color::White => 37,
        };
        format!("\u{1b}[{code}m{text}\u{1b}[39m")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl Style for PlainStyle {
    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn color(&self, _color: Color, text: &str) -> String {
        text.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        Some(match raw.trim().to_ascii_lowercase().as_str() {
            "auto" => ColorChoice::Auto,
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => return None,
        })
    }
}

pub fn style_for(choice: ColorChoice) -> Box<dyn Style> {
    let colored = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => use_color(),
    };
    if colored {
        Box::new(AnsiStyle)
    } else {
        Box::new(PlainStyle)
    }
}

pub fn detect_style() -> Box<dyn Style> {
    style_for(ColorChoice::Auto)
}

pub fn use_color() -> bool {
    let env = ColorEnv {
        no_color: std::env::var("NO_COLOR").ok(),
        clicolor: std::env::var("CLICOLOR").ok(),
        term: std::env::var("TERM").ok(),
        force_color: std::env::var("FORCE_COLOR").ok(),
    };
    use_color_with(&env, crate::format::terminal::is_output_terminal())
}

#[derive(Debug, Clone, Default)]
pub struct ColorEnv {
    pub no_color: Option<String>,
    pub clicolor: Option<String>,
    pub term: Option<String>,
    pub force_color: Option<String>,
}

pub fn use_color_with(env: &ColorEnv, output_is_terminal: bool) -> bool {
    let no_color = env
        .no_color
        .as_deref()
        .is_some_and(|value| !value.trim().is_empty());
    if no_color {
        return false;
    }

    let clicolor_disabled = env
        .clicolor
        .as_deref()
        .is_some_and(|value| value.trim() == "0");
    if clicolor_disabled {
        return false;
    }

    let is_dumb_term = env
        .term
        .as_deref()
        .is_some_and(|value| value.trim() == "dumb");

    let force_color = match env.force_color.as_deref().map(str::trim) {
        None | Some("") => None,
        Some("0") => Some(false),
        Some(_) => Some(true),
    };

    if is_dumb_term && force_color != Some(true) {
        return false;
    }

    force_color.unwrap_or(output_is_terminal)
}
