use std::io::IsTerminal;

use terminal_size::{Width, terminal_size_of};

pub fn is_output_terminal() -> bool {
    std::io::stdout().is_terminal() || std::io::stderr().is_terminal()
}

pub fn detect_terminal_columns() -> Option<usize> {
    let stdout = std::io::stdout();
    if stdout.is_terminal() {
        return terminal_size_of(stdout).map(|(Width(w), _)| usize::from(w));
    }

    let stderr = std::io::stderr();
    stderr
        .is_terminal()
        .then(|| terminal_size_of(stderr).map(|(Width(w), _)| usize::from(w)))
        .flatten()
}

/// Terminal width, then `COLUMNS`, then zero (no progress bar).
pub fn terminal_columns_or_zero() -> usize {
    detect_terminal_columns()
        .or_else(|| {
            std::env::var("COLUMNS")
                .ok()
                .and_then(|s| s.trim().parse::<usize>().ok())
        })
        .unwrap_or(0)
}
