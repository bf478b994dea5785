use std::io::IsTerminal;

use jest_summary::format::terminal::is_output_terminal;

fn should_print_terminal_debug() -> bool {
    std::env::var("JEST_SUMMARY_DEBUG_TERMINAL")
        .ok()
        .is_some_and(|value| !value.trim().is_empty() && value.trim() != "0")
}

fn print_terminal_debug() {
    eprintln!(
        "jest-summary: stdout_tty={} stderr_tty={} output_tty={} use_color={} term={:?} no_color={:?} force_color={:?} clicolor={:?} columns={:?} detected_columns={:?}",
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
        is_output_terminal(),
        jest_summary::format::style::use_color(),
        std::env::var("TERM").ok(),
        std::env::var("NO_COLOR").ok(),
        std::env::var("FORCE_COLOR").ok(),
        std::env::var("CLICOLOR").ok(),
        std::env::var("COLUMNS").ok(),
        jest_summary::format::terminal::detect_terminal_columns(),
    );
}

fn main() {
    if should_print_terminal_debug() {
        print_terminal_debug();
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let code = jest_summary::run::run_cli(
        std::env::args_os(),
        &cwd,
        std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    std::process::exit(code);
}
