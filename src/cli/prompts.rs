//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress warnings, confirmations and prompts.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Skip prompts when quiet or when stdin is not a tty.
fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if quiet() {
        return;
    }
    if count == 1 {
        eprintln!("{GREEN}Password copied to clipboard{RESET}");
    } else {
        eprintln!("{GREEN}{count} passwords copied to clipboard{RESET}");
    }
}

/// Prompt user when clipboard is unavailable. Returns true to fall back to
/// the terminal, false to abort. Falls back silently when non-interactive.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("{YELLOW}{reason}{RESET}\nPrint to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print settings saved confirmation - suppressed in quiet mode
pub fn settings_saved(path: &str) {
    if !quiet() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}
