use crate::entropy::SourceKind;
use crate::pass::{self, CharacterClass, GenerationRequest, Password};
use crate::settings::Settings;
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt,
    box_top, flush, message_box, print_rule,
};

use super::form::Notice;

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// Everything the form screen shows.
pub struct FormView<'a> {
    pub length_input: &'a str,
    pub settings: &'a Settings,
    pub source: SourceKind,
    pub last: Option<&'a Password>,
}

pub fn print_form(view: &FormView<'_>) {
    let classes = view.settings.classes();

    box_top("Password Generator");
    box_line_center("Esc/q: quit | h: help");
    box_line("");

    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    box_line(&format!("  1) Password Length: {}", view.length_input));
    for (key, class) in [
        (2, CharacterClass::Uppercase),
        (3, CharacterClass::Digit),
        (4, CharacterClass::Special),
    ] {
        box_line(&format!(
            "  {key}) {} Include {}",
            checkbox(classes.contains(class)),
            class.label()
        ));
    }
    box_line(&format!("  5) Source: {}", view.source.name()));

    box_line("");
    match GenerationRequest::parse(view.length_input, classes) {
        Ok(request) => {
            let bits = pass::entropy_bits(request.length(), pass::charset::size(&classes));
            box_line(&format!(
                "{DIM}Entropy: {:.1} bits ({}) • Pool: {} chars{RESET}",
                bits,
                pass::strength(bits),
                pass::charset::size(&classes)
            ));
        }
        Err(_) => box_line(&format!("{DIM}Entropy: -{RESET}")),
    }

    box_line("");
    match view.last {
        Some(pass) => box_line(&format!("Generated Password: {BOLD}{}{RESET}", pass.as_str())),
        None => box_line(""),
    }

    box_line("");
    print_rule();
    box_line("   Enter) generate  |  c) copy to clipboard  |  s) save settings");
    box_bottom();
}

/// Dialog-style notice under the form.
pub fn print_notice(notice: &Notice) {
    match notice {
        Notice::Error(err) => message_box(err.title(), &err.to_string(), RED),
        Notice::Info { title, message } => message_box(title, message, GREEN),
    }
    flush();
}

pub fn print_help() {
    box_top("passgen");
    box_line_center("Random password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a form to set the");
    box_line("     length and character classes, generate, and copy.");
    box_line("  2) Client: Pass flags (e.g., -l 20 -a) to print passwords");
    box_line("     without the form.");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (lowercase is always included)");
    box_opt("  -U, --upper", "Include uppercase letters");
    box_opt("  -d, --digits", "Include digits");
    box_opt("  -s, --special", "Include punctuation characters");
    box_opt("  -a, --all", "Include all of the above");
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_opt("  -v, --verbose", "Debug logging to stderr (RUST_LOG also works)");
    box_line("");
    box_line(" Settings:");
    box_opt("      --save", "Save length, classes and source as defaults");
    box_opt("  -u, --urandom", "Draw every character from the OS random generator");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -V, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgen                  Interactive form");
    box_line("  passgen -l 16            One password, 16 lowercase characters");
    box_line("  passgen -l 20 -a -n 3    Three passwords from all classes");
    box_line("  passgen -l 24 -U -d -b   Copy one password to the clipboard");
    box_line("  passgen -l 20 -a --save  Make -l 20 -a the default");
    box_line("");
    box_bottom();
    println!();
}
