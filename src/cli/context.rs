//! CLI context - bundles settings, flags and the generation session.

use std::io::Write;

use log::{debug, info};
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::clipboard;
use crate::error::{Error, Result};
use crate::pass::{self, ClassSet, GenerationRequest, Password};
use crate::session::Session;
use crate::settings::Settings;
use crate::tui::print_help;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Layer parsed flags over the saved settings.
    pub fn new(flags: CliFlags) -> Self {
        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        });
        Self::with_settings(flags, settings)
    }

    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        Self { settings, flags }
    }

    /// Run the CLI. Returns once passwords have been printed or copied.
    pub fn run(&mut self) -> Result<()> {
        if self.handle_info_flags() {
            return Ok(());
        }
        let request = self.apply_flags()?;
        if self.flags.save {
            self.save_settings()?;
        }
        self.generate_output(&request)
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Apply CLI flags to settings and build the request.
    fn apply_flags(&mut self) -> Result<GenerationRequest> {
        if let Some(ref raw) = self.flags.length {
            self.settings.pass_length = pass::parse_length(raw)?;
        }

        if self.flags.has_class_flags() {
            self.settings.uppercase = self.flags.uppercase;
            self.settings.digits = self.flags.digits;
            self.settings.special = self.flags.special;
        }

        if self.flags.urandom {
            self.settings.urandom = true;
        }

        let length = i64::try_from(self.settings.pass_length)
            .map_err(|_| pass::GenerateError::InvalidLength)?;
        Ok(GenerationRequest::new(length, self.settings.classes())?)
    }

    fn save_settings(&self) -> Result<()> {
        self.settings.save_to_file()?;
        prompts::settings_saved(&Settings::path().display().to_string());
        Ok(())
    }

    /// Generate passwords and print or copy them.
    pub fn generate_output(&self, request: &GenerationRequest) -> Result<()> {
        let count = self.flags.number.unwrap_or(1);
        let classes: ClassSet = request.classes();
        let bits = pass::entropy_bits(request.length(), pass::charset::size(&classes));
        info!(
            "{count} password(s), {:.1} bits each ({}), source: {}",
            bits,
            pass::strength(bits),
            self.settings.source_kind().name()
        );

        let mut session = Session::new(self.settings.source_kind());

        if self.flags.clipboard {
            match clipboard::open() {
                Ok(mut board) => return copy_batch(&mut session, request, count, &mut board),
                Err(e) => {
                    debug!("clipboard unavailable: {e}");
                    if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                        return Err(e);
                    }
                }
            }
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for _ in 0..count {
            let pass = session.generate(request)?;
            writeln!(out, "{}", pass.as_str())?;
        }
        session.clear();
        out.flush()?;
        Ok(())
    }
}

fn copy_batch(
    session: &mut Session,
    request: &GenerationRequest,
    count: usize,
    board: &mut dyn copypasta::ClipboardProvider,
) -> Result<()> {
    if count == 1 {
        session.generate(request)?;
        clipboard::export(&*session, board)?;
    } else {
        let mut joined = String::new();
        for _ in 0..count {
            let pass: &Password = session.generate(request)?;
            joined.push_str(pass.as_str());
            joined.push('\n');
        }
        let copied = clipboard::copy(board, &joined);
        joined.zeroize();
        copied?;
    }
    session.clear();
    prompts::clipboard_copied(count);
    Ok(())
}
