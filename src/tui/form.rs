//! Interactive password form.

use std::path::PathBuf;

use copypasta::ClipboardContext;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, warn};

use crate::clipboard;
use crate::error::{Error, Result};
use crate::pass::{CharacterClass, GenerationRequest};
use crate::session::Session;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, read_key, reset_terminal};

use super::text::{FormView, print_form, print_help, print_notice};
use super::get_editable_input;

/// Message shown under the form until the next action.
#[derive(Debug)]
pub enum Notice {
    Error(Error),
    Info {
        title: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EditLength,
    Toggle(CharacterClass),
    ToggleSource,
    Generate,
    Copy,
    Save,
    Help,
    Quit,
    Ignore,
}

/// Map a key press to a form action.
pub fn action_for(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => Action::Quit,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('1') | KeyCode::Char('l') => Action::EditLength,
        KeyCode::Char('2') => Action::Toggle(CharacterClass::Uppercase),
        KeyCode::Char('3') => Action::Toggle(CharacterClass::Digit),
        KeyCode::Char('4') => Action::Toggle(CharacterClass::Special),
        KeyCode::Char('5') => Action::ToggleSource,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('s') => Action::Save,
        KeyCode::Char('h') | KeyCode::Char('?') => Action::Help,
        _ => Action::Ignore,
    }
}

/// Form state. Widgets hold plain values; generation reads them explicitly.
pub struct Form {
    settings: Settings,
    settings_path: PathBuf,
    length_input: String,
    session: Session,
    board: Option<ClipboardContext>,
    notice: Option<Notice>,
    show_help: bool,
}

impl Form {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            length_input: settings.pass_length.to_string(),
            session: Session::new(settings.source_kind()),
            settings,
            settings_path,
            board: None,
            notice: None,
            show_help: false,
        }
    }

    /// Apply one action. Returns false when the form should close.
    pub fn handle(&mut self, action: Action) -> bool {
        self.notice = None;
        self.show_help = false;

        match action {
            Action::Quit => return false,
            Action::EditLength => {
                if let Some(input) = get_editable_input("Password Length", &self.length_input) {
                    self.length_input = input.trim().to_string();
                }
            }
            Action::Toggle(class) => self.toggle(class),
            Action::ToggleSource => {
                self.settings.urandom = !self.settings.urandom;
                self.session.set_source_kind(self.settings.source_kind());
            }
            Action::Generate => {
                if let Err(e) = self.generate() {
                    self.notice = Some(Notice::Error(e));
                }
            }
            Action::Copy => match self.copy() {
                Ok(()) => {
                    self.notice = Some(Notice::Info {
                        title: "Copied",
                        message: "Password copied to clipboard".to_string(),
                    })
                }
                Err(e) => self.notice = Some(Notice::Error(e)),
            },
            Action::Save => match self.save() {
                Ok(()) => {
                    self.notice = Some(Notice::Info {
                        title: "Saved",
                        message: format!("Settings saved to {}", self.settings_path.display()),
                    })
                }
                Err(e) => self.notice = Some(Notice::Error(e)),
            },
            Action::Help => self.show_help = true,
            Action::Ignore => {}
        }
        true
    }

    fn toggle(&mut self, class: CharacterClass) {
        let mut classes = self.settings.classes();
        classes.toggle(class);
        self.settings.uppercase = classes.contains(CharacterClass::Uppercase);
        self.settings.digits = classes.contains(CharacterClass::Digit);
        self.settings.special = classes.contains(CharacterClass::Special);
    }

    fn request(&self) -> Result<GenerationRequest> {
        Ok(GenerationRequest::parse(
            &self.length_input,
            self.settings.classes(),
        )?)
    }

    fn generate(&mut self) -> Result<()> {
        let request = self.request()?;
        self.session.generate(&request)?;
        Ok(())
    }

    fn copy(&mut self) -> Result<()> {
        if self.session.last().is_none() {
            return Err(Error::NoPassword);
        }
        // Kept open for the whole session: X11 drops the selection with its owner
        if self.board.is_none() {
            self.board = Some(clipboard::open()?);
        }
        match self.board.as_mut() {
            Some(board) => clipboard::export(&self.session, board),
            None => Err(Error::Clipboard("clipboard not open".to_string())),
        }
    }

    fn save(&mut self) -> Result<()> {
        self.settings.pass_length = self.request()?.length();
        self.settings.save_to(&self.settings_path)?;
        Ok(())
    }

    fn view(&self) -> FormView<'_> {
        FormView {
            length_input: &self.length_input,
            settings: &self.settings,
            source: self.session.source_kind(),
            last: self.session.last(),
        }
    }

    fn render(&self) {
        clear();
        print_form(&self.view());
        println!();
        if let Some(notice) = &self.notice {
            print_notice(notice);
        }
        if self.show_help {
            print_help();
        }
    }
}

/// Run the form until the user quits.
pub fn run() {
    reset_terminal();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("failed to load settings: {e}");
        Settings::default()
    });
    let mut form = Form::new(settings, Settings::path());

    loop {
        form.render();

        let key = {
            let _guard = match RawModeGuard::new() {
                Ok(g) => g,
                Err(e) => {
                    warn!("cannot enter raw mode: {e}");
                    break;
                }
            };
            read_key()
        };

        let action = match key {
            Ok(key) => action_for(key),
            Err(e) => {
                debug!("key read failed: {e}");
                Action::Quit
            }
        };

        if !form.handle(action) {
            break;
        }
    }

    form.session.clear();
    clear();
    reset_terminal();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SourceKind;
    use crate::pass::GenerateError;

    fn form() -> (Form, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        (Form::new(Settings::default(), path), dir)
    }

    fn press(code: KeyCode) -> Action {
        action_for(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn key_bindings() {
        assert_eq!(press(KeyCode::Enter), Action::Generate);
        assert_eq!(press(KeyCode::Char('2')), Action::Toggle(CharacterClass::Uppercase));
        assert_eq!(press(KeyCode::Char('3')), Action::Toggle(CharacterClass::Digit));
        assert_eq!(press(KeyCode::Char('4')), Action::Toggle(CharacterClass::Special));
        assert_eq!(press(KeyCode::Char('c')), Action::Copy);
        assert_eq!(press(KeyCode::Esc), Action::Quit);
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(press(KeyCode::Char('z')), Action::Ignore);
    }

    #[test]
    fn generate_uses_form_values() {
        let (mut form, _dir) = form();
        form.length_input = "10".to_string();
        assert!(form.handle(Action::Toggle(CharacterClass::Digit)));
        assert!(form.handle(Action::Generate));

        assert!(form.notice.is_none());
        let pass = form.session.last().unwrap();
        assert_eq!(pass.len(), 10);
        assert!(
            pass.as_str()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn invalid_length_shows_error() {
        let (mut form, _dir) = form();
        for input in ["", "0", "-2", "abc"] {
            form.length_input = input.to_string();
            form.handle(Action::Generate);
            assert!(
                matches!(
                    form.notice,
                    Some(Notice::Error(Error::Generate(GenerateError::InvalidLength)))
                ),
                "{input:?}"
            );
            assert!(form.session.last().is_none());
        }
    }

    #[test]
    fn copy_before_generate() {
        let (mut form, _dir) = form();
        form.handle(Action::Copy);
        assert!(matches!(form.notice, Some(Notice::Error(Error::NoPassword))));
        assert!(form.board.is_none());
    }

    #[test]
    fn toggles_flip_settings() {
        let (mut form, _dir) = form();
        form.handle(Action::Toggle(CharacterClass::Special));
        assert!(form.settings.special);
        form.handle(Action::Toggle(CharacterClass::Special));
        assert!(!form.settings.special);

        form.handle(Action::ToggleSource);
        assert!(form.settings.urandom);
        assert_eq!(form.session.source_kind(), SourceKind::Os);
    }

    #[test]
    fn save_writes_settings() {
        let (mut form, _dir) = form();
        form.length_input = "18".to_string();
        form.handle(Action::Toggle(CharacterClass::Uppercase));
        form.handle(Action::Save);
        assert!(matches!(form.notice, Some(Notice::Info { title: "Saved", .. })));

        let saved = Settings::load_from(&form.settings_path).unwrap();
        assert_eq!(saved.pass_length, 18);
        assert!(saved.uppercase);
    }

    #[test]
    fn save_rejects_bad_length() {
        let (mut form, _dir) = form();
        form.length_input = "none".to_string();
        form.handle(Action::Save);
        assert!(matches!(form.notice, Some(Notice::Error(_))));
        assert!(!form.settings_path.exists());
    }

    #[test]
    fn quit_stops_the_loop() {
        let (mut form, _dir) = form();
        assert!(!form.handle(Action::Quit));
    }
}
