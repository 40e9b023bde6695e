use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::terminal::{RawModeGuard, flush, read_key};

/// Line editing state: text plus a 0-based cursor.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct LineEdit {
    pub text: String,
    pub cursor: usize,
}

/// Result of feeding one key to a [`LineEdit`].
#[derive(Debug, PartialEq, Eq)]
pub(super) enum EditStep {
    Editing,
    Done,
    Cancelled,
}

impl LineEdit {
    pub fn new(initial: &str) -> Self {
        Self {
            text: initial.to_string(),
            cursor: initial.chars().count(),
        }
    }

    fn byte_pos(&self, cursor: usize) -> usize {
        self.text
            .char_indices()
            .nth(cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn apply(&mut self, key: KeyEvent) -> EditStep {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => return EditStep::Cancelled,
            KeyCode::Esc => return EditStep::Cancelled,
            KeyCode::Enter => return EditStep::Done,
            KeyCode::Char('u') if ctrl => {
                self.text.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_pos(self.cursor);
                    self.text.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.len() {
                    let at = self.byte_pos(self.cursor);
                    self.text.remove(at);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            KeyCode::Char(c) if !ctrl => {
                let at = self.byte_pos(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
            }
            _ => {}
        }
        EditStep::Editing
    }
}

/// Edit a line in place. Returns `None` on Esc / Ctrl+Q / Ctrl+C.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut line = LineEdit::new(initial_value);
    let mut drawn_len = line.len();

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(line.text),
    };

    print!("{}: {}", prompt, line.text);
    flush();

    let step = loop {
        let key = match read_key() {
            Ok(key) => key,
            Err(_) => break EditStep::Cancelled,
        };

        match line.apply(key) {
            EditStep::Editing => {}
            done => break done,
        }

        // Redraw the input line
        print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
        print!("\r{}: {}", prompt, line.text);
        drawn_len = line.len();

        // Move cursor to correct position (1-based column)
        print!("\x1b[{}G", prompt.chars().count() + 3 + line.cursor);
        flush();
    };

    guard.release();
    println!();
    match step {
        EditStep::Done => Some(line.text),
        _ => None,
    }
}
