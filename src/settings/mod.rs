//! Saved generation defaults.

mod file;

use std::path::{Path, PathBuf};

use crate::entropy::SourceKind;
use crate::pass::ClassSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
    pub urandom: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    pub fn path() -> PathBuf {
        file::default_path()
    }

    /// Enabled classes. Lowercase is always on.
    pub fn classes(&self) -> ClassSet {
        ClassSet::from_flags(self.uppercase, self.digits, self.special)
    }

    pub fn source_kind(&self) -> SourceKind {
        SourceKind::from_urandom(self.urandom)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            uppercase: false,
            digits: false,
            special: false,
            urandom: false,
        }
    }
}
