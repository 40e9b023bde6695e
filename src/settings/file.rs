//! Settings file persistence.
//!
//! One line: `length,uppercase,digits,special,urandom`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;

const FIELDS: usize = 5;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{}\n",
        settings.pass_length,
        settings.uppercase,
        settings.digits,
        settings.special,
        settings.urandom,
    );

    file.write_all(data.as_bytes())?;
    debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        debug!("no settings at {}, writing defaults", path.display());
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        warn!(
            "settings file {} is malformed, resetting to defaults",
            path.display()
        );
        *settings = Settings::default();
        return save(settings, path);
    }

    settings.pass_length = parts[0]
        .parse()
        .ok()
        .filter(|&len| len > 0)
        .unwrap_or(settings.pass_length);
    settings.uppercase = parts[1].parse().unwrap_or(settings.uppercase);
    settings.digits = parts[2].parse().unwrap_or(settings.digits);
    settings.special = parts[3].parse().unwrap_or(settings.special);
    settings.urandom = parts[4].parse().unwrap_or(settings.urandom);

    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let settings = Settings {
            pass_length: 31,
            uppercase: true,
            digits: false,
            special: true,
            urandom: true,
        };
        save(&settings, &path).unwrap();

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, Settings::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "12,false,false,false,false\n"
        );
    }

    #[test]
    fn malformed_file_resets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "74,19,false,true\n").unwrap();

        let mut loaded = Settings {
            pass_length: 99,
            ..Default::default()
        };
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, Settings::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "12,false,false,false,false\n"
        );
    }

    #[test]
    fn bad_fields_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "0,yes,true,false,maybe\n").unwrap();

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded.pass_length, 12);
        assert!(!loaded.uppercase);
        assert!(loaded.digits);
        assert!(!loaded.special);
        assert!(!loaded.urandom);
    }
}
