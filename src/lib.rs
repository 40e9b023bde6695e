//! Random password generation from lowercase, uppercase, digit and
//! punctuation classes.
//!
//! The [`pass`] module is the toolkit-independent core: it takes a length
//! and the enabled classes and returns a [`pass::Password`] or a
//! [`pass::GenerateError`]. The CLI and the interactive form are thin
//! layers that read user input and call into it.

pub mod cli;
pub mod clipboard;
pub mod entropy;
pub mod error;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod session;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
