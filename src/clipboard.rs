//! Clipboard export of generated passwords.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use crate::entropy::IndexSource;
use crate::error::{Error, Result};
use crate::session::Session;

/// Open the system clipboard.
pub fn open() -> Result<ClipboardContext> {
    ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))
}

/// Copy the session's last password to the clipboard.
pub fn export<S: IndexSource>(
    session: &Session<S>,
    provider: &mut dyn ClipboardProvider,
) -> Result<()> {
    let pass = session.last().ok_or(Error::NoPassword)?;
    copy(provider, pass.as_str())
}

/// Hand `text` to the clipboard.
pub fn copy(provider: &mut dyn ClipboardProvider, text: &str) -> Result<()> {
    provider
        .set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    // Backend hands back a copy; wipe it
    if let Ok(mut retrieved) = provider.get_contents() {
        retrieved.zeroize();
    }
    debug!("copied {} characters to clipboard", text.len());
    Ok(())
}
