//! Last-generated-password state shared by the host UIs and the clipboard.

use log::debug;

use crate::entropy::{IndexSource, Source, SourceKind};
use crate::pass::{GenerateError, GenerationRequest, Password, generate_with};

/// Holds the random source and the most recent successful password.
pub struct Session<S: IndexSource = Source> {
    source: S,
    last: Option<Password>,
}

impl Session<Source> {
    pub fn new(kind: SourceKind) -> Self {
        Self::with_source(kind.open())
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    pub fn set_source_kind(&mut self, kind: SourceKind) {
        if kind != self.source.kind() {
            debug!("switching random source to {}", kind.name());
            self.source = kind.open();
        }
    }
}

impl Default for Session<Source> {
    fn default() -> Self {
        Self::new(SourceKind::default())
    }
}

impl<S: IndexSource> Session<S> {
    pub fn with_source(source: S) -> Self {
        Self { source, last: None }
    }

    /// Generate a password and remember it. A failed request leaves the
    /// previous password in place.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<&Password, GenerateError> {
        let pass = generate_with(request, &mut self.source)?;
        Ok(&*self.last.insert(pass))
    }

    /// The last generated password, or `None` if nothing was generated yet.
    pub fn last(&self) -> Option<&Password> {
        self.last.as_ref()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
