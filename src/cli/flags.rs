#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub clipboard: bool,
    pub urandom: bool,
    pub save: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
    /// Raw length text; validated by the generator.
    pub length: Option<String>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// True if any character class flag was given. When none are, the saved
    /// class selection applies.
    pub fn has_class_flags(&self) -> bool {
        self.uppercase || self.digits || self.special
    }
}
