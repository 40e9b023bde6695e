//! Character classes and pool construction for password generation.

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A named, fixed set of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// Pool order. Pools are always concatenated in this order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase Letters",
            CharacterClass::Uppercase => "Uppercase Letters",
            CharacterClass::Digit => "Digits",
            CharacterClass::Special => "Special Characters",
        }
    }

    /// Class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| c.is_ascii() && class.chars().contains(&(c as u8)))
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of enabled character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const EMPTY: ClassSet = ClassSet(0);

    /// Lowercase only, the baseline every request starts from.
    pub fn lowercase() -> Self {
        Self::EMPTY.with(CharacterClass::Lowercase)
    }

    /// Lowercase plus whichever optional classes are switched on.
    pub fn from_flags(uppercase: bool, digits: bool, special: bool) -> Self {
        let mut set = Self::lowercase();
        set.set(CharacterClass::Uppercase, uppercase);
        set.set(CharacterClass::Digit, digits);
        set.set(CharacterClass::Special, special);
        set
    }

    #[must_use]
    pub fn with(self, class: CharacterClass) -> Self {
        ClassSet(self.0 | class.bit())
    }

    #[must_use]
    pub fn without(self, class: CharacterClass) -> Self {
        ClassSet(self.0 & !class.bit())
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        *self = if enabled {
            self.with(class)
        } else {
            self.without(class)
        };
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        let enabled = !self.contains(class);
        self.set(class, enabled);
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in pool order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

/// Build the character pool for the enabled classes.
pub fn build(classes: &ClassSet) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend_from_slice(class.chars());
    }
    chars
}

/// Pool size for the enabled classes (for entropy calculation).
pub fn size(classes: &ClassSet) -> usize {
    classes.iter().map(|class| class.chars().len()).sum()
}
