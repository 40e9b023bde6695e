//! Password generation.

use log::debug;
use thiserror::Error;

use super::Password;
use super::charset::{self, ClassSet};
use crate::entropy::{IndexSource, SourceKind};

/// Why a password could not be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Please enter a valid positive number for the password length.")]
    InvalidLength,
    #[error("Please select at least one character type.")]
    EmptyCharacterPool,
}

impl GenerateError {
    /// Short heading for user-facing display.
    pub fn title(&self) -> &'static str {
        match self {
            GenerateError::InvalidLength => "Invalid Input",
            GenerateError::EmptyCharacterPool => "No Characters Selected",
        }
    }
}

/// Longest password a request accepts. Larger lengths are `InvalidLength`.
pub const MAX_LENGTH: usize = 1 << 20;

/// A validated length plus the classes to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    /// Fails with `InvalidLength` unless `0 < length <= MAX_LENGTH`.
    pub fn new(length: i64, classes: ClassSet) -> Result<Self, GenerateError> {
        match usize::try_from(length) {
            Ok(length) if (1..=MAX_LENGTH).contains(&length) => Ok(Self { length, classes }),
            _ => Err(GenerateError::InvalidLength),
        }
    }

    /// Build a request from raw text input, e.g. a typed length field.
    pub fn parse(input: &str, classes: ClassSet) -> Result<Self, GenerateError> {
        let length = parse_length(input)?;
        Ok(Self { length, classes })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }
}

/// Parse a length typed by the user. Missing, non-numeric, zero, negative and
/// oversized values are all `InvalidLength`.
pub fn parse_length(input: &str) -> Result<usize, GenerateError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| GenerateError::InvalidLength)?;
    GenerationRequest::new(value, ClassSet::lowercase()).map(|req| req.length)
}

/// Generate a password with lowercase plus the optional classes, using the
/// thread RNG.
pub fn generate(
    length: i64,
    uppercase: bool,
    digits: bool,
    special: bool,
) -> Result<Password, GenerateError> {
    let request = GenerationRequest::new(length, ClassSet::from_flags(uppercase, digits, special))?;
    generate_with(&request, &mut SourceKind::Thread.open())
}

/// Generate a password for `request`, drawing pool positions from `source`.
pub fn generate_with<S>(request: &GenerationRequest, source: &mut S) -> Result<Password, GenerateError>
where
    S: IndexSource + ?Sized,
{
    let chars = charset::build(&request.classes);
    if chars.is_empty() {
        return Err(GenerateError::EmptyCharacterPool);
    }

    debug!(
        "generating {} characters from a pool of {}",
        request.length,
        chars.len()
    );

    let pass: String = (0..request.length)
        .map(|_| chars[source.index(chars.len())] as char)
        .collect();
    Ok(Password::new(pass))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharacterClass;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

    /// Replays a fixed list of indices, wrapping around.
    struct Scripted {
        picks: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        fn new(picks: &[usize]) -> Self {
            Self {
                picks: picks.to_vec(),
                next: 0,
            }
        }
    }

    impl IndexSource for Scripted {
        fn index(&mut self, bound: usize) -> usize {
            let pick = self.picks[self.next % self.picks.len()];
            self.next += 1;
            pick % bound
        }
    }

    #[test]
    fn lowercase_only_eight() {
        let pass = generate(8, false, false, false).unwrap();
        assert_eq!(pass.len(), 8);
        assert!(pass.as_str().chars().all(|c| LOWER.contains(c)));
    }

    #[test]
    fn all_classes_twelve() {
        let pool = charset::build(&ClassSet::from_flags(true, true, true));
        let pass = generate(12, true, true, true).unwrap();
        assert_eq!(pass.len(), 12);
        assert!(pass.as_str().bytes().all(|b| pool.contains(&b)));
    }

    #[test]
    fn zero_and_negative_lengths_are_invalid() {
        assert_eq!(generate(0, false, false, false), Err(GenerateError::InvalidLength));
        assert_eq!(generate(-3, true, true, true), Err(GenerateError::InvalidLength));
        assert_eq!(generate(i64::MIN, false, false, false), Err(GenerateError::InvalidLength));
    }

    #[test]
    fn oversized_lengths_are_invalid() {
        let classes = ClassSet::lowercase();
        let max = MAX_LENGTH as i64;
        assert_eq!(GenerationRequest::new(max, classes).map(|r| r.length()), Ok(MAX_LENGTH));
        assert_eq!(GenerationRequest::new(max + 1, classes), Err(GenerateError::InvalidLength));
        assert_eq!(GenerationRequest::new(i64::MAX, classes), Err(GenerateError::InvalidLength));
        assert_eq!(generate(100_000_000_000, false, false, false), Err(GenerateError::InvalidLength));
        assert_eq!(parse_length("9223372036854775807"), Err(GenerateError::InvalidLength));
        assert_eq!(parse_length("99999999999999999999"), Err(GenerateError::InvalidLength));
    }

    #[test]
    fn text_lengths() {
        assert_eq!(parse_length("16"), Ok(16));
        assert_eq!(parse_length("  9\n"), Ok(9));
        assert_eq!(parse_length(""), Err(GenerateError::InvalidLength));
        assert_eq!(parse_length("twelve"), Err(GenerateError::InvalidLength));
        assert_eq!(parse_length("4.5"), Err(GenerateError::InvalidLength));
        assert_eq!(parse_length("0"), Err(GenerateError::InvalidLength));
        assert_eq!(parse_length("-1"), Err(GenerateError::InvalidLength));
    }

    #[test]
    fn empty_pool_is_rejected() {
        let classes = ClassSet::lowercase().without(CharacterClass::Lowercase);
        let request = GenerationRequest::new(10, classes).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_with(&request, &mut rng),
            Err(GenerateError::EmptyCharacterPool)
        );
    }

    #[test]
    fn length_is_checked_before_pool() {
        let classes = ClassSet::EMPTY;
        assert_eq!(
            GenerationRequest::new(0, classes),
            Err(GenerateError::InvalidLength)
        );
        assert_eq!(
            GenerationRequest::parse("abc", classes),
            Err(GenerateError::InvalidLength)
        );
    }

    #[test]
    fn scripted_source_is_deterministic() {
        let request = GenerationRequest::new(6, ClassSet::lowercase()).unwrap();
        let mut source = Scripted::new(&[0, 1, 2, 25, 26, 27]);
        let pass = generate_with(&request, &mut source).unwrap();
        assert_eq!(pass.as_str(), "abczab");
    }

    #[test]
    fn scripted_source_follows_pool_order() {
        // a-z, then 0-9, then punctuation
        let request =
            GenerationRequest::new(3, ClassSet::from_flags(false, true, true)).unwrap();
        let mut source = Scripted::new(&[25, 26, 36]);
        let pass = generate_with(&request, &mut source).unwrap();
        assert_eq!(pass.as_str(), "z0!");
    }

    #[test]
    fn seeded_rng_repeats() {
        let request = GenerationRequest::new(24, ClassSet::from_flags(true, true, true)).unwrap();
        let a = generate_with(&request, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with(&request, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_length_matches() {
        let mut rng = StdRng::seed_from_u64(3);
        for len in 1..=64 {
            let request = GenerationRequest::new(len, ClassSet::from_flags(true, false, true)).unwrap();
            let pass = generate_with(&request, &mut rng).unwrap();
            assert_eq!(pass.len() as i64, len);
            assert!(pass.as_str().chars().all(|c| !c.is_ascii_digit()));
        }
    }

    #[test]
    fn class_frequencies_track_class_sizes() {
        let request = GenerationRequest::new(20_000, ClassSet::from_flags(true, true, true)).unwrap();
        let pass = generate_with(&request, &mut StdRng::seed_from_u64(2024)).unwrap();

        let mut counts = [0usize; 4];
        for c in pass.as_str().chars() {
            let class = CharacterClass::of(c).expect("character outside every class");
            counts[class as usize] += 1;
        }

        let total = pass.len() as f64;
        for class in CharacterClass::ALL {
            let expected = class.chars().len() as f64 / 94.0;
            let observed = counts[class as usize] as f64 / total;
            assert!(
                (observed - expected).abs() < expected * 0.15,
                "{class:?}: expected {expected:.3}, observed {observed:.3}"
            );
        }
    }
}
