use passgen::pass::{
    self, CharacterClass, ClassSet, GenerateError, GenerationRequest, generate, generate_with,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

fn pool(upper: bool, digits: bool, special: bool) -> Vec<u8> {
    pass::charset::build(&ClassSet::from_flags(upper, digits, special))
}

#[test]
fn eight_lowercase() {
    let pass = generate(8, false, false, false).unwrap();
    assert_eq!(pass.len(), 8);
    assert!(pass.as_str().chars().all(|c| LOWER.contains(c)));
}

#[test]
fn twelve_from_everything() {
    let pass = generate(12, true, true, true).unwrap();
    assert_eq!(pass.len(), 12);
    assert!(pass.as_str().chars().all(|c| c.is_ascii_graphic()));
}

#[test]
fn zero_is_invalid() {
    assert_eq!(generate(0, false, false, false), Err(GenerateError::InvalidLength));
}

#[test]
fn every_flag_combination_stays_in_pool() {
    let mut rng = StdRng::seed_from_u64(99);
    for bits in 0u8..8 {
        let (upper, digits, special) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
        let allowed = pool(upper, digits, special);
        let request =
            GenerationRequest::new(40, ClassSet::from_flags(upper, digits, special)).unwrap();
        let pass = generate_with(&request, &mut rng).unwrap();
        assert_eq!(pass.len(), 40);
        assert!(pass.as_str().bytes().all(|b| allowed.contains(&b)));
    }
}

#[test]
fn disabling_lowercase_too_empties_the_pool() {
    let classes = ClassSet::from_flags(false, false, false).without(CharacterClass::Lowercase);
    let request = GenerationRequest::new(5, classes).unwrap();
    assert_eq!(
        generate_with(&request, &mut StdRng::seed_from_u64(0)),
        Err(GenerateError::EmptyCharacterPool)
    );
}

#[test]
fn text_input_is_validated_first() {
    for input in ["", "   ", "x", "-7", "0", "3.0"] {
        assert_eq!(
            GenerationRequest::parse(input, ClassSet::EMPTY),
            Err(GenerateError::InvalidLength),
            "{input:?}"
        );
    }
    assert_eq!(
        GenerationRequest::parse("15", ClassSet::lowercase())
            .unwrap()
            .length(),
        15
    );
}

#[test]
fn characters_are_spread_over_the_pool() {
    let request = GenerationRequest::new(10_000, ClassSet::from_flags(true, true, true)).unwrap();
    let pass = generate_with(&request, &mut StdRng::seed_from_u64(31337)).unwrap();

    let mut seen = [0usize; 128];
    for b in pass.as_str().bytes() {
        seen[b as usize] += 1;
    }
    // ~106 expected per character; every pool member should show up
    for b in pool(true, true, true) {
        assert!(seen[b as usize] > 40, "{:?} drawn {} times", b as char, seen[b as usize]);
    }
}
