//! Password generation core. No I/O and no UI: callers pass every input in.

pub mod charset;
mod generate;
mod password;
mod strength;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{
    GenerateError, GenerationRequest, MAX_LENGTH, generate, generate_with, parse_length,
};
pub use password::Password;
pub use strength::{entropy_bits, strength};
