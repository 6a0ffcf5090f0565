//! Random password generator.
//!
//! Every generated password satisfies the four character-class checks
//! by construction.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::checks::SPECIAL_CHARS;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Total length of a generated password.
pub const GENERATED_LENGTH: usize = 14;

// One mandatory character per class, the rest drawn from the union.
const FILL_LENGTH: usize = GENERATED_LENGTH - 4;

/// Generates a random 14-character password.
///
/// One character is drawn uniformly from each of the four classes
/// (uppercase, lowercase, digits, `!@#$%^&*`), ten more are drawn
/// uniformly from their union, and the whole sequence is shuffled so
/// the mandatory characters are not front-loaded.
///
/// The result always scores 5/5 on the scored checks of
/// [`evaluate_password_strength`](crate::evaluate_password_strength).
pub fn generate_password() -> String {
    generate_password_with(&mut rand::rng())
}

/// Same as [`generate_password`], with a caller-supplied RNG.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let classes: [&[u8]; 4] = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL_CHARS.as_bytes()];

    let mut chars: Vec<u8> = Vec::with_capacity(GENERATED_LENGTH);

    // Classes are non-empty, so choose() never returns None
    for class in classes {
        chars.extend(class.choose(rng).copied());
    }

    let pool: Vec<u8> = classes.concat();
    for _ in 0..FILL_LENGTH {
        chars.extend(pool.choose(rng).copied());
    }

    chars.shuffle(rng);

    chars.into_iter().map(char::from).collect()
}
