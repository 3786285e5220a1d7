//! Random password generation.
//!
//! Passwords are drawn uniformly, with replacement, from a fixed
//! 75-symbol alphabet: ASCII letters, digits and `!@#$%^&*-_+=`.

use rand::Rng;

/// Length used when the caller gives no usable length.
pub const DEFAULT_LENGTH: usize = 10;

/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 1024;

/// Every character a generated password may contain.
pub const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*-_+=";

/// Generate a random password of `length` characters.
///
/// A length of zero falls back to `DEFAULT_LENGTH`; anything longer than
/// `MAX_LENGTH` is clamped to it.
pub fn generate_password(length: usize) -> String {
    let length = match length {
        0 => DEFAULT_LENGTH,
        n => n.min(MAX_LENGTH),
    };
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}

/// Turn user input into a password length.
///
/// Only a plain run of ASCII digits with a value in `1..=MAX_LENGTH` is
/// accepted; anything else (empty, signs, letters, zero, too long)
/// yields `DEFAULT_LENGTH`.
pub fn parse_length(input: Option<&str>) -> usize {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| is_valid_length(n))
        .unwrap_or(DEFAULT_LENGTH)
}

/// `true` if `n` is a length the generator accepts as given.
pub fn is_valid_length(n: usize) -> bool {
    (1..=MAX_LENGTH).contains(&n)
}
