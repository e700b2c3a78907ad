// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};

use crate::models::GenerationOptions;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Generate a random password from the selected character classes.
///
/// The alphabet is the concatenation of the enabled pools in the fixed
/// order uppercase, lowercase, numbers, symbols. With every class
/// disabled the alphabet falls back to lowercase+numbers, so the function
/// always returns a string of exactly `options.length` characters.
/// Positions are drawn independently; a generated password is not
/// guaranteed to contain every enabled class.
pub fn generate_password(options: &GenerationOptions) -> String {
    let mut chars = Vec::new();

    if options.include_uppercase {
        chars.extend_from_slice(UPPERCASE);
    }
    if options.include_lowercase {
        chars.extend_from_slice(LOWERCASE);
    }
    if options.include_numbers {
        chars.extend_from_slice(NUMBERS);
    }
    if options.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    if chars.is_empty() {
        chars.extend_from_slice(LOWERCASE);
        chars.extend_from_slice(NUMBERS);
    }

    if options.length == 0 {
        return String::new();
    }

    let mut rng = rand::thread_rng();
    let dist = Uniform::from(0..chars.len());

    (0..options.length)
        .map(|_| chars[dist.sample(&mut rng)] as char)
        .collect()
}
