// src/generators/strength.rs
use std::collections::HashSet;

use serde::{Serialize, Deserialize};

use crate::models::Strength;

/// Highest score the estimator can produce. UIs render meters as
/// `score / MAX_SCORE`.
pub const MAX_SCORE: u32 = 9;

/// Result of scoring a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthEstimate {
    pub score: u32,
    pub strength: Strength,
}

impl StrengthEstimate {
    /// Score normalized to 0-100 for strength meters.
    pub fn percent(&self) -> u32 {
        self.score * 100 / MAX_SCORE
    }
}

/// Score a password for strength.
///
/// The score combines a length tier, character-class presence, and a
/// character-variety bonus. An empty password scores 0 and is weak; the
/// function is total and deterministic.
pub fn estimate_strength(password: &str) -> StrengthEstimate {
    if password.is_empty() {
        return StrengthEstimate {
            score: 0,
            strength: Strength::Weak,
        };
    }

    let length = password.chars().count();
    let mut score = 0u32;

    // Length tiers
    if length >= 12 {
        score += 3;
    } else if length >= 8 {
        score += 2;
    } else if length >= 6 {
        score += 1;
    }

    // Character classes
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 2;
    }

    // Variety bonus: mostly-distinct characters
    let unique: HashSet<char> = password.chars().collect();
    if unique.len() as f64 >= length as f64 * 0.7 {
        score += 1;
    }

    let strength = if score >= 7 {
        Strength::Strong
    } else if score >= 4 {
        Strength::Medium
    } else {
        Strength::Weak
    };

    StrengthEstimate { score, strength }
}
