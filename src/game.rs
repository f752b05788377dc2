//! Mastermind game rules and reference scorer
//!
//! This is the plain (non-circuit) implementation of hit/blow scoring. It is
//! the oracle the circuit is checked against in tests, and the helper the
//! prover uses to fill in the public hit/blow counts for a round.
//!
//! Scoring convention ("colors with repetition"):
//! - a **hit** is a guess element equal to the solution element at the same
//!   position;
//! - total matches = Σ over each color of min(occurrences in guess,
//!   occurrences in solution);
//! - **blows** = total matches − hits.
//!
//! No element is ever counted twice, even when the guess or the solution
//! contains repeated colors.

/// Number of elements in a solution or guess.
pub const CODE_LENGTH: usize = 4;

/// Smallest valid color value.
pub const COLOR_MIN: u8 = 1;

/// Largest valid color value.
pub const COLOR_MAX: u8 = 6;

/// Result of scoring one guess against one solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Exact-position matches.
    pub hits: u8,
    /// Right color, wrong position (after hits are excluded).
    pub blows: u8,
}

impl Score {
    /// Total matched elements. Never exceeds [`CODE_LENGTH`].
    pub fn total(&self) -> u8 {
        self.hits + self.blows
    }
}

/// Check that every element of a code lies in `[COLOR_MIN, COLOR_MAX]`.
pub fn in_range(code: &[u8; CODE_LENGTH]) -> bool {
    code.iter().all(|&v| (COLOR_MIN..=COLOR_MAX).contains(&v))
}

/// Sum of a code's elements, as published alongside the commitment.
pub fn code_sum(code: &[u8; CODE_LENGTH]) -> u8 {
    code.iter().sum()
}

/// Score a guess against a solution.
///
/// Elements outside the color domain never contribute to either count, even
/// when they match positionally; callers that need domain enforcement use
/// [`in_range`] (the circuit enforces it with its own constraints).
pub fn score(guess: &[u8; CODE_LENGTH], solution: &[u8; CODE_LENGTH]) -> Score {
    // Only in-domain values can score; a positional pair of equal
    // out-of-range values is not a hit.
    let hits = guess
        .iter()
        .zip(solution.iter())
        .filter(|(g, s)| g == s && (COLOR_MIN..=COLOR_MAX).contains(*g))
        .count() as u8;

    // Multiset intersection size over the color domain.
    let mut total = 0u8;
    for color in COLOR_MIN..=COLOR_MAX {
        let in_guess = guess.iter().filter(|&&v| v == color).count() as u8;
        let in_solution = solution.iter().filter(|&&v| v == color).count() as u8;
        total += in_guess.min(in_solution);
    }

    Score {
        hits,
        blows: total - hits,
    }
}
