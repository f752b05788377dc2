//! Public signal layout for the scoring circuit
//!
//! The verifier and prover must agree on the exact ordering of values in the
//! instance column. This module is the single source of truth for that
//! ordering and for the circuit size parameter `k`.

use pasta_curves::Fp;

use crate::game::{Score, CODE_LENGTH};

/// Instance rows 0..4: the four public guess elements.
pub const ROW_GUESS: usize = 0;

/// Instance row for the declared hit count.
pub const ROW_NUM_HIT: usize = ROW_GUESS + CODE_LENGTH;

/// Instance row for the declared blow count.
pub const ROW_NUM_BLOW: usize = ROW_NUM_HIT + 1;

/// Instance row for the declared solution sum.
pub const ROW_SOLN_SUM: usize = ROW_NUM_BLOW + 1;

/// Instance row for the previously published commitment.
pub const ROW_SOLN_HASH: usize = ROW_SOLN_SUM + 1;

/// Instance row for the circuit's recomputed commitment output.
pub const ROW_HASH_OUT: usize = ROW_SOLN_HASH + 1;

/// Total number of instance rows.
pub const NUM_INSTANCE_ROWS: usize = ROW_HASH_OUT + 1;

/// Circuit size: 2^K rows. Sized for the score gadgets plus three Poseidon
/// permutations with headroom for blinding rows.
pub const K: u32 = 11;

/// The public half of one proving round.
///
/// Everything here is known to the verifier; the solution and salt never
/// appear. One immutable value per proof, shared read-only by every
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicInputs {
    /// The guess being scored.
    pub guess: [u8; CODE_LENGTH],
    /// Declared exact-position match count.
    pub num_hit: u8,
    /// Declared color-only match count.
    pub num_blow: u8,
    /// Declared sum of the solution elements.
    pub soln_sum: u8,
    /// Published commitment to (salt, solution).
    pub soln_hash: Fp,
}

impl PublicInputs {
    /// Assemble public inputs for a round from the guess, its score, and the
    /// published solution attestations.
    pub fn new(guess: [u8; CODE_LENGTH], score: Score, soln_sum: u8, soln_hash: Fp) -> Self {
        Self {
            guess,
            num_hit: score.hits,
            num_blow: score.blows,
            soln_sum,
            soln_hash,
        }
    }

    /// Lay the values out as one instance column, in row order.
    ///
    /// The recomputed-commitment output row carries the same value as the
    /// declared-commitment row; the circuit constrains its hash cell to both,
    /// which is what makes the declared commitment binding.
    pub fn to_instance(&self) -> Vec<Fp> {
        let mut rows = Vec::with_capacity(NUM_INSTANCE_ROWS);
        for &g in &self.guess {
            rows.push(Fp::from(g as u64));
        }
        rows.push(Fp::from(self.num_hit as u64));
        rows.push(Fp::from(self.num_blow as u64));
        rows.push(Fp::from(self.soln_sum as u64));
        rows.push(self.soln_hash);
        rows.push(self.soln_hash);
        rows
    }
}
