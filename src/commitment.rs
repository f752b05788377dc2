//! Poseidon commitment over the secret solution
//!
//! The solution is bound before any guess is made by publishing
//! `Poseidon(salt, s0, s1, s2, s3)`. The salt is a full field element chosen
//! by the prover; without it the 6^4 solution space would fall to a trivial
//! dictionary attack on the hash.
//!
//! The same Poseidon instance (`P128Pow5T3`, width 3, rate 2) is evaluated
//! in-circuit by the commitment checker, so this function and the circuit
//! agree bit-for-bit on every input.

use halo2_gadgets::poseidon::primitives::{self as poseidon, ConstantLength, P128Pow5T3};
use pasta_curves::Fp;

use crate::game::CODE_LENGTH;

/// Number of field elements absorbed by the commitment hash.
pub const COMMIT_ARITY: usize = CODE_LENGTH + 1;

/// Compute the commitment to a solution under a salt.
///
/// Deterministic: identical `(salt, solution)` inputs always produce the
/// identical field element.
pub fn commit(salt: Fp, solution: &[u8; CODE_LENGTH]) -> Fp {
    let message = [
        salt,
        Fp::from(solution[0] as u64),
        Fp::from(solution[1] as u64),
        Fp::from(solution[2] as u64),
        Fp::from(solution[3] as u64),
    ];
    poseidon::Hash::<Fp, P128Pow5T3, ConstantLength<COMMIT_ARITY>, 3, 2>::init().hash(message)
}
