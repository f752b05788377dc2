//! ZKMind Core Library
//!
//! This library implements a zero-knowledge Mastermind scorer: a halo2
//! circuit in which a prover demonstrates, without revealing the secret
//! solution, that a public guess scores exactly the declared number of hits
//! (right color, right position) and blows (right color, wrong position)
//! against a solution fixed in advance by a Poseidon commitment.
//!
//! # Signals
//!
//! **Secret (witness)**: the 4-element solution, each element in `[1, 6]`,
//! and the salt bound into the commitment.
//!
//! **Public (instance)**: the 4-element guess, the declared hit and blow
//! counts, the declared solution sum, and the published commitment. The
//! circuit additionally outputs the recomputed commitment so a verifier can
//! confirm the proof was generated against the published one.
//!
//! # Example
//!
//! ```ignore
//! use zkmind_core::{prove, verify, ProveRequest, VerifyRequest};
//!
//! let response = prove(&ProveRequest {
//!     guess: [3, 5, 4, 6],
//!     solution: [4, 5, 6, 3],
//!     salt: "42".to_string(),
//!     num_hit: 1,
//!     num_blow: 3,
//! })?;
//!
//! let result = verify(&VerifyRequest {
//!     proof: response.proof,
//!     public: response.public,
//! })?;
//! assert!(result.valid);
//! ```
//!
//! A witness that violates any constraint - an out-of-range element, a
//! miscounted hit or blow, a guess sum that contradicts the published
//! solution sum, a commitment that does not recompute - is rejected outright
//! with a `ConstraintViolation`; there is no partial acceptance.

// Core modules
pub mod api;
pub mod circuit;
pub mod commitment;
pub mod encoding;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use api::{
    check, prove, verify, ProveRequest, ProveResponse, PublicSignals, VerifyRequest,
    VerifyResponse, PROOF_VERSION,
};
pub use circuit::{MastermindCircuit, PublicInputs, K};
pub use commitment::commit;
pub use error::{Error, Result};
pub use game::{code_sum, in_range, score, Score, CODE_LENGTH, COLOR_MAX, COLOR_MIN};

#[cfg(test)]
mod tests {
    use super::*;
    use pasta_curves::Fp;

    #[test]
    fn oracle_circuit_and_commitment_agree_on_a_round() {
        let guess = [3, 5, 4, 6];
        let solution = [4, 5, 6, 3];
        let salt = Fp::from(42);

        let s = score(&guess, &solution);
        let public = PublicInputs::new(guess, s, code_sum(&solution), commit(salt, &solution));

        let circuit = MastermindCircuit::new(guess, solution, salt);
        check(&circuit, &public).expect("honest witness accepted");
    }

    #[test]
    fn dishonest_round_is_rejected() {
        let guess = [3, 5, 4, 6];
        let solution = [4, 5, 6, 3];
        let salt = Fp::from(42);

        let public = PublicInputs::new(
            guess,
            Score { hits: 4, blows: 0 },
            code_sum(&solution),
            commit(salt, &solution),
        );

        let circuit = MastermindCircuit::new(guess, solution, salt);
        match check(&circuit, &public) {
            Err(Error::ConstraintViolation(_)) => {}
            other => panic!("expected rejection, got {:?}", other),
        }
    }
}
