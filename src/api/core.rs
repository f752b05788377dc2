//! Core API functions for proof generation and verification
//!
//! This module contains the logic for:
//! - `prove()`  - Generate a zero-knowledge proof for one scoring round
//! - `verify()` - Verify a proof against its public signals
//! - `check()`  - Check all constraints hold for a given witness
//!
//! `prove()` always runs the witness through `check()` first: an
//! unsatisfiable witness is a `ConstraintViolation`, reported before any
//! expensive key generation, and never silently turned into a proof that
//! would fail verification.

use halo2_proofs::dev::MockProver;
use halo2_proofs::pasta::{EqAffine, Fp};
use halo2_proofs::plonk::{create_proof, keygen_pk, keygen_vk, verify_proof, SingleVerifier};
use halo2_proofs::poly::commitment::Params;
use halo2_proofs::transcript::{Blake2bRead, Blake2bWrite, Challenge255};
use rand_core::OsRng;

use crate::api::{ProveRequest, ProveResponse, PublicSignals, VerifyRequest, VerifyResponse};
use crate::api::types::PROOF_VERSION;
use crate::circuit::{MastermindCircuit, PublicInputs, K};
use crate::commitment::commit;
use crate::encoding::parse_field_element;
use crate::error::{Error, Result};
use crate::game::{code_sum, Score};

/// Generate a zero-knowledge proof for one scoring round
///
/// # Arguments
/// * `request` - The guess, declared counts, and the secret solution + salt
///
/// # Returns
/// * `Ok(ProveResponse)` - ASCII85 proof plus the public signals to publish
/// * `Err(Error::ConstraintViolation)` - the witness does not satisfy the
///   circuit (wrong counts, out-of-range element, sum mismatch, ...)
pub fn prove(request: &ProveRequest) -> Result<ProveResponse> {
    let salt = parse_field_element(&request.salt)?;

    // The published attestations are derived from the secret solution.
    let public = PublicInputs::new(
        request.guess,
        Score {
            hits: request.num_hit,
            blows: request.num_blow,
        },
        code_sum(&request.solution),
        commit(salt, &request.solution),
    );

    let circuit = MastermindCircuit::new(request.guess, request.solution, salt);

    // Reject unsatisfiable witnesses up front.
    check(&circuit, &public)?;

    let params: Params<EqAffine> = Params::new(K);
    let proof_bytes = generate_proof(circuit, &public.to_instance(), &params)?;

    Ok(ProveResponse {
        version: PROOF_VERSION,
        proof: ascii85::encode(&proof_bytes),
        public: PublicSignals::from_public_inputs(&public),
    })
}

/// Verify a zero-knowledge proof
///
/// # Arguments
/// * `request` - Proof and the public signals it was generated against
///
/// # Returns
/// * `Ok(VerifyResponse)` - Verification result (valid/invalid)
/// * `Err(Error)` - the request itself was malformed
pub fn verify(request: &VerifyRequest) -> Result<VerifyResponse> {
    let public = request.public.to_public_inputs()?;

    let proof_bytes = ascii85::decode(&request.proof)
        .map_err(|e| Error::Encoding(format!("failed to decode proof: {:?}", e)))?;

    let params: Params<EqAffine> = Params::new(K);
    let vk = keygen_vk(&params, &MastermindCircuit::default())
        .map_err(|e| Error::Backend(format!("failed to generate VK: {:?}", e)))?;

    let strategy = SingleVerifier::new(&params);
    let mut transcript = Blake2bRead::<_, EqAffine, Challenge255<_>>::init(&proof_bytes[..]);

    let instance = public.to_instance();
    let instance_slice: &[Fp] = &instance;
    let instances: &[&[Fp]] = &[instance_slice];

    let result = verify_proof(&params, &vk, strategy, &[instances], &mut transcript);

    Ok(VerifyResponse {
        valid: result.is_ok(),
        error: result.err().map(|e| format!("{:?}", e)),
    })
}

/// Check all constraints hold for a given witness
///
/// Runs the circuit under `MockProver` without producing a proof. Returns
/// `Error::ConstraintViolation` naming the first violated constraint when
/// the witness is rejected.
pub fn check(circuit: &MastermindCircuit, public: &PublicInputs) -> Result<()> {
    let prover = MockProver::run(K, circuit, vec![public.to_instance()])
        .map_err(|e| Error::Backend(format!("synthesis failed: {:?}", e)))?;

    prover.verify().map_err(|failures| {
        let detail = failures
            .first()
            .map(|f| f.to_string())
            .unwrap_or_else(|| "unknown constraint failure".to_string());
        Error::ConstraintViolation(detail)
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Run keygen and produce the proof bytes for one circuit instance
fn generate_proof(
    circuit: MastermindCircuit,
    instance: &[Fp],
    params: &Params<EqAffine>,
) -> Result<Vec<u8>> {
    let empty = MastermindCircuit::default();

    let vk = keygen_vk(params, &empty)
        .map_err(|e| Error::Backend(format!("failed to generate VK: {:?}", e)))?;
    let pk = keygen_pk(params, vk, &empty)
        .map_err(|e| Error::Backend(format!("failed to generate PK: {:?}", e)))?;

    let mut transcript = Blake2bWrite::<_, EqAffine, Challenge255<_>>::init(vec![]);

    let instances: &[&[Fp]] = &[instance];
    create_proof(
        params,
        &pk,
        &[circuit],
        &[instances],
        OsRng,
        &mut transcript,
    )
    .map_err(|e| Error::Backend(format!("failed to create proof: {:?}", e)))?;

    Ok(transcript.finalize())
}
