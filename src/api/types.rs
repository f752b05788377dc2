//! JSON API structures for prove/verify operations
//!
//! One request/response pair per operation. The secret half of a round
//! (solution, salt) only ever appears in [`ProveRequest`]; everything in
//! [`PublicSignals`] is safe to publish and is exactly what the verifier
//! checks the proof against.

use serde::{Deserialize, Serialize};

use crate::circuit::PublicInputs;
use crate::encoding::{field_to_hex, parse_field_element};
use crate::error::{Error, Result};
use crate::game::{Score, CODE_LENGTH};

/// Current API version for proof format
pub const PROOF_VERSION: u32 = 1;

/// Request to prove one scoring round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProveRequest {
    /// The public guess being scored.
    pub guess: [u8; CODE_LENGTH],

    /// The secret solution. Never included in any response.
    pub solution: [u8; CODE_LENGTH],

    /// The secret salt as a decimal or 0x-hex field element.
    pub salt: String,

    /// Declared exact-position match count.
    pub num_hit: u8,

    /// Declared color-only match count.
    pub num_blow: u8,
}

/// The public signals a proof commits to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicSignals {
    pub guess: [u8; CODE_LENGTH],
    pub num_hit: u8,
    pub num_blow: u8,

    /// Sum of the solution elements, published with the commitment.
    pub soln_sum: u8,

    /// Commitment to (salt, solution) as a 0x-hex field element.
    pub soln_hash: String,
}

impl PublicSignals {
    /// Parse into the instance-column representation.
    pub fn to_public_inputs(&self) -> Result<PublicInputs> {
        let soln_hash = parse_field_element(&self.soln_hash)?;
        Ok(PublicInputs::new(
            self.guess,
            Score {
                hits: self.num_hit,
                blows: self.num_blow,
            },
            self.soln_sum,
            soln_hash,
        ))
    }

    pub(crate) fn from_public_inputs(public: &PublicInputs) -> Self {
        Self {
            guess: public.guess,
            num_hit: public.num_hit,
            num_blow: public.num_blow,
            soln_sum: public.soln_sum,
            soln_hash: field_to_hex(&public.soln_hash),
        }
    }
}

/// Response from proof generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProveResponse {
    /// Proof format version
    pub version: u32,

    /// ASCII85-encoded proof bytes
    pub proof: String,

    /// Public signals the verifier must supply unchanged
    pub public: PublicSignals,
}

/// Request to verify a proof
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// ASCII85-encoded proof bytes
    pub proof: String,

    /// Public signals the proof was generated against
    pub public: PublicSignals,
}

/// Verification result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,

    /// Backend error text when the proof was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProveResponse {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Encoding(e.to_string()))
    }
}

impl VerifyRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_signals_round_trip_through_json() {
        let response = ProveResponse {
            version: PROOF_VERSION,
            proof: "abc".to_string(),
            public: PublicSignals {
                guess: [3, 5, 4, 6],
                num_hit: 1,
                num_blow: 3,
                soln_sum: 18,
                soln_hash: "0x2a".to_string(),
            },
        };

        let json = response.to_json().unwrap();
        let request = VerifyRequest::from_json(
            &format!(r#"{{"proof":"abc","public":{}}}"#, serde_json::to_string(&response.public).unwrap()),
        )
        .unwrap();

        assert!(json.contains("\"version\":1"));
        assert_eq!(request.public.guess, [3, 5, 4, 6]);
        assert_eq!(request.public.soln_hash, "0x2a");
    }

    #[test]
    fn bad_hash_string_is_an_encoding_error() {
        let public = PublicSignals {
            guess: [1, 2, 3, 4],
            num_hit: 4,
            num_blow: 0,
            soln_sum: 10,
            soln_hash: "not-a-number".to_string(),
        };
        assert!(public.to_public_inputs().is_err());
    }
}
