//! API module
//!
//! High-level prove/verify surface around the scoring circuit. JSON-ready
//! request/response types live in `types`, the proving pipeline in `core`.

mod core;
mod types;

pub use self::core::{check, prove, verify};
pub use types::{
    ProveRequest, ProveResponse, PublicSignals, VerifyRequest, VerifyResponse, PROOF_VERSION,
};
