//! Circuit module
//!
//! This module contains the scoring constraint system and its public
//! signal layout.

mod builder;
pub mod layout;

pub use builder::*;
pub use layout::{PublicInputs, K};
