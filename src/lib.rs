#![cfg_attr(not(feature = "std"), no_std)]

//! Sigma protocol for proving that two Pedersen commitments open to the same value, where the
//! commitments may live in the same elliptic curve group or in two different groups. Refer
//! <https://crypto.stanford.edu/cs355/19sp/lec5.pdf> for background on Schnorr-style proofs.
//!
//! A prover commits to a secret `x` twice, as `x * G_1 + r_1 * Q_1` and `x * G_2 + r_2 * Q_2`,
//! with independent blinding factors and independent auxiliary generators, and produces a
//! non-interactive proof (4 scalars) that both commitments open to the same `x`. The interactive
//! sigma protocol is collapsed with Fiat-Shamir: the challenge is the hash of both announcements
//! and a public nonce, so a proof is bound to the context that supplied the nonce and cannot be
//! replayed under a different one.
//!
//! Supported group pairings, all through the same generic code path:
//! - BLS12-381 G1 with G1, G2 with G2, G1 with G2 and G2 with G1. The twin groups share their
//!   scalar field which is what makes the cross-group responses well-defined.
//! - secp256k1 with secp256k1.
//!
//! The auxiliary generators are nothing-up-my-sleeve points derived from fixed public seed
//! strings, see [group] for the derivation per curve and for the caveat on the secp256k1
//! construction.

pub mod commitment;
pub mod eq_proof;
pub mod error;
pub mod group;

pub use commitment::Commitment;
pub use eq_proof::EqProof;
pub use group::{ProofGroup, Q1_SEED, Q2_SEED};
