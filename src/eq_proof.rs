//! Non-interactive proof that two Pedersen commitments open to the same value.
//!
//! The prover holds `x`, `r1`, `r2` with commitments `C_1 = x * G_1 + r1 * Q_1` in the first
//! group and `C_2 = x * G_2 + r2 * Q_2` in the second. One sigma-protocol round, collapsed with
//! Fiat-Shamir:
//! 1. Sample `w`, `n1`, `n2` and announce `W_1 = w * G_1 + n1 * Q_1`, `W_2 = w * G_2 + n2 * Q_2`.
//!    The same unscaled `w` multiplies both base generators; that is what ties the two
//!    commitments to a single `x`.
//! 2. Challenge `c = HASH(W_1 || W_2 || nonce)` reduced into the first group's scalar field,
//!    with the first group's digest. The input ordering and the compressed point encoding are
//!    part of the wire contract.
//! 3. Respond with `d = w - c * x`, `d1 = n1 - c * r1`, `d2 = n2 - c * r2`.
//!
//! The verifier reconstructs both announcements as `d * G_i + d_i * Q_i + c * C_i`, using the
//! identical `d` on both sides, and accepts iff rehashing them reproduces `c`. The nonce binds a
//! proof to a context and blocks verbatim replay elsewhere; it contributes no randomness.

use crate::{commitment::Commitment, error::Error, group::ProofGroup};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;

/// Proof of equality of the committed value in two commitments. Four scalars in the first
/// group's scalar field, carries no secret material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct EqProof<F: PrimeField> {
    /// Fiat-Shamir challenge
    pub c: F,
    /// Response binding the shared value `x`
    pub d: F,
    /// Response binding the first blinding factor
    pub d1: F,
    /// Response binding the second blinding factor
    pub d2: F,
}

impl<F: PrimeField> EqProof<F> {
    /// Prove that commitments to `x` under blindings `r1` (first group, generator `Q_1`) and
    /// `r2` (second group, generator `Q_2`) open to the same `x`. Same-group proofs instantiate
    /// `G1` and `G2` with the same curve.
    pub fn new<R: RngCore, G1, G2>(
        rng: &mut R,
        x: &F,
        r1: &F,
        r2: &F,
        nonce: u64,
    ) -> Result<Self, Error>
    where
        G1: ProofGroup<ScalarField = F>,
        G2: ProofGroup<ScalarField = F>,
    {
        let mut w = F::rand(rng);
        let mut n1 = F::rand(rng);
        let mut n2 = F::rand(rng);

        let q1 = G1::q1()?;
        let q2 = G2::q2()?;

        let w1 = (G1::generator() * w + q1 * n1).into_affine();
        let w2 = (G2::generator() * w + q2 * n2).into_affine();

        let c = challenge::<F, G1::ChallengeDigest, _, _>(&w1, &w2, nonce)?;

        let d = w - c * x;
        let d1 = n1 - c * r1;
        let d2 = n2 - c * r2;

        w.zeroize();
        n1.zeroize();
        n2.zeroize();

        Ok(Self { c, d, d1, d2 })
    }

    /// Check the proof against the two commitments and the context nonce. `Ok(false)` means the
    /// proof was rejected; `Err` is reserved for a failing curve backend.
    pub fn verify<G1, G2>(
        &self,
        comm1: &Commitment<G1>,
        comm2: &Commitment<G2>,
        nonce: u64,
    ) -> Result<bool, Error>
    where
        G1: ProofGroup<ScalarField = F>,
        G2: ProofGroup<ScalarField = F>,
    {
        let q1 = G1::q1()?;
        let q2 = G2::q2()?;

        // the same `d` scales both base generators, mirroring the prover's shared `w`
        let lhs = (G1::generator() * self.d + q1 * self.d1 + comm1.0 * self.c).into_affine();
        let rhs = (G2::generator() * self.d + q2 * self.d2 + comm2.0 * self.c).into_affine();

        let c = challenge::<F, G1::ChallengeDigest, _, _>(&lhs, &rhs, nonce)?;
        Ok(c == self.c)
    }
}

/// `HASH(first || second || nonce)` as a big-endian integer reduced into `F`. The nonce is
/// hashed as its minimal big-endian byte string, empty for zero.
fn challenge<F: PrimeField, D: Digest, P1: CanonicalSerialize, P2: CanonicalSerialize>(
    first: &P1,
    second: &P2,
    nonce: u64,
) -> Result<F, Error> {
    let mut bytes = Vec::new();
    first.serialize_compressed(&mut bytes)?;
    second.serialize_compressed(&mut bytes)?;
    let be = nonce.to_be_bytes();
    let zeros = be.iter().take_while(|b| **b == 0).count();
    bytes.extend_from_slice(&be[zeros..]);
    Ok(F::from_be_bytes_mod_order(&D::digest(&bytes)))
}
