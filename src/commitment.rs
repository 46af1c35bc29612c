//! Pedersen commitment to a scalar: hiding under the blinding factor, binding as long as the
//! discrete log of the auxiliary generator relative to the base generator is unknown.

use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// Pedersen commitment `x * G + r * Q` with `G` the group's base generator and `Q` an auxiliary
/// generator. Public once created; the opening `(x, r)` stays with the committer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Commitment<G: AffineRepr>(pub G);

impl<G: AffineRepr> Commitment<G> {
    /// Commit to `x` with blinding `r` under the auxiliary generator `q`
    pub fn new(x: &G::ScalarField, r: &G::ScalarField, q: &G) -> Self {
        Self((G::generator() * x + *q * r).into_affine())
    }
}
