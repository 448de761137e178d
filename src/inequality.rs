//! Proof that two committed values differ, without revealing either. A thin transformation
//! into the indicator proof: given `cm_a, cm_b` with tokens `cmtok_a, cmtok_b`, the
//! difference `cm_a - cm_b` commits to `a - b` with randomness `r_a - r_b`, and
//! `cmtok_a - cmtok_b` is the matching token. Proving the difference's nonzero indicator
//! ([`AbcProof`] on the right side) proves `a != b`.

use crate::{
    abc::AbcProof,
    disjunctive::Side,
    error::SigmaError,
    setup::{PedersenParams, SecretKey},
};
use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::RngCore;
use digest::Digest;

/// Proof that the values inside `cm_a` and `cm_b` differ. Wraps the indicator proof over
/// the difference commitment.
#[derive(Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct InequalityProof<G: AffineRepr>(pub AbcProof<G>);

impl<G: AffineRepr> InequalityProof<G> {
    /// Fails fast with `EqualValues` when `value_a == value_b`; equal values have a zero
    /// difference and no inequality proof exists for them.
    pub fn prove<R: RngCore, D: Digest>(
        rng: &mut R,
        params: &PedersenParams<G>,
        value_a: &G::ScalarField,
        value_b: &G::ScalarField,
        cm_a: &G,
        cm_b: &G,
        cmtok_a: &G,
        cmtok_b: &G,
        sk: &SecretKey<G::ScalarField>,
    ) -> Result<Self, SigmaError> {
        if value_a == value_b {
            return Err(SigmaError::EqualValues);
        }
        let value = *value_a - value_b;
        let (cm, cmtok) = Self::derived_statement(cm_a, cm_b, cmtok_a, cmtok_b);
        let proof = AbcProof::prove::<_, D>(rng, params, &cm, &cmtok, &value, sk, Side::Right)?;
        Ok(Self(proof))
    }

    /// Verification is exactly the indicator proof's verification on the derived
    /// difference statement.
    pub fn verify<D: Digest>(
        &self,
        params: &PedersenParams<G>,
        cm_a: &G,
        cm_b: &G,
        cmtok_a: &G,
        cmtok_b: &G,
    ) -> Result<(), SigmaError> {
        let (cm, cmtok) = Self::derived_statement(cm_a, cm_b, cmtok_a, cmtok_b);
        self.0.verify::<D>(params, &cm, &cmtok)
    }

    fn derived_statement(cm_a: &G, cm_b: &G, cmtok_a: &G, cmtok_b: &G) -> (G, G) {
        (
            (cm_a.into_group() - cm_b.into_group()).into_affine(),
            (cmtok_a.into_group() - cmtok_b.into_group()).into_affine(),
        )
    }
}
