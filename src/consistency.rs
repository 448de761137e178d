//! Protocol proving that a Pedersen commitment and its commitment token were built from
//! the same randomness, i.e. given `cm = g * v + h * r`, `cmtok = pk * r` and `pk`, prove
//! knowledge of `(v, r)` linking the two:
//! 1. Prover chooses random `u1, u2`; `t1 = g * u1 + h * u2`, `t2 = pk * u2`
//! 2. Challenge `c = Hash(g || h || cm || cmtok || pk || t1 || t2)`
//! 3. Responses `s1 = u1 + c*v`, `s2 = u2 + c*r`
//! 4. Verifier checks `g * s1 + h * s2 == t1 + cm * c` and `pk * s2 == t2 + cmtok * c`
//!
//! A bank publishing `(cm, cmtok)` for a transaction proves with this that the token
//! really binds the commitment's randomness to the stated keyholder.

use crate::{challenge::hash_to_challenge, error::SigmaError, setup::PedersenParams};
use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{io::Write, rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;

/// Proof that `cm` and `cmtok` share the same randomness under the holder key `pk`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct ConsistencyProof<G: AffineRepr> {
    pub t1: G,
    pub t2: G,
    pub challenge: G::ScalarField,
    pub s1: G::ScalarField,
    pub s2: G::ScalarField,
}

impl<G: AffineRepr> ConsistencyProof<G> {
    /// The opening `(value, randomness)` is checked against both `cm` and `cmtok` before
    /// proving; `InconsistentInput` if either does not match.
    pub fn prove<R: RngCore, D: Digest>(
        rng: &mut R,
        params: &PedersenParams<G>,
        cm: &G,
        cmtok: &G,
        pk: &G,
        value: &G::ScalarField,
        randomness: &G::ScalarField,
    ) -> Result<Self, SigmaError> {
        if !params.open(value, randomness, cm) || (*pk * randomness).into_affine() != *cmtok {
            return Err(SigmaError::InconsistentInput);
        }
        let u1 = G::ScalarField::rand(rng);
        let u2 = G::ScalarField::rand(rng);
        let t1 = (params.g * u1 + params.h * u2).into_affine();
        let t2 = (*pk * u2).into_affine();
        let mut transcript = Vec::new();
        Self::compute_challenge_contribution(params, cm, cmtok, pk, &t1, &t2, &mut transcript)?;
        let challenge = hash_to_challenge::<G::ScalarField, D>(&transcript);
        let s1 = u1 + challenge * value;
        let s2 = u2 + challenge * randomness;
        Ok(Self {
            t1,
            t2,
            challenge,
            s1,
            s2,
        })
    }

    pub fn verify<D: Digest>(
        &self,
        params: &PedersenParams<G>,
        cm: &G,
        cmtok: &G,
        pk: &G,
    ) -> Result<(), SigmaError> {
        let mut transcript = Vec::new();
        Self::compute_challenge_contribution(
            params,
            cm,
            cmtok,
            pk,
            &self.t1,
            &self.t2,
            &mut transcript,
        )?;
        if hash_to_challenge::<G::ScalarField, D>(&transcript) != self.challenge {
            return Err(SigmaError::ChallengeMismatch);
        }
        if params.g * self.s1 + params.h * self.s2
            != self.t1.into_group() + *cm * self.challenge
        {
            return Err(SigmaError::EquationMismatch);
        }
        if *pk * self.s2 != self.t2.into_group() + *cmtok * self.challenge {
            return Err(SigmaError::EquationMismatch);
        }
        Ok(())
    }

    /// Transcript order: `g || h || cm || cmtok || pk || t1 || t2`.
    pub fn compute_challenge_contribution<W: Write>(
        params: &PedersenParams<G>,
        cm: &G,
        cmtok: &G,
        pk: &G,
        t1: &G,
        t2: &G,
        mut writer: W,
    ) -> Result<(), SigmaError> {
        params.g.serialize_compressed(&mut writer)?;
        params.h.serialize_compressed(&mut writer)?;
        cm.serialize_compressed(&mut writer)?;
        cmtok.serialize_compressed(&mut writer)?;
        pk.serialize_compressed(&mut writer)?;
        t1.serialize_compressed(&mut writer)?;
        t2.serialize_compressed(&mut writer)?;
        Ok(())
    }
}
