//! Chaum-Pedersen style protocol proving that two public results share the same discrete
//! log under two different bases, i.e. given `result1 = base1 * x` and `result2 = base2 * x`,
//! prove knowledge of the common `x`:
//! 1. Prover chooses one random `u` and computes `t1 = base1 * u`, `t2 = base2 * u`
//! 2. Challenge `c = Hash(base1 || result1 || base2 || result2 || t1 || t2)`
//! 3. Response `s = u + c*x`
//! 4. Verifier checks `base1 * s == t1 + result1 * c` and `base2 * s == t2 + result2 * c`
//!
//! On a ledger this shows two commitments-to-randomness (or two tokens under different
//! keys) were built from the same secret without revealing it.

use crate::{challenge::hash_to_challenge, error::SigmaError};
use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{io::Write, rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;

/// Proof that `result1` and `result2` have the same discrete log under `base1` and `base2`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct EquivalenceProof<G: AffineRepr> {
    pub t1: G,
    pub t2: G,
    pub challenge: G::ScalarField,
    pub response: G::ScalarField,
}

impl<G: AffineRepr> EquivalenceProof<G> {
    /// Both relations are checked against the witness before proving; `InvalidWitness`
    /// if either fails.
    pub fn prove<R: RngCore, D: Digest>(
        rng: &mut R,
        base1: &G,
        result1: &G,
        base2: &G,
        result2: &G,
        witness: &G::ScalarField,
    ) -> Result<Self, SigmaError> {
        if (*base1 * witness).into_affine() != *result1
            || (*base2 * witness).into_affine() != *result2
        {
            return Err(SigmaError::InvalidWitness);
        }
        let u = G::ScalarField::rand(rng);
        let t1 = (*base1 * u).into_affine();
        let t2 = (*base2 * u).into_affine();
        let mut transcript = Vec::new();
        Self::compute_challenge_contribution(base1, result1, base2, result2, &t1, &t2, &mut transcript)?;
        let challenge = hash_to_challenge::<G::ScalarField, D>(&transcript);
        let response = u + challenge * witness;
        Ok(Self {
            t1,
            t2,
            challenge,
            response,
        })
    }

    pub fn verify<D: Digest>(
        &self,
        base1: &G,
        result1: &G,
        base2: &G,
        result2: &G,
    ) -> Result<(), SigmaError> {
        let mut transcript = Vec::new();
        Self::compute_challenge_contribution(
            base1,
            result1,
            base2,
            result2,
            &self.t1,
            &self.t2,
            &mut transcript,
        )?;
        if hash_to_challenge::<G::ScalarField, D>(&transcript) != self.challenge {
            return Err(SigmaError::ChallengeMismatch);
        }
        if *base1 * self.response != self.t1.into_group() + *result1 * self.challenge {
            return Err(SigmaError::EquationMismatch);
        }
        if *base2 * self.response != self.t2.into_group() + *result2 * self.challenge {
            return Err(SigmaError::EquationMismatch);
        }
        Ok(())
    }

    /// Transcript order: `base1 || result1 || base2 || result2 || t1 || t2`.
    pub fn compute_challenge_contribution<W: Write>(
        base1: &G,
        result1: &G,
        base2: &G,
        result2: &G,
        t1: &G,
        t2: &G,
        mut writer: W,
    ) -> Result<(), SigmaError> {
        base1.serialize_compressed(&mut writer)?;
        result1.serialize_compressed(&mut writer)?;
        base2.serialize_compressed(&mut writer)?;
        result2.serialize_compressed(&mut writer)?;
        t1.serialize_compressed(&mut writer)?;
        t2.serialize_compressed(&mut writer)?;
        Ok(())
    }
}
