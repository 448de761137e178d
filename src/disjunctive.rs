//! Disjunctive (OR) proof: given `(base1, result1)` and `(base2, result2)`, prove
//! knowledge of a discrete log for one of the two pairs without revealing which.
//!
//! The side actually known is proved for real and the other side is simulated: the prover
//! picks the simulated side's partial challenge `c_sim` up front and builds
//! `t_sim = base_sim * u2 - result_sim * c_sim`, which satisfies the verification equation
//! by construction with response `u2`. The overall challenge then splits as
//! `c_real = c - c_sim`, so the prover controls one partial challenge but never both.
//!
//! Whichever side is real, `t1` is always the point paired with `base1` and `t2` the point
//! paired with `base2` in the transcript `Hash(base1 || result1 || base2 || result2 || t1 || t2)`.
//! When proving the right side the simulated point is therefore hashed *before* the real
//! one. This positional assignment is what lets a single fixed verifier routine accept
//! either side; it is a protocol contract, not a stylistic choice.

use crate::{challenge::hash_to_challenge, error::SigmaError};
use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{io::Write, rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;

/// Which of the two statements the prover actually holds a witness for. Never serialized
/// and never recoverable from a proof.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    /// Witness satisfies `result1 = base1 * x`
    Left,
    /// Witness satisfies `result2 = base2 * x`
    Right,
}

/// OR proof over two (base, result) pairs. `c1 + c2 == challenge` always holds, and both
/// per-side equations are checked by the same routine regardless of which side was real.
#[derive(Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct DisjunctiveProof<G: AffineRepr> {
    pub t1: G,
    pub t2: G,
    pub challenge: G::ScalarField,
    pub c1: G::ScalarField,
    pub c2: G::ScalarField,
    pub s1: G::ScalarField,
    pub s2: G::ScalarField,
}

impl<G: AffineRepr> DisjunctiveProof<G> {
    /// Prove knowledge of `witness` for the pair selected by `side`; the other side is
    /// simulated. `InvalidWitness` if the witness does not satisfy the selected pair.
    pub fn prove<R: RngCore, D: Digest>(
        rng: &mut R,
        base1: &G,
        result1: &G,
        base2: &G,
        result2: &G,
        witness: &G::ScalarField,
        side: Side,
    ) -> Result<Self, SigmaError> {
        let u1 = G::ScalarField::rand(rng);
        let u2 = G::ScalarField::rand(rng);
        let u3 = G::ScalarField::rand(rng);

        match side {
            Side::Left => {
                if (*base1 * witness).into_affine() != *result1 {
                    return Err(SigmaError::InvalidWitness);
                }
                let t1 = (*base1 * u1).into_affine();
                // simulated right side: fake partial challenge chosen before hashing
                let c2 = u3;
                let t2 = (*base2 * u2 - *result2 * c2).into_affine();
                let challenge =
                    Self::compute_challenge::<D>(base1, result1, base2, result2, &t1, &t2)?;
                let c1 = challenge - c2;
                let s1 = u1 + c1 * witness;
                let s2 = u2;
                Ok(Self {
                    t1,
                    t2,
                    challenge,
                    c1,
                    c2,
                    s1,
                    s2,
                })
            }
            Side::Right => {
                if (*base2 * witness).into_affine() != *result2 {
                    return Err(SigmaError::InvalidWitness);
                }
                let t2 = (*base2 * u1).into_affine();
                // simulated left side; hashed in position 1 even though computed second
                let c1 = u3;
                let t1 = (*base1 * u2 - *result1 * c1).into_affine();
                let challenge =
                    Self::compute_challenge::<D>(base1, result1, base2, result2, &t1, &t2)?;
                let c2 = challenge - c1;
                let s2 = u1 + c2 * witness;
                let s1 = u2;
                Ok(Self {
                    t1,
                    t2,
                    challenge,
                    c1,
                    c2,
                    s1,
                    s2,
                })
            }
        }
    }

    /// Single fixed check sequence for either side: recomputed challenge, challenge split,
    /// then both per-side equations.
    pub fn verify<D: Digest>(
        &self,
        base1: &G,
        result1: &G,
        base2: &G,
        result2: &G,
    ) -> Result<(), SigmaError> {
        let recomputed =
            Self::compute_challenge::<D>(base1, result1, base2, result2, &self.t1, &self.t2)?;
        if recomputed != self.challenge {
            return Err(SigmaError::ChallengeMismatch);
        }
        if self.c1 + self.c2 != self.challenge {
            return Err(SigmaError::EquationMismatch);
        }
        if *base1 * self.s1 != self.t1.into_group() + *result1 * self.c1 {
            return Err(SigmaError::EquationMismatch);
        }
        if *base2 * self.s2 != self.t2.into_group() + *result2 * self.c2 {
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

    fn compute_challenge<D: Digest>(
        base1: &G,
        result1: &G,
        base2: &G,
        result2: &G,
        t1: &G,
        t2: &G,
    ) -> Result<G::ScalarField, SigmaError> {
        let mut transcript = Vec::new();
        Self::compute_challenge_contribution(
            base1,
            result1,
            base2,
            result2,
            t1,
            t2,
            &mut transcript,
        )?;
        Ok(hash_to_challenge::<G::ScalarField, D>(&transcript))
    }
}
