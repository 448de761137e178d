//! Proof that an auxiliary commitment is the correct "is-nonzero indicator" of a committed
//! value: given `cm = g * v + u_a * h` and token `cmtok = pk * u_a`, the prover publishes
//! commitments `b` (to `v^-1`, with the convention that the inverse of zero is zero) and
//! `c` (to `1` if `v != 0`, to `0` if `v = 0`) and proves `c` commits to exactly the right
//! indicator. Aggregating the `c`s lets an auditor compute sums and averages over the
//! subset of transactions with nonzero amounts without learning any amount.
//!
//! The indicator is pinned by a disjunctive sub-proof over `(cm, cmtok)` and `(h, c - g)`:
//! either `cmtok` is a multiple of `cm` by the secret key (only possible when `v = 0`, as
//! then `cm = u_a * h` and `cmtok = sk * cm`), or `c - g` is a multiple of `h` (only
//! possible when `c` commits to exactly `1`; subtracting a single `g` is what rules out
//! commitments to any other value). The main equations then tie `b`, `c` and the responses
//! `j, k, l` to the committed `v`:
//!
//! - `cm * ch + t1 == g * j + cmtok * k` with `t1 = g * u1 + cmtok * u2`,
//!   `j = u1 + v * ch`, `k = u2 + sk^-1 * ch`
//! - `c * ch + t2 == b * j + h * l` with `t2 = b * u1 + h * u3`,
//!   `l = u3 + (u_c - v * u_b) * ch`
//!
//! All responses are field elements, so every one is reduced by the group order.

use crate::{
    challenge::hash_to_challenge,
    disjunctive::{DisjunctiveProof, Side},
    error::SigmaError,
    setup::{PedersenParams, SecretKey},
};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{Field, One, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{io::Write, rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;

/// Proof that commitment `c` is the correct zero/nonzero indicator for the value inside
/// `cm`. Field order is also the wire order of the codec.
#[derive(Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct AbcProof<G: AffineRepr> {
    /// Commitment to the value's inverse (to zero when the value is zero)
    pub b: G,
    /// Commitment to the indicator: `0` for a zero value, `1` otherwise
    pub c: G,
    pub t1: G,
    pub t2: G,
    pub challenge: G::ScalarField,
    pub j: G::ScalarField,
    pub k: G::ScalarField,
    pub l: G::ScalarField,
    /// `pk * u_c`, lets public data tie the indicator's randomness to the keyholder
    pub c_token: G,
    /// Pins the indicator to exactly 0 or 1
    pub disjunctive: DisjunctiveProof<G>,
}

impl<G: AffineRepr> AbcProof<G> {
    /// Prove the indicator relation for `value` committed in `(cm, cmtok)` under `sk`.
    /// `Side::Left` asserts `value == 0`, `Side::Right` asserts `value != 0`; a selector
    /// that disagrees with the value fails fast with `InvalidSidePair`.
    pub fn prove<R: RngCore, D: Digest>(
        rng: &mut R,
        params: &PedersenParams<G>,
        cm: &G,
        cmtok: &G,
        value: &G::ScalarField,
        sk: &SecretKey<G::ScalarField>,
        side: Side,
    ) -> Result<Self, SigmaError> {
        let sk_inv = sk.0.inverse().ok_or(SigmaError::InvalidWitness)?;
        let u1 = G::ScalarField::rand(rng);
        let u2 = G::ScalarField::rand(rng);
        let u3 = G::ScalarField::rand(rng);
        let u_b = G::ScalarField::rand(rng);
        let u_c = G::ScalarField::rand(rng);
        let pk = (params.h * sk.0).into_affine();
        let c_token = (pk * u_c).into_affine();

        let (b, c, disjunctive) = match side {
            Side::Left => {
                if !value.is_zero() {
                    return Err(SigmaError::InvalidSidePair);
                }
                // inverse of zero is taken to be zero
                let b = params.commit(&G::ScalarField::zero(), &u_b);
                let c = params.commit(&G::ScalarField::zero(), &u_c);
                let c_min_g = (c.into_group() - params.g).into_affine();
                let sub = DisjunctiveProof::prove::<_, D>(
                    rng,
                    cm,
                    cmtok,
                    &params.h,
                    &c_min_g,
                    &sk.0,
                    Side::Left,
                )?;
                (b, c, sub)
            }
            Side::Right => {
                // inversion doubles as the zero check
                let value_inv = value.inverse().ok_or(SigmaError::InvalidSidePair)?;
                let b = params.commit(&value_inv, &u_b);
                let c = params.commit(&G::ScalarField::one(), &u_c);
                let c_min_g = (c.into_group() - params.g).into_affine();
                let sub = DisjunctiveProof::prove::<_, D>(
                    rng,
                    cm,
                    cmtok,
                    &params.h,
                    &c_min_g,
                    &u_c,
                    Side::Right,
                )?;
                (b, c, sub)
            }
        };

        let t1 = (params.g * u1 + *cmtok * u2).into_affine();
        let t2 = (b * u1 + params.h * u3).into_affine();
        let mut transcript = Vec::new();
        Self::compute_challenge_contribution(params, cm, cmtok, &b, &c, &t1, &t2, &mut transcript)?;
        let challenge = hash_to_challenge::<G::ScalarField, D>(&transcript);

        let j = u1 + *value * challenge;
        let k = u2 + sk_inv * challenge;
        let l = u3 + (u_c - *value * u_b) * challenge;

        Ok(Self {
            b,
            c,
            t1,
            t2,
            challenge,
            j,
            k,
            l,
            c_token,
            disjunctive,
        })
    }

    /// Checks, in order: the disjunctive sub-proof, the recomputed challenge, then the
    /// two main equations. All four must pass.
    pub fn verify<D: Digest>(
        &self,
        params: &PedersenParams<G>,
        cm: &G,
        cmtok: &G,
    ) -> Result<(), SigmaError> {
        let c_min_g = (self.c.into_group() - params.g).into_affine();
        self.disjunctive
            .verify::<D>(cm, cmtok, &params.h, &c_min_g)
            .map_err(|_| SigmaError::SubProofInvalid)?;

        let mut transcript = Vec::new();
        Self::compute_challenge_contribution(
            params,
            cm,
            cmtok,
            &self.b,
            &self.c,
            &self.t1,
            &self.t2,
            &mut transcript,
        )?;
        if hash_to_challenge::<G::ScalarField, D>(&transcript) != self.challenge {
            return Err(SigmaError::ChallengeMismatch);
        }
        if *cm * self.challenge + self.t1 != params.g * self.j + *cmtok * self.k {
            return Err(SigmaError::EquationMismatch);
        }
        if self.c * self.challenge + self.t2 != self.b * self.j + params.h * self.l {
            return Err(SigmaError::EquationMismatch);
        }
        Ok(())
    }

    /// Transcript order: `g || h || cm || cmtok || b || c || t1 || t2`.
    pub fn compute_challenge_contribution<W: Write>(
        params: &PedersenParams<G>,
        cm: &G,
        cmtok: &G,
        b: &G,
        c: &G,
        t1: &G,
        t2: &G,
        mut writer: W,
    ) -> Result<(), SigmaError> {
        params.g.serialize_compressed(&mut writer)?;
        params.h.serialize_compressed(&mut writer)?;
        cm.serialize_compressed(&mut writer)?;
        cmtok.serialize_compressed(&mut writer)?;
        b.serialize_compressed(&mut writer)?;
        c.serialize_compressed(&mut writer)?;
        t1.serialize_compressed(&mut writer)?;
        t2.serialize_compressed(&mut writer)?;
        Ok(())
    }
}
