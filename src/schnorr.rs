//! Schnorr protocol for proving knowledge of a discrete log, made non-interactive with
//! Fiat-Shamir. Refer <https://crypto.stanford.edu/cs355/19sp/lec5.pdf>
//!
//! Given public `base` and `result = base * x`, prove knowledge of `x`:
//! 1. Prover chooses a random `u` and computes `t = base * u`
//! 2. Challenge `c = Hash(result || t)`
//! 3. Response `s = u - c*x`
//! 4. Verifier recomputes `c` and checks `base * s + result * c == t`
//!
//! Note the subtractive response convention; the other protocols in this crate use
//! `u + c*x`. Both conventions appear with the matching verification equation and
//! neither may be changed independently of the other.

use crate::{challenge::hash_to_challenge, error::SigmaError};
use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{io::Write, rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;

/// Proof of knowledge of `x` in `result = base * x`. Self-contained: carries the base
/// and the Fiat-Shamir challenge; verification needs only `result`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct SchnorrProof<G: AffineRepr> {
    pub base: G,
    /// Commitment to the prover's randomness, `base * u`
    pub t: G,
    pub response: G::ScalarField,
    pub challenge: G::ScalarField,
}

impl<G: AffineRepr> SchnorrProof<G> {
    /// Prove knowledge of `witness` in `result = base * witness`. Fails with
    /// `InvalidWitness` if the witness does not satisfy the public statement.
    pub fn prove<R: RngCore, D: Digest>(
        rng: &mut R,
        base: &G,
        result: &G,
        witness: &G::ScalarField,
    ) -> Result<Self, SigmaError> {
        if (*base * witness).into_affine() != *result {
            return Err(SigmaError::InvalidWitness);
        }
        let u = G::ScalarField::rand(rng);
        let t = (*base * u).into_affine();
        let mut transcript = Vec::new();
        Self::compute_challenge_contribution(result, &t, &mut transcript)?;
        let challenge = hash_to_challenge::<G::ScalarField, D>(&transcript);
        let response = u - challenge * witness;
        Ok(Self {
            base: *base,
            t,
            response,
            challenge,
        })
    }

    /// `base * response + result * challenge == t`, with the challenge recomputed from
    /// the transcript first.
    pub fn verify<D: Digest>(&self, result: &G) -> Result<(), SigmaError> {
        let mut transcript = Vec::new();
        Self::compute_challenge_contribution(result, &self.t, &mut transcript)?;
        if hash_to_challenge::<G::ScalarField, D>(&transcript) != self.challenge {
            return Err(SigmaError::ChallengeMismatch);
        }
        if self.base * self.response + *result * self.challenge != self.t.into_group() {
            return Err(SigmaError::EquationMismatch);
        }
        Ok(())
    }

    /// Transcript order: `result || t`. Shared by prove and verify.
    pub fn compute_challenge_contribution<W: Write>(
        result: &G,
        t: &G,
        mut writer: W,
    ) -> Result<(), SigmaError> {
        result.serialize_compressed(&mut writer)?;
        t.serialize_compressed(writer).map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_serialization;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use blake2::Blake2b512;

    macro_rules! check_in_group {
        ($affine:ty, $proj:ty, $fr:ty, $rng:ident) => {
            let base = <$proj>::rand(&mut $rng).into_affine();
            let witness = <$fr>::rand(&mut $rng);
            let result = (base * witness).into_affine();

            let proof =
                SchnorrProof::prove::<_, Blake2b512>(&mut $rng, &base, &result, &witness).unwrap();
            proof.verify::<Blake2b512>(&result).unwrap();

            test_serialization!(SchnorrProof<$affine>, proof);
        };
    }

    #[test]
    fn completeness() {
        let mut rng = StdRng::seed_from_u64(0u64);
        check_in_group!(
            ark_secp256k1::Affine,
            ark_secp256k1::Projective,
            ark_secp256k1::Fr,
            rng
        );
        check_in_group!(
            ark_bls12_381::G1Affine,
            ark_bls12_381::G1Projective,
            ark_bls12_381::Fr,
            rng
        );
    }

    #[test]
    fn witness_must_match_statement() {
        let mut rng = StdRng::seed_from_u64(1u64);
        let base = ark_secp256k1::Projective::rand(&mut rng).into_affine();
        let witness = ark_secp256k1::Fr::rand(&mut rng);
        let result = (base * witness).into_affine();
        let wrong = witness + ark_secp256k1::Fr::from(1u64);
        assert!(matches!(
            SchnorrProof::prove::<_, Blake2b512>(&mut rng, &base, &result, &wrong),
            Err(SigmaError::InvalidWitness)
        ));
    }

    #[test]
    fn tampering_is_rejected() {
        let mut rng = StdRng::seed_from_u64(2u64);
        let base = ark_secp256k1::Projective::rand(&mut rng).into_affine();
        let witness = ark_secp256k1::Fr::rand(&mut rng);
        let result = (base * witness).into_affine();
        let proof =
            SchnorrProof::prove::<_, Blake2b512>(&mut rng, &base, &result, &witness).unwrap();

        let mut bad = proof;
        bad.response += ark_secp256k1::Fr::from(1u64);
        assert!(matches!(
            bad.verify::<Blake2b512>(&result),
            Err(SigmaError::EquationMismatch)
        ));

        let mut bad = proof;
        bad.challenge += ark_secp256k1::Fr::from(1u64);
        assert!(matches!(
            bad.verify::<Blake2b512>(&result),
            Err(SigmaError::ChallengeMismatch)
        ));

        let mut bad = proof;
        bad.t = (bad.t * ark_secp256k1::Fr::from(2u64)).into_affine();
        assert!(matches!(
            bad.verify::<Blake2b512>(&result),
            Err(SigmaError::ChallengeMismatch)
        ));

        // a proof for one statement must not verify against another
        let other = (base * ark_secp256k1::Fr::rand(&mut rng)).into_affine();
        assert!(proof.verify::<Blake2b512>(&other).is_err());
    }
}
