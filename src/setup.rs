//! Group setup and Pedersen commitments.
//!
//! [`PedersenParams`] is the immutable context shared by every protocol: the curve group,
//! its scalar order and two independent generators `g` and `h`. Both generators are derived
//! by hashing domain-separated labels to the curve, so no discrete-log relation between
//! them is known to anyone — a known relation would let a prover open a commitment to more
//! than one value. Construct the parameters once at startup and share them by reference;
//! nothing in this crate mutates them.
//!
//! A Pedersen commitment to `value` with opening `randomness` is `g * value + h * randomness`.
//! A holder keypair is `(sk, pk = h * sk)`; the commitment token `pk * randomness` binds a
//! commitment's randomness to that keypair so the keyholder can later prove statements about
//! the randomness without revealing it.

use crate::hashing::affine_group_elem_from_try_and_incr;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::RngCore, vec::Vec, UniformRand};
use digest::Digest;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret key of a commitment holder. The corresponding public key is `h * sk`.
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Zeroize, ZeroizeOnDrop,
)]
pub struct SecretKey<F: PrimeField>(pub F);

/// A Pedersen commitment key `(g, h)` plus the group it lives in. The commitment to
/// `value` with randomness `r` is `g * value + h * r`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct PedersenParams<G: AffineRepr> {
    pub g: G,
    pub h: G,
}

impl<G: AffineRepr> PedersenParams<G> {
    /// Derive both generators from a label by try-and-increment hashing. The two labels
    /// are domain-separated so `g` and `h` have no known mutual discrete log.
    pub fn new<D: Digest>(label: &[u8]) -> Self {
        let g = affine_group_elem_from_try_and_incr::<G, D>(&Self::labeled(label, b" : G"));
        let h = affine_group_elem_from_try_and_incr::<G, D>(&Self::labeled(label, b" : H"));
        Self { g, h }
    }

    /// Commit to a value with the given randomness.
    pub fn commit(&self, value: &G::ScalarField, randomness: &G::ScalarField) -> G {
        (self.g * value + self.h * randomness).into_affine()
    }

    /// Commit to a value with randomness sampled uniformly from the caller's CSPRNG.
    /// Returns the commitment and its opening randomness.
    pub fn commit_with_rng<R: RngCore>(
        &self,
        rng: &mut R,
        value: &G::ScalarField,
    ) -> (G, G::ScalarField) {
        let randomness = G::ScalarField::rand(rng);
        (self.commit(value, &randomness), randomness)
    }

    /// Commit to a value and bind the commitment's randomness to the holder's public key.
    /// Returns the commitment, the commitment token `pk * randomness` and the randomness.
    pub fn commit_with_token<R: RngCore>(
        &self,
        rng: &mut R,
        value: &G::ScalarField,
        pk: &G,
    ) -> (G, G, G::ScalarField) {
        let (cm, randomness) = self.commit_with_rng(rng, value);
        let cmtok = (*pk * randomness).into_affine();
        (cm, cmtok, randomness)
    }

    /// Check an opening: re-derive the commitment from `(value, randomness)` and compare.
    pub fn open(&self, value: &G::ScalarField, randomness: &G::ScalarField, cm: &G) -> bool {
        self.commit(value, randomness) == *cm
    }

    /// Generate a holder keypair `(sk, pk = h * sk)`.
    pub fn keygen<R: RngCore>(&self, rng: &mut R) -> (SecretKey<G::ScalarField>, G) {
        let mut sk = G::ScalarField::rand(rng);
        while sk.is_zero() {
            sk = G::ScalarField::rand(rng);
        }
        let pk = (self.h * sk).into_affine();
        (SecretKey(sk), pk)
    }

    fn labeled(label: &[u8], suffix: &[u8]) -> Vec<u8> {
        let mut seed = Vec::with_capacity(label.len() + suffix.len());
        seed.extend_from_slice(label);
        seed.extend_from_slice(suffix);
        seed
    }
}
