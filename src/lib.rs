#![cfg_attr(not(feature = "std"), no_std)]

//! Sigma-protocol NIZKs over Pedersen commitments for confidential ledgers: a bank or
//! client publishes commitments to transaction amounts and later proves statements about
//! the hidden values without revealing them. All protocols are three-move Sigma protocols
//! made non-interactive with Fiat-Shamir; every proof carries its challenge and is
//! verified by recomputing it from the transcript.
//!
//! Protocols, in dependency order:
//! - [`schnorr`]: knowledge of `x` in `result = base * x`
//! - [`equivalence`]: two results share one discrete log under two bases
//! - [`consistency`]: a commitment and its token were built from the same randomness
//! - [`disjunctive`]: knowledge of a discrete log for one of two pairs, hiding which
//! - [`abc`]: a committed indicator is exactly the is-nonzero bit of a committed value
//! - [`inequality`]: two committed values differ, via the indicator of their difference
//!
//! [`setup`] holds the shared group context (generators `g`, `h`, holder keys) and
//! [`codec`] the canonical byte encoding of every proof. Proving consumes entropy from a
//! caller-supplied RNG and everything else is a pure function of its inputs, so all
//! operations are safe to run concurrently once the setup parameters are built.

pub mod abc;
pub mod challenge;
pub mod codec;
pub mod consistency;
pub mod disjunctive;
pub mod equivalence;
pub mod error;
pub mod hashing;
pub mod inequality;
pub mod schnorr;
pub mod setup;

pub use crate::{
    abc::AbcProof,
    codec::WireCodec,
    consistency::ConsistencyProof,
    disjunctive::{DisjunctiveProof, Side},
    equivalence::EquivalenceProof,
    error::SigmaError,
    inequality::InequalityProof,
    schnorr::SchnorrProof,
    setup::{PedersenParams, SecretKey},
};

#[cfg(test)]
#[macro_export]
macro_rules! test_serialization {
    ($obj_type:ty, $obj: ident) => {
        let mut serz = vec![];
        ark_serialize::CanonicalSerialize::serialize_compressed(&$obj, &mut serz).unwrap();
        let deserz: $obj_type =
            ark_serialize::CanonicalDeserialize::deserialize_compressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        let mut serz = vec![];
        ark_serialize::CanonicalSerialize::serialize_uncompressed(&$obj, &mut serz).unwrap();
        let deserz: $obj_type =
            ark_serialize::CanonicalDeserialize::deserialize_uncompressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);
    };
}
