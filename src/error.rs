// TODO: At some point this should be replaced with crates anyhow and thiserror but thiserror is no_std compatible at the moment.

use ark_serialize::SerializationError;
use ark_std::fmt::Debug;

/// Error raised while creating, verifying or decoding a proof. Prove-time precondition
/// failures (`InvalidWitness`, `InvalidSidePair`, `InconsistentInput`, `EqualValues`) are
/// reported before any proof is emitted. Verify-time errors name the first check that
/// failed; any error from verification means the proof is rejected.
#[derive(Debug)]
pub enum SigmaError {
    /// The supplied secret does not satisfy the public relation being proved
    InvalidWitness,
    /// The side selector disagrees with the witness, e.g. proving "is zero" for a nonzero value
    InvalidSidePair,
    /// The public commitment does not match the supplied opening
    InconsistentInput,
    /// Inequality proof requested for two equal values
    EqualValues,
    /// Recomputed Fiat-Shamir challenge differs from the one embedded in the proof
    ChallengeMismatch,
    /// A final algebraic verification equation does not hold
    EquationMismatch,
    /// An embedded sub-proof failed verification
    SubProofInvalid,
    /// Malformed or truncated bytes given to the wire codec
    Decoding(DecodeError),
    Serialization(SerializationError),
}

/// Reason the wire codec rejected its input. Decoding never panics on malformed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended before the announced field length
    UnexpectedEnd,
    /// A length prefix exceeds the maximum allowed field size
    FieldTooLong(usize),
    /// Decoded coordinates are not a valid group element
    OffCurvePoint,
    /// Scalar sign byte was neither 0 nor 1
    BadScalarSign(u8),
    /// Bytes left over after the last field of the proof
    TrailingBytes,
}

impl From<DecodeError> for SigmaError {
    fn from(e: DecodeError) -> Self {
        Self::Decoding(e)
    }
}

impl From<SerializationError> for SigmaError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}
