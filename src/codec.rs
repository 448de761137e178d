//! Canonical byte encoding for every proof type, the format commitments and proofs are
//! stored and exchanged in.
//!
//! Every field is length-prefixed: a 4-byte big-endian length followed by that many bytes.
//! A point is two such fields, the big-endian magnitudes of its affine X and Y coordinates
//! with leading zeros trimmed; the additive identity encodes both as empty. A scalar is a
//! single field whose content is one sign byte (`0x00` non-negative, `0x01` negative)
//! followed by the big-endian magnitude. Fields appear in the order the proof structs
//! declare them; the indicator proof embeds its disjunctive sub-proof as one
//! length-prefixed blob.
//!
//! Decoding is strict: length prefixes are capped at [`MAX_FIELD_LEN`], coordinates that
//! do not land on the curve (or in the prime-order subgroup) are rejected, and bytes left
//! over after the last field are an error. Malformed input is reported as a
//! [`DecodeError`](crate::error::DecodeError), never a panic.
//!
//! Coordinate access needs a prime base field, so the codec is implemented for short
//! Weierstrass curves; the proof protocols themselves stay generic over `AffineRepr`.

use crate::{
    abc::AbcProof,
    consistency::ConsistencyProof,
    disjunctive::DisjunctiveProof,
    equivalence::EquivalenceProof,
    error::{DecodeError, SigmaError},
    inequality::InequalityProof,
    schnorr::SchnorrProof,
};
use ark_ec::{
    short_weierstrass::{Affine, SWCurveConfig},
    AffineRepr,
};
use ark_ff::{BigInteger, PrimeField};
use ark_std::{vec, vec::Vec};

/// Upper bound on any single length prefix, including the embedded sub-proof blob.
pub const MAX_FIELD_LEN: usize = 100_000;

/// Byte encoding and strict decoding for a proof type. `from_wire_bytes(p.to_wire_bytes())`
/// reproduces `p` exactly, so re-encoding is byte-identical.
pub trait WireCodec: Sized {
    fn encode_into(&self, out: &mut Vec<u8>);

    fn decode_from(input: &mut &[u8]) -> Result<Self, SigmaError>;

    fn to_wire_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    fn from_wire_bytes(mut bytes: &[u8]) -> Result<Self, SigmaError> {
        let decoded = Self::decode_from(&mut bytes)?;
        if !bytes.is_empty() {
            return Err(DecodeError::TrailingBytes.into());
        }
        Ok(decoded)
    }
}

fn write_len_prefixed(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    out.extend_from_slice(bytes);
}

fn read_len_prefixed<'a>(input: &mut &'a [u8]) -> Result<&'a [u8], SigmaError> {
    if input.len() < 4 {
        return Err(DecodeError::UnexpectedEnd.into());
    }
    let (prefix, rest) = input.split_at(4);
    let len = u32::from_be_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;
    if len > MAX_FIELD_LEN {
        return Err(DecodeError::FieldTooLong(len).into());
    }
    if rest.len() < len {
        return Err(DecodeError::UnexpectedEnd.into());
    }
    let (field, rest) = rest.split_at(len);
    *input = rest;
    Ok(field)
}

/// Big-endian magnitude with leading zeros trimmed; zero encodes as empty.
fn magnitude_bytes<F: PrimeField>(f: &F) -> Vec<u8> {
    let bytes = f.into_bigint().to_bytes_be();
    let first_nonzero = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[first_nonzero..].to_vec()
}

fn write_scalar<F: PrimeField>(out: &mut Vec<u8>, s: &F) {
    // scalars live in [0, N) so the sign byte is always 0 on encode
    let mut content = vec![0u8];
    content.extend_from_slice(&magnitude_bytes(s));
    write_len_prefixed(out, &content);
}

fn read_scalar<F: PrimeField>(input: &mut &[u8]) -> Result<F, SigmaError> {
    let content = read_len_prefixed(input)?;
    let (sign, magnitude) = content
        .split_first()
        .ok_or(DecodeError::UnexpectedEnd)?;
    let value = F::from_be_bytes_mod_order(magnitude);
    match sign {
        0 => Ok(value),
        1 => Ok(-value),
        other => Err(DecodeError::BadScalarSign(*other).into()),
    }
}

fn write_point<P: SWCurveConfig>(out: &mut Vec<u8>, p: &Affine<P>)
where
    P::BaseField: PrimeField,
{
    if p.infinity {
        write_len_prefixed(out, &[]);
        write_len_prefixed(out, &[]);
    } else {
        write_len_prefixed(out, &magnitude_bytes(&p.x));
        write_len_prefixed(out, &magnitude_bytes(&p.y));
    }
}

fn read_point<P: SWCurveConfig>(input: &mut &[u8]) -> Result<Affine<P>, SigmaError>
where
    P::BaseField: PrimeField,
{
    let x = read_len_prefixed(input)?;
    let y = read_len_prefixed(input)?;
    if x.is_empty() && y.is_empty() {
        return Ok(Affine::zero());
    }
    let point = Affine::new_unchecked(
        P::BaseField::from_be_bytes_mod_order(x),
        P::BaseField::from_be_bytes_mod_order(y),
    );
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(DecodeError::OffCurvePoint.into());
    }
    Ok(point)
}

impl<P: SWCurveConfig> WireCodec for SchnorrProof<Affine<P>>
where
    P::BaseField: PrimeField,
{
    fn encode_into(&self, out: &mut Vec<u8>) {
        write_point(out, &self.base);
        write_point(out, &self.t);
        write_scalar(out, &self.response);
        write_scalar(out, &self.challenge);
    }

    fn decode_from(input: &mut &[u8]) -> Result<Self, SigmaError> {
        Ok(Self {
            base: read_point(input)?,
            t: read_point(input)?,
            response: read_scalar(input)?,
            challenge: read_scalar(input)?,
        })
    }
}

impl<P: SWCurveConfig> WireCodec for EquivalenceProof<Affine<P>>
where
    P::BaseField: PrimeField,
{
    fn encode_into(&self, out: &mut Vec<u8>) {
        write_point(out, &self.t1);
        write_point(out, &self.t2);
        write_scalar(out, &self.challenge);
        write_scalar(out, &self.response);
    }

    fn decode_from(input: &mut &[u8]) -> Result<Self, SigmaError> {
        Ok(Self {
            t1: read_point(input)?,
            t2: read_point(input)?,
            challenge: read_scalar(input)?,
            response: read_scalar(input)?,
        })
    }
}

impl<P: SWCurveConfig> WireCodec for ConsistencyProof<Affine<P>>
where
    P::BaseField: PrimeField,
{
    fn encode_into(&self, out: &mut Vec<u8>) {
        write_point(out, &self.t1);
        write_point(out, &self.t2);
        write_scalar(out, &self.challenge);
        write_scalar(out, &self.s1);
        write_scalar(out, &self.s2);
    }

    fn decode_from(input: &mut &[u8]) -> Result<Self, SigmaError> {
        Ok(Self {
            t1: read_point(input)?,
            t2: read_point(input)?,
            challenge: read_scalar(input)?,
            s1: read_scalar(input)?,
            s2: read_scalar(input)?,
        })
    }
}

impl<P: SWCurveConfig> WireCodec for DisjunctiveProof<Affine<P>>
where
    P::BaseField: PrimeField,
{
    fn encode_into(&self, out: &mut Vec<u8>) {
        write_point(out, &self.t1);
        write_point(out, &self.t2);
        write_scalar(out, &self.challenge);
        write_scalar(out, &self.c1);
        write_scalar(out, &self.c2);
        write_scalar(out, &self.s1);
        write_scalar(out, &self.s2);
    }

    fn decode_from(input: &mut &[u8]) -> Result<Self, SigmaError> {
        Ok(Self {
            t1: read_point(input)?,
            t2: read_point(input)?,
            challenge: read_scalar(input)?,
            c1: read_scalar(input)?,
            c2: read_scalar(input)?,
            s1: read_scalar(input)?,
            s2: read_scalar(input)?,
        })
    }
}

impl<P: SWCurveConfig> WireCodec for AbcProof<Affine<P>>
where
    P::BaseField: PrimeField,
{
    fn encode_into(&self, out: &mut Vec<u8>) {
        write_point(out, &self.b);
        write_point(out, &self.c);
        write_point(out, &self.t1);
        write_point(out, &self.t2);
        write_scalar(out, &self.challenge);
        write_scalar(out, &self.j);
        write_scalar(out, &self.k);
        write_scalar(out, &self.l);
        write_point(out, &self.c_token);
        write_len_prefixed(out, &self.disjunctive.to_wire_bytes());
    }

    fn decode_from(input: &mut &[u8]) -> Result<Self, SigmaError> {
        let b = read_point(input)?;
        let c = read_point(input)?;
        let t1 = read_point(input)?;
        let t2 = read_point(input)?;
        let challenge = read_scalar(input)?;
        let j = read_scalar(input)?;
        let k = read_scalar(input)?;
        let l = read_scalar(input)?;
        let c_token = read_point(input)?;
        let blob = read_len_prefixed(input)?;
        let disjunctive = DisjunctiveProof::from_wire_bytes(blob)?;
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
}

impl<P: SWCurveConfig> WireCodec for InequalityProof<Affine<P>>
where
    P::BaseField: PrimeField,
{
    fn encode_into(&self, out: &mut Vec<u8>) {
        self.0.encode_into(out)
    }

    fn decode_from(input: &mut &[u8]) -> Result<Self, SigmaError> {
        Ok(Self(AbcProof::decode_from(input)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        disjunctive::Side,
        setup::PedersenParams,
    };
    use ark_ec::CurveGroup;
    use ark_ff::{One, Zero};
    use ark_secp256k1::{Affine as SecpAffine, Fr, Projective};
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };
    use blake2::Blake2b512;

    fn round_trip<T: WireCodec + PartialEq + core::fmt::Debug>(proof: &T) -> T {
        let bytes = proof.to_wire_bytes();
        let decoded = T::from_wire_bytes(&bytes).unwrap();
        assert_eq!(&decoded, proof);
        assert_eq!(decoded.to_wire_bytes(), bytes);
        decoded
    }

    #[test]
    fn point_and_scalar_round_trip() {
        let mut rng = StdRng::seed_from_u64(0u64);

        let p = Projective::rand(&mut rng).into_affine();
        let mut out = Vec::new();
        write_point(&mut out, &p);
        let mut input = &out[..];
        assert_eq!(read_point::<ark_secp256k1::Config>(&mut input).unwrap(), p);
        assert!(input.is_empty());

        // the identity encodes as two empty fields
        let mut out = Vec::new();
        write_point(&mut out, &SecpAffine::zero());
        assert_eq!(out, [0u8; 8]);
        let mut input = &out[..];
        assert!(read_point::<ark_secp256k1::Config>(&mut input)
            .unwrap()
            .is_zero());

        for s in [Fr::zero(), Fr::one(), Fr::rand(&mut rng), -Fr::one()] {
            let mut out = Vec::new();
            write_scalar(&mut out, &s);
            let mut input = &out[..];
            assert_eq!(read_scalar::<Fr>(&mut input).unwrap(), s);
        }

        // a negative sign byte negates the magnitude
        let mut out = Vec::new();
        write_scalar(&mut out, &Fr::one());
        out[4] = 1;
        let mut input = &out[..];
        assert_eq!(read_scalar::<Fr>(&mut input).unwrap(), -Fr::one());
    }

    #[test]
    fn proof_round_trips_verify_and_reencode_identically() {
        let mut rng = StdRng::seed_from_u64(1u64);
        let params = PedersenParams::<SecpAffine>::new::<Blake2b512>(b"test");
        let (sk, pk) = params.keygen(&mut rng);

        let base = Projective::rand(&mut rng).into_affine();
        let x = Fr::rand(&mut rng);
        let result = (base * x).into_affine();
        let schnorr =
            crate::schnorr::SchnorrProof::prove::<_, Blake2b512>(&mut rng, &base, &result, &x)
                .unwrap();
        round_trip(&schnorr).verify::<Blake2b512>(&result).unwrap();

        let base2 = Projective::rand(&mut rng).into_affine();
        let result2 = (base2 * x).into_affine();
        let equivalence = crate::equivalence::EquivalenceProof::prove::<_, Blake2b512>(
            &mut rng, &base, &result, &base2, &result2, &x,
        )
        .unwrap();
        round_trip(&equivalence)
            .verify::<Blake2b512>(&base, &result, &base2, &result2)
            .unwrap();

        let value = Fr::from(5u64);
        let (cm, cmtok, randomness) = params.commit_with_token(&mut rng, &value, &pk);
        let consistency = crate::consistency::ConsistencyProof::prove::<_, Blake2b512>(
            &mut rng,
            &params,
            &cm,
            &cmtok,
            &pk,
            &value,
            &randomness,
        )
        .unwrap();
        round_trip(&consistency)
            .verify::<Blake2b512>(&params, &cm, &cmtok, &pk)
            .unwrap();

        let other_result = (base2 * Fr::rand(&mut rng)).into_affine();
        let disjunctive = DisjunctiveProof::prove::<_, Blake2b512>(
            &mut rng,
            &base,
            &result,
            &base2,
            &other_result,
            &x,
            Side::Left,
        )
        .unwrap();
        round_trip(&disjunctive);

        let abc = AbcProof::prove::<_, Blake2b512>(
            &mut rng,
            &params,
            &cm,
            &cmtok,
            &value,
            &sk,
            Side::Right,
        )
        .unwrap();
        round_trip(&abc)
            .verify::<Blake2b512>(&params, &cm, &cmtok)
            .unwrap();

        let value_b = Fr::from(11u64);
        let (cm_b, cmtok_b, _) = params.commit_with_token(&mut rng, &value_b, &pk);
        let inequality = InequalityProof::prove::<_, Blake2b512>(
            &mut rng, &params, &value, &value_b, &cm, &cm_b, &cmtok, &cmtok_b, &sk,
        )
        .unwrap();
        round_trip(&inequality)
            .verify::<Blake2b512>(&params, &cm, &cm_b, &cmtok, &cmtok_b)
            .unwrap();
    }

    #[test]
    fn malformed_input_is_rejected() {
        let mut rng = StdRng::seed_from_u64(2u64);
        let base = Projective::rand(&mut rng).into_affine();
        let x = Fr::rand(&mut rng);
        let result = (base * x).into_affine();
        let proof =
            crate::schnorr::SchnorrProof::prove::<_, Blake2b512>(&mut rng, &base, &result, &x)
                .unwrap();
        let bytes = proof.to_wire_bytes();

        // truncations at every boundary
        for cut in 0..bytes.len() {
            assert!(matches!(
                crate::schnorr::SchnorrProof::<SecpAffine>::from_wire_bytes(&bytes[..cut]),
                Err(SigmaError::Decoding(_))
            ));
        }

        // trailing garbage
        let mut padded = bytes.clone();
        padded.push(0);
        assert!(matches!(
            crate::schnorr::SchnorrProof::<SecpAffine>::from_wire_bytes(&padded),
            Err(SigmaError::Decoding(DecodeError::TrailingBytes))
        ));

        // oversized length prefix
        let mut oversized = bytes.clone();
        oversized[..4].copy_from_slice(&(MAX_FIELD_LEN as u32 + 1).to_be_bytes());
        assert!(matches!(
            crate::schnorr::SchnorrProof::<SecpAffine>::from_wire_bytes(&oversized),
            Err(SigmaError::Decoding(DecodeError::FieldTooLong(_)))
        ));

        // coordinates off the curve
        let mut off_curve = Vec::new();
        write_len_prefixed(&mut off_curve, &[1]);
        write_len_prefixed(&mut off_curve, &[1]);
        let mut input = &off_curve[..];
        assert!(matches!(
            read_point::<ark_secp256k1::Config>(&mut input),
            Err(SigmaError::Decoding(DecodeError::OffCurvePoint))
        ));

        // bad scalar sign byte
        let mut bad_sign = Vec::new();
        write_scalar(&mut bad_sign, &x);
        bad_sign[4] = 2;
        let mut input = &bad_sign[..];
        assert!(matches!(
            read_scalar::<Fr>(&mut input),
            Err(SigmaError::Decoding(DecodeError::BadScalarSign(2)))
        ));
    }
}
