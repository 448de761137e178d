//! Hashing to group elements, used for deriving setup generators.

use ark_ec::AffineRepr;
use ark_std::vec::Vec;
use digest::Digest;

/// Hash bytes to a point on the curve using try-and-increment. This is vulnerable to
/// timing attack and is only used when the input is public anyway, like when generating
/// setup parameters.
pub fn affine_group_elem_from_try_and_incr<G: AffineRepr, D: Digest>(bytes: &[u8]) -> G {
    let mut hash = D::digest(bytes);
    let mut g = G::from_random_bytes(&hash);
    let mut j = 1u64;
    while g.is_none() {
        let mut seed = Vec::with_capacity(bytes.len() + 17);
        seed.extend_from_slice(bytes);
        seed.extend_from_slice(b"-attempt-");
        seed.extend_from_slice(&j.to_be_bytes());
        hash = D::digest(&seed);
        g = G::from_random_bytes(&hash);
        j += 1;
    }
    g.unwrap().clear_cofactor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_secp256k1::Affine;
    use blake2::Blake2b512;

    #[test]
    fn domain_separated_elems_differ() {
        let g = affine_group_elem_from_try_and_incr::<Affine, Blake2b512>(b"test : G");
        let h = affine_group_elem_from_try_and_incr::<Affine, Blake2b512>(b"test : H");
        assert!(!g.is_zero());
        assert!(!h.is_zero());
        assert_ne!(g, h);

        let g1 = affine_group_elem_from_try_and_incr::<Affine, Blake2b512>(b"test : G");
        assert_eq!(g, g1);
    }
}
