//! BLS12-381 instantiation on top of [blstrs](https://docs.rs/blstrs), with
//! public keys on G1 (48-byte compressed) and signatures on G2 (96-byte
//! compressed). Scalars encode as 32-byte big-endian integers below the group
//! order.

use crate::curve::{
    group::{Element, Encodable, PairingCurve as PC, Point as Pt, Scalar as Sc, Seed},
    CurveError,
};
use blstrs::{G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar as Fr};
use ff::Field;
use group::{Curve as _, Group as _};
use hkdf::Hkdf;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore, SeedableRng};
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use sha2::Sha256;
use std::fmt;

/// Ciphersuite tag for hashing messages onto G2. Signing and verification
/// must use the same tag or no signature will validate.
pub const DST_G2: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Salt for the seed-to-scalar KDF, shared with the KeyGen procedure of the
/// BLS signature draft.
const KEYGEN_SALT: &[u8] = b"BLS-SIG-KEYGEN-SALT-";

const DERIVE_INFO: &[u8] = b"quorum-bls-scalar";

/// A scalar of the BLS12-381 prime field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar(Fr);

/// A point on the G1 group, where public keys live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1(G1Projective);

/// A point on the G2 group, where signatures live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2(G2Projective);

/// An element of the pairing's target group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GT(Gt);

impl Element for Scalar {
    type RHS = Scalar;

    fn new() -> Self {
        Scalar(Fr::ZERO)
    }

    fn one() -> Self {
        Scalar(Fr::ONE)
    }

    fn add(&mut self, s2: &Self) {
        self.0 += s2.0;
    }

    fn mul(&mut self, mul: &Self) {
        self.0 *= mul.0;
    }

    fn rand<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Scalar(Fr::random(rng))
    }
}

impl Sc for Scalar {
    fn set_int(&mut self, i: u64) {
        self.0 = Fr::from(i);
    }

    fn derive(seed: &Seed) -> Self {
        let hk = Hkdf::<Sha256>::new(Some(KEYGEN_SALT), seed);
        let mut okm = [0u8; 32];
        hk.expand(DERIVE_INFO, &mut okm)
            .expect("32 bytes is a valid output length for HKDF-SHA256");
        Scalar(Fr::random(ChaCha20Rng::from_seed(okm)))
    }

    fn sub(&mut self, other: &Self) {
        self.0 -= other.0;
    }

    fn inverse(&self) -> Option<Self> {
        Option::from(self.0.invert()).map(Scalar)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero().into()
    }
}

impl Encodable for Scalar {
    fn marshal_len() -> usize {
        32
    }

    fn marshal(&self) -> Vec<u8> {
        self.0.to_bytes_be().to_vec()
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), CurveError> {
        let bytes: &[u8; 32] = data
            .try_into()
            .map_err(|_| CurveError::MalformedEncoding("scalar"))?;
        self.0 = Option::from(Fr::from_bytes_be(bytes))
            .ok_or(CurveError::MalformedEncoding("scalar"))?;
        Ok(())
    }
}

impl Element for G1 {
    type RHS = Scalar;

    fn new() -> Self {
        G1(G1Projective::identity())
    }

    fn one() -> Self {
        G1(G1Projective::generator())
    }

    fn add(&mut self, s2: &Self) {
        self.0 += s2.0;
    }

    fn mul(&mut self, mul: &Scalar) {
        self.0 *= mul.0;
    }

    fn rand<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        G1(G1Projective::random(rng))
    }
}

impl Encodable for G1 {
    fn marshal_len() -> usize {
        48
    }

    fn marshal(&self) -> Vec<u8> {
        self.0.to_affine().to_compressed().to_vec()
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), CurveError> {
        let bytes: &[u8; 48] = data
            .try_into()
            .map_err(|_| CurveError::MalformedEncoding("G1 point"))?;
        let affine: G1Affine = Option::from(G1Affine::from_compressed(bytes))
            .ok_or(CurveError::MalformedEncoding("G1 point"))?;
        self.0 = affine.into();
        Ok(())
    }
}

impl Element for G2 {
    type RHS = Scalar;

    fn new() -> Self {
        G2(G2Projective::identity())
    }

    fn one() -> Self {
        G2(G2Projective::generator())
    }

    fn add(&mut self, s2: &Self) {
        self.0 += s2.0;
    }

    fn mul(&mut self, mul: &Scalar) {
        self.0 *= mul.0;
    }

    fn rand<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        G2(G2Projective::random(rng))
    }
}

impl Pt for G2 {
    fn map(&mut self, data: &[u8]) {
        self.0 = G2Projective::hash_to_curve(data, DST_G2, &[]);
    }
}

impl Encodable for G2 {
    fn marshal_len() -> usize {
        96
    }

    fn marshal(&self) -> Vec<u8> {
        self.0.to_affine().to_compressed().to_vec()
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), CurveError> {
        let bytes: &[u8; 96] = data
            .try_into()
            .map_err(|_| CurveError::MalformedEncoding("G2 point"))?;
        let affine: G2Affine = Option::from(G2Affine::from_compressed(bytes))
            .ok_or(CurveError::MalformedEncoding("G2 point"))?;
        self.0 = affine.into();
        Ok(())
    }
}

macro_rules! serde_impl {
    ($type:ident, $name:expr) => {
        impl Serialize for $type {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_bytes(&self.marshal())
            }
        }

        impl<'de> Deserialize<'de> for $type {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct BytesVisitor;

                impl<'de> Visitor<'de> for BytesVisitor {
                    type Value = $type;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(f, "{} bytes encoding a {}", $type::marshal_len(), $name)
                    }

                    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                        let mut out = $type::new();
                        out.unmarshal(v).map_err(de::Error::custom)?;
                        Ok(out)
                    }

                    fn visit_seq<A: de::SeqAccess<'de>>(
                        self,
                        mut seq: A,
                    ) -> Result<Self::Value, A::Error> {
                        let mut buf = Vec::with_capacity($type::marshal_len());
                        while let Some(byte) = seq.next_element::<u8>()? {
                            buf.push(byte);
                        }
                        self.visit_bytes(buf.as_slice())
                    }
                }

                deserializer.deserialize_bytes(BytesVisitor)
            }
        }
    };
}

serde_impl!(Scalar, "scalar");
serde_impl!(G1, "G1 point");
serde_impl!(G2, "G2 point");

/// The scalar field together with G1, the group key material lives in.
#[derive(Clone, Debug)]
pub struct G1Curve;

impl crate::curve::group::Group for G1Curve {
    type Scalar = Scalar;
    type Point = G1;
}

/// The BLS12-381 pairing.
#[derive(Clone, Debug)]
pub struct PairingCurve;

impl PC for PairingCurve {
    type Scalar = Scalar;
    type G1 = G1;
    type G2 = G2;
    type GT = GT;

    fn pair(p: &Self::G1, q: &Self::G2) -> Self::GT {
        GT(blstrs::pairing(&p.0.to_affine(), &q.0.to_affine()))
    }
}
