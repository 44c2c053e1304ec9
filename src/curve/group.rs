//! Traits describing the algebraic contract the signing code relies on: a
//! prime-order scalar field, the curve groups it acts on, and the pairing
//! between them. Concrete curves implement these traits in sibling modules.

use crate::curve::CurveError;
use rand_core::{CryptoRng, RngCore};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// A 32-byte entropy value, consumed once when deriving a scalar.
pub type Seed = [u8; 32];

/// An element of a group with a right-hand-side multiplier: scalars multiply
/// by scalars, curve points multiply by scalars of their group.
pub trait Element: Clone + Debug + Eq {
    /// The type this element is multiplied by.
    type RHS;

    /// Returns the additive identity.
    fn new() -> Self;

    /// Returns the multiplicative identity for scalars, or the group
    /// generator for curve points.
    fn one() -> Self;

    /// `self = self + s2`
    fn add(&mut self, s2: &Self);

    /// `self = self * mul`
    fn mul(&mut self, mul: &Self::RHS);

    /// Samples a uniformly distributed element.
    fn rand<R: CryptoRng + RngCore>(rng: &mut R) -> Self;
}

/// A scalar of the prime field, usable as a private key or polynomial
/// coefficient.
pub trait Scalar: Element<RHS = Self> {
    /// Sets this scalar to the field representative of `i`.
    fn set_int(&mut self, i: u64);

    /// Derives a scalar deterministically from raw entropy through a
    /// domain-separated KDF. Same seed, same scalar.
    fn derive(seed: &Seed) -> Self;

    /// `self = self - other`
    fn sub(&mut self, other: &Self);

    /// Returns the multiplicative inverse, or `None` for the zero scalar.
    fn inverse(&self) -> Option<Self>;

    fn is_zero(&self) -> bool;
}

/// A curve point that messages can be hashed onto. Only the group signatures
/// live in needs this; the public-key group gets by with [`Element`].
pub trait Point: Element
where
    Self::RHS: Scalar,
{
    /// Sets this point to the domain-separated hash of `data`.
    fn map(&mut self, data: &[u8]);
}

/// Fixed-width binary encoding of a group element: big-endian integers for
/// scalars, standard point compression for curve points.
pub trait Encodable: Sized {
    /// Number of bytes [`Encodable::marshal`] produces.
    fn marshal_len() -> usize;

    fn marshal(&self) -> Vec<u8>;

    /// Decodes `data` into `self`. Fails on any input that is not exactly
    /// [`Encodable::marshal_len`] bytes encoding a valid element.
    fn unmarshal(&mut self, data: &[u8]) -> Result<(), CurveError>;
}

/// A scalar field together with one curve group it acts on. Key shares are
/// scalars; public-key shares are points.
pub trait Group: Clone + Debug {
    type Scalar: Scalar + Encodable + Serialize + DeserializeOwned;
    type Point: Element<RHS = Self::Scalar> + Encodable + Serialize + DeserializeOwned;
}

/// A pairing-friendly curve: two groups over a common scalar field and a
/// bilinear map into a target group.
pub trait PairingCurve: Debug {
    type Scalar: Scalar + Encodable + Serialize + DeserializeOwned;
    type G1: Element<RHS = Self::Scalar> + Encodable + Serialize + DeserializeOwned;
    type G2: Point<RHS = Self::Scalar> + Encodable + Serialize + DeserializeOwned;
    type GT: Debug + Eq;

    /// Computes the pairing of a G1 and a G2 point.
    fn pair(p: &Self::G1, q: &Self::G2) -> Self::GT;
}
