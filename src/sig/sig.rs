//! Traits for working with signatures and threshold signatures.
pub use super::tbls::Share; // import and re-export it for easier access
use crate::{
    curve::group::{Element, Encodable, Point, Scalar},
    primitives::poly::IndexedValue,
};
use rand_core::{CryptoRng, RngCore};
use serde::{de::DeserializeOwned, Serialize};
use std::{error::Error, fmt::Debug};

/// The `Scheme` trait contains the basic information of the groups over
/// which the signing operations take place and a way to create a valid key
/// pair.
pub trait Scheme: Debug {
    /// `Private` represents the field over which private keys are represented.
    type Private: Scalar;
    /// `Public` represents the group over which the public keys are
    /// represented.
    type Public: Element<RHS = Self::Private> + Encodable + Serialize + DeserializeOwned;
    /// `Signature` represents the group over which the signatures are
    /// represented.
    type Signature: Point<RHS = Self::Private> + Encodable + Serialize + DeserializeOwned;

    /// Returns a new fresh keypair usable by the scheme.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> (Self::Private, Self::Public) {
        let private = Self::Private::rand(rng);
        let mut public = Self::Public::one();
        public.mul(&private);
        (private, public)
    }
}

/// SignatureScheme is the trait that defines the operations of a signature
/// scheme, namely `sign` and `verify`.
///
/// ```
///  # {
///  use rand::prelude::*;
///  use quorum_bls::sig::{SignatureScheme, Scheme, G1Scheme};
///  use quorum_bls::curve::bls12381::PairingCurve as PC;
///
///  let msg = vec![1, 9, 6, 9];
///  let (private, public) = G1Scheme::<PC>::keypair(&mut thread_rng());
///  let signature = G1Scheme::<PC>::sign(&private, &msg);
///  assert!(G1Scheme::<PC>::verify(&public, &msg, &signature));
/// # }
/// ```
pub trait SignatureScheme: Scheme {
    /// Signs the message with the provided private key. Deterministic given
    /// the same key and message; cannot fail.
    fn sign(private: &Self::Private, msg: &[u8]) -> Self::Signature;

    /// Verifies that the signature on the provided message was produced by
    /// the public key.
    fn verify(public: &Self::Public, msg: &[u8], sig: &Self::Signature) -> bool;

    /// Verifies over the fixed-width encodings of the public key and the
    /// signature. A malformed encoding is a verification failure like any
    /// other, not a distinguishable error.
    fn verify_encoded(public: &[u8], msg: &[u8], sig: &[u8]) -> bool {
        let mut pk = Self::Public::new();
        if pk.unmarshal(public).is_err() {
            return false;
        }
        let mut signature = Self::Signature::new();
        if signature.unmarshal(sig).is_err() {
            return false;
        }
        Self::verify(&pk, msg, &signature)
    }
}

/// A signature over a share of the joint key, tagged with the signer's index.
pub type PartialSignature<S> = IndexedValue<S>;

/// ThresholdScheme is a threshold-based `m-n` signature scheme. The security
/// of such a scheme means at least `m` participants are required to produce a
/// "partial signature" to then produce a regular signature.
pub trait ThresholdScheme: Scheme {
    /// Error produced when aggregating partial signatures.
    type Error: Error;

    /// Partially signs a message with a share of the private key.
    fn partial_sign(
        private: &Share<Self::Private>,
        msg: &[u8],
    ) -> PartialSignature<Self::Signature>;

    /// Aggregates partial signatures into the signature of the joint key.
    /// Note that this method does not verify the partial signatures; it only
    /// combines them.
    fn aggregate(
        threshold: usize,
        partials: &[PartialSignature<Self::Signature>],
    ) -> Result<Self::Signature, Self::Error>;
}
