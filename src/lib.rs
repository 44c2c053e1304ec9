//! # Threshold BLS Signatures
//!
//! This crate implements an (m, n) threshold BLS signature scheme on
//! BLS12-381: a group of `n` participants jointly controls a signing key such
//! that any `m` of them can produce a valid signature under a single shared
//! public key, while no coalition of fewer than `m` learns the private key.
//! The joint key is never materialized anywhere during normal operation.
//!
//! ## Normal BLS Signatures
//!
//! ```rust
//! // import the instantiated scheme and the traits for signing and generating keys
//! use quorum_bls::{
//!     schemes::bls12_381::G1Scheme as SigScheme,
//!     sig::{Scheme, SignatureScheme},
//! };
//!
//! let (private, public) = SigScheme::keypair(&mut rand::thread_rng());
//! let msg = b"hello";
//! let sig = SigScheme::sign(&private, &msg[..]);
//! assert!(SigScheme::verify(&public, &msg[..], &sig));
//! ```
//!
//! ## Threshold Signatures
//!
//! First the joint keypair must be generated. Every participant runs a
//! [`Dealer`](dkg::Dealer) over its own entropy and distributes one share per
//! participant; each participant combines the shares addressed to it into its
//! signing share, and the broadcast public shares combine into the group
//! public key. Any `m` signing shares then produce partial signatures which
//! aggregate into a signature of the joint key.
//!
//! ```rust
//! use quorum_bls::{
//!     curve::group::Seed,
//!     dkg::{self, Dealer},
//!     schemes::bls12_381::{G1Curve, G1Scheme},
//!     sig::{SignatureScheme, ThresholdScheme},
//! };
//! use rand::RngCore;
//!
//! fn fresh_seeds(m: usize) -> Vec<Seed> {
//!     let mut rng = rand::thread_rng();
//!     (0..m)
//!         .map(|_| {
//!             let mut seed = [0u8; 32];
//!             rng.fill_bytes(&mut seed);
//!             seed
//!         })
//!         .collect()
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (m, n) = (2, 3);
//!
//! // Every participant deals shares from its own polynomial.
//! let dealers = (0..n)
//!     .map(|_| Dealer::<G1Curve>::new(&fresh_seeds(m), n))
//!     .collect::<Result<Vec<_>, _>>()?;
//! let dealt: Vec<_> = dealers.iter().map(|d| d.deal()).collect();
//!
//! // Participant i combines the shares addressed to it into its signing
//! // share; the public shares combine into the group public key.
//! let signing_keys = (0..n)
//!     .map(|i| {
//!         let received: Vec<_> = dealt.iter().map(|shares| shares[i].clone()).collect();
//!         dkg::combine_signing_key::<G1Curve>(&received)
//!     })
//!     .collect::<Result<Vec<_>, _>>()?;
//! let public_shares: Vec<_> = dealers.iter().map(|d| d.public_share()).collect();
//! let group_pk = dkg::combine_public_key::<G1Curve>(&public_shares)?;
//!
//! // Any m participants can sign for the group.
//! let msg = b"hello";
//! let partials: Vec<_> = signing_keys
//!     .iter()
//!     .take(m)
//!     .map(|share| G1Scheme::partial_sign(share, &msg[..]))
//!     .collect();
//! let sig = G1Scheme::aggregate(m, &partials)?;
//! assert!(G1Scheme::verify(&group_pk, &msg[..], &sig));
//! # Ok(())
//! # }
//! ```

/// Curve implementations for the traits defined in the [`group`](curve/group/index.html) module.
pub mod curve;

pub mod primitives;

/// Joint key generation: dealing shares and combining them into signing
/// shares and the group public key.
pub mod dkg;

/// BLS signature implementations. Supports plain and threshold signatures.
pub mod sig;

/// Pre-instantiated signature schemes for each curve
pub mod schemes {
    use crate::sig::G1Scheme;

    pub mod bls12_381 {
        use crate::curve::bls12381::PairingCurve;

        pub use crate::curve::bls12381::G1Curve;

        /// Public keys on G1, signatures on G2
        pub type G1Scheme = super::G1Scheme<PairingCurve>;
    }
}
