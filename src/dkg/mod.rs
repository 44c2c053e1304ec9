//! Joint generation of an (m, n) threshold key. Every participant runs a
//! [`Dealer`] over its own entropy and hands one share to each index; each
//! participant then sums the shares addressed to it into its signing share,
//! and everyone sums the broadcast public shares into the group public key.
//! No single party ever holds the joint polynomial or the joint private key.

#[allow(clippy::module_inception)]
mod dkg;
pub use dkg::{combine_public_key, combine_signing_key, Dealer};

pub mod errors;
pub use errors::DkgError;
