/// Wrappers around the BLS12-381 curve from the [blstrs](https://docs.rs/blstrs) crate
pub mod bls12381;

/// Definitions of the generic traits for prime-field scalars and curve points
/// that the signing and key-generation code is written against.
pub mod group;

use thiserror::Error;

/// Error raised when a fixed-width encoding does not decode to a curve element.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("not a valid encoding of a {0}")]
    MalformedEncoding(&'static str),
}
