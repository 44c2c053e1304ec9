mod bls;
pub use bls::G1Scheme;

mod tbls;
pub use tbls::{test_utils, Share, ThresholdError};

#[allow(clippy::module_inception)]
mod sig;
pub use sig::*;
