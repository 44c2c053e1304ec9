use crate::primitives::poly::{Idx, PolyError};
use thiserror::Error;

/// Errors raised while dealing or combining key shares.
#[derive(Debug, Error)]
pub enum DkgError {
    /// The dealer's polynomial could not be built.
    #[error(transparent)]
    Poly(#[from] PolyError),

    /// Fewer shares were supplied than the operation's minimum.
    #[error("not enough shares: {0}/{1}")]
    InsufficientShares(usize, usize),

    /// A share addressed to a different participant slipped into the batch.
    #[error("expected a share for index {0}, got one for index {1}")]
    MismatchedIndex(Idx, Idx),
}
