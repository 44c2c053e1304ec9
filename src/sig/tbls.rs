//! Threshold signatures for any type which implements `SignatureScheme`:
//! each holder of a key share signs on its own, and any `threshold` of the
//! resulting partial signatures combine, by Lagrange interpolation in the
//! exponent, into the signature of the joint key. The joint key itself is
//! never reconstructed.

use crate::primitives::poly::{IndexedValue, Poly, PolyError};
use crate::sig::{PartialSignature, SignatureScheme, ThresholdScheme};
use thiserror::Error;

/// A private share which is part of the threshold signing key.
pub type Share<S> = IndexedValue<S>;

/// Errors associated with threshold signature aggregation.
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// Fewer partial signatures were provided than the threshold requires.
    #[error("not enough partial signatures: {0}/{1}")]
    InsufficientShares(usize, usize),

    /// The interpolation over the partial signatures failed.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

impl<I: SignatureScheme> ThresholdScheme for I {
    type Error = ThresholdError;

    fn partial_sign(
        share: &Share<Self::Private>,
        msg: &[u8],
    ) -> PartialSignature<Self::Signature> {
        PartialSignature {
            index: share.index,
            value: Self::sign(&share.value, msg),
        }
    }

    fn aggregate(
        threshold: usize,
        partials: &[PartialSignature<Self::Signature>],
    ) -> Result<Self::Signature, ThresholdError> {
        if threshold < 2 {
            return Err(ThresholdError::InsufficientShares(threshold, 2));
        }
        if partials.len() < threshold {
            return Err(ThresholdError::InsufficientShares(
                partials.len(),
                threshold,
            ));
        }

        let sig = Poly::<Self::Signature>::recover_c0(threshold, partials)?;
        Ok(sig)
    }
}

pub mod test_utils {
    use crate::curve::group::{Group, Seed};
    use crate::dkg::{self, Dealer};
    use crate::sig::{PartialSignature, Scheme, Share, SignatureScheme, ThresholdScheme};
    use rand_core::{CryptoRng, RngCore};

    const MSG: [u8; 4] = [1, 2, 3, 4];

    pub fn fresh_seeds<R: CryptoRng + RngCore>(rng: &mut R, m: usize) -> Vec<Seed> {
        (0..m)
            .map(|_| {
                let mut seed = [0u8; 32];
                rng.fill_bytes(&mut seed);
                seed
            })
            .collect()
    }

    /// Runs the full joint key generation for `n` participants with threshold
    /// `t`: every participant deals, shares get routed, and each participant
    /// combines the shares addressed to it. Returns the signing shares and
    /// the group public key.
    pub fn create_joint_keys<C: Group, R: CryptoRng + RngCore>(
        rng: &mut R,
        n: usize,
        t: usize,
    ) -> (Vec<Share<C::Scalar>>, C::Point) {
        let dealers: Vec<Dealer<C>> = (0..n)
            .map(|_| Dealer::new(&fresh_seeds(rng, t), n).unwrap())
            .collect();
        let dealt: Vec<_> = dealers.iter().map(|d| d.deal()).collect();

        let signing_keys = (0..n)
            .map(|i| {
                let received: Vec<_> = dealt.iter().map(|shares| shares[i].clone()).collect();
                dkg::combine_signing_key::<C>(&received).unwrap()
            })
            .collect();

        let public_shares: Vec<_> = dealers.iter().map(|d| d.public_share()).collect();
        let public_key = dkg::combine_public_key::<C>(&public_shares).unwrap();

        (signing_keys, public_key)
    }

    pub fn compute_partial_sigs<T: ThresholdScheme + SignatureScheme>(
        t: usize,
        shares: &[Share<T::Private>],
    ) -> Vec<PartialSignature<T::Signature>> {
        shares
            .iter()
            .take(t)
            .map(|s| T::partial_sign(s, &MSG))
            .collect()
    }

    pub fn process_partial_sigs<T: ThresholdScheme + SignatureScheme>(
        partials: &[PartialSignature<T::Signature>],
        public_key: &T::Public,
    ) -> bool {
        let final_sig = T::aggregate(partials.len(), partials).unwrap();
        T::verify(public_key, &MSG, &final_sig)
    }

    pub fn test_threshold_scheme<C, T, R>(rng: &mut R, n: usize, t: usize)
    where
        C: Group,
        T: ThresholdScheme + SignatureScheme + Scheme<Private = C::Scalar, Public = C::Point>,
        R: CryptoRng + RngCore,
    {
        let (shares, public_key) = create_joint_keys::<C, _>(rng, n, t);
        let sigs = compute_partial_sigs::<T>(t, &shares);
        assert!(process_partial_sigs::<T>(&sigs, &public_key));
    }
}
