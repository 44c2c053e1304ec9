use crate::{
    curve::group::{Element, Group, Seed},
    dkg::errors::DkgError,
    primitives::poly::{Idx, Poly},
    sig::Share,
};

// TODO: broadcast a commitment to the dealer polynomial alongside the shares
// so recipients can detect a dealer handing out inconsistent shares.

/// One participant's dealing state: a secret polynomial of degree m-1 whose
/// evaluations at 1..=n are the shares, and whose constant term is this
/// participant's contribution to the joint key.
#[derive(Debug, Clone)]
pub struct Dealer<C: Group> {
    participants: usize,
    poly: Poly<C::Scalar>,
}

impl<C: Group> Dealer<C> {
    /// Creates a dealer for `participants` share holders from one seed per
    /// polynomial coefficient; the threshold is the number of seeds.
    pub fn new(seeds: &[Seed], participants: usize) -> Result<Self, DkgError> {
        let poly = Poly::from_seeds(seeds)?;
        if participants < seeds.len() {
            return Err(DkgError::InsufficientShares(participants, seeds.len()));
        }
        Ok(Self { participants, poly })
    }

    /// The number of shares required to sign.
    pub fn threshold(&self) -> usize {
        self.poly.degree() + 1
    }

    pub fn participants(&self) -> usize {
        self.participants
    }

    /// Evaluates the polynomial at every index in 1..=n. The share for index
    /// i must reach participant i over a confidential channel; index 0 stays
    /// with the polynomial.
    pub fn deal(&self) -> Vec<Share<C::Scalar>> {
        (1..=self.participants)
            .map(|i| self.poly.eval(i as Idx))
            .collect()
    }

    /// The public image of the polynomial's constant term, safe to broadcast.
    pub fn public_share(&self) -> C::Point {
        self.poly.public_key()
    }
}

/// Sums the shares addressed to one participant, one from every dealer, into
/// that participant's signing share. Addition of evaluations distributes over
/// addition of polynomials, so the result equals the sum of all dealer
/// polynomials evaluated at this participant's index.
pub fn combine_signing_key<C: Group>(
    shares: &[Share<C::Scalar>],
) -> Result<Share<C::Scalar>, DkgError> {
    if shares.len() < 2 {
        return Err(DkgError::InsufficientShares(shares.len(), 2));
    }

    let index = shares[0].index;
    let mut sk = C::Scalar::new();
    for share in shares {
        if share.index != index {
            return Err(DkgError::MismatchedIndex(index, share.index));
        }
        sk.add(&share.value);
    }

    Ok(Share { index, value: sk })
}

/// Sums the public shares broadcast by all dealers into the group public key,
/// the public image of the joint polynomial's constant term.
pub fn combine_public_key<C: Group>(shares: &[C::Point]) -> Result<C::Point, DkgError> {
    if shares.len() < 2 {
        return Err(DkgError::InsufficientShares(shares.len(), 2));
    }

    let mut pk = C::Point::new();
    for share in shares {
        pk.add(share);
    }
    Ok(pk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::bls12381::{G1Curve, Scalar};
    use crate::curve::group::Scalar as _;
    use crate::primitives::poly::PolyError;

    fn seeds(m: usize, tag: u8) -> Vec<Seed> {
        (0..m).map(|i| [tag ^ i as u8; 32]).collect()
    }

    fn scalar(i: u64) -> Scalar {
        let mut x = Scalar::new();
        x.set_int(i);
        x
    }

    #[test]
    fn dealer_hands_out_one_share_per_index() {
        let dealer = Dealer::<G1Curve>::new(&seeds(2, 1), 3).unwrap();
        assert_eq!(dealer.threshold(), 2);
        assert_eq!(dealer.participants(), 3);

        let shares = dealer.deal();
        let indices: Vec<_> = shares.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn dealing_is_deterministic() {
        let a = Dealer::<G1Curve>::new(&seeds(3, 5), 4).unwrap();
        let b = Dealer::<G1Curve>::new(&seeds(3, 5), 4).unwrap();
        assert_eq!(a.deal(), b.deal());
        assert_eq!(a.public_share(), b.public_share());
    }

    #[test]
    fn rejects_fewer_participants_than_threshold() {
        assert!(matches!(
            Dealer::<G1Curve>::new(&seeds(3, 1), 2),
            Err(DkgError::InsufficientShares(2, 3))
        ));
    }

    #[test]
    fn rejects_trivial_threshold() {
        assert!(matches!(
            Dealer::<G1Curve>::new(&seeds(1, 1), 3),
            Err(DkgError::Poly(PolyError::InvalidThreshold(1)))
        ));
    }

    #[test]
    fn signing_key_is_the_sum_of_shares() {
        let shares = vec![
            Share { index: 2, value: scalar(11) },
            Share { index: 2, value: scalar(31) },
            Share { index: 2, value: scalar(100) },
        ];
        let sk = combine_signing_key::<G1Curve>(&shares).unwrap();
        assert_eq!(sk.index, 2);
        assert_eq!(sk.value, scalar(142));
    }

    #[test]
    fn combining_requires_two_shares() {
        let one = vec![Share { index: 1, value: scalar(3) }];
        assert!(matches!(
            combine_signing_key::<G1Curve>(&one),
            Err(DkgError::InsufficientShares(1, 2))
        ));

        let dealer = Dealer::<G1Curve>::new(&seeds(2, 9), 2).unwrap();
        let pks = vec![dealer.public_share()];
        assert!(matches!(
            combine_public_key::<G1Curve>(&pks),
            Err(DkgError::InsufficientShares(1, 2))
        ));
    }

    #[test]
    fn rejects_share_for_another_index() {
        let shares = vec![
            Share { index: 1, value: scalar(3) },
            Share { index: 2, value: scalar(4) },
        ];
        assert!(matches!(
            combine_signing_key::<G1Curve>(&shares),
            Err(DkgError::MismatchedIndex(1, 2))
        ));
    }

    #[test]
    fn public_share_commits_to_the_secret_constant() {
        let dealer = Dealer::<G1Curve>::new(&seeds(2, 3), 3).unwrap();

        // Recover the constant term from threshold shares and check the
        // broadcast commitment matches it.
        let shares = dealer.deal();
        let c0 = Poly::recover_c0(2, &shares[..2]).unwrap();

        let mut expected = <G1Curve as Group>::Point::one();
        expected.mul(&c0);
        assert_eq!(dealer.public_share(), expected);
    }
}
