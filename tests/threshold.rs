//! End-to-end 2-of-3 key custody: a user device, a backup, and a wallet
//! service jointly generate a signing key, and any two of them can sign.

use quorum_bls::{
    curve::group::Seed,
    dkg::{self, Dealer},
    schemes::bls12_381::{G1Curve, G1Scheme},
    sig::{Share, SignatureScheme, ThresholdScheme},
};
use rand::RngCore;

const USER: usize = 0;
const BACKUP: usize = 1;
const WALLET: usize = 2;

fn fresh_seeds(m: usize) -> Vec<Seed> {
    let mut rng = rand::thread_rng();
    (0..m)
        .map(|_| {
            let mut seed = [0u8; 32];
            rng.fill_bytes(&mut seed);
            seed
        })
        .collect()
}

struct Custody {
    signing_keys: Vec<Share<quorum_bls::curve::bls12381::Scalar>>,
    group_pk: quorum_bls::curve::bls12381::G1,
}

fn setup_two_of_three() -> Custody {
    let (m, n) = (2, 3);

    // user, backup and wallet each deal from their own polynomial.
    let dealers: Vec<Dealer<G1Curve>> = (0..n)
        .map(|_| Dealer::new(&fresh_seeds(m), n).unwrap())
        .collect();
    let dealt: Vec<_> = dealers.iter().map(|d| d.deal()).collect();

    let signing_keys = (0..n)
        .map(|i| {
            let received: Vec<_> = dealt.iter().map(|shares| shares[i].clone()).collect();
            dkg::combine_signing_key::<G1Curve>(&received).unwrap()
        })
        .collect();

    let public_shares: Vec<_> = dealers.iter().map(|d| d.public_share()).collect();
    let group_pk = dkg::combine_public_key::<G1Curve>(&public_shares).unwrap();

    Custody {
        signing_keys,
        group_pk,
    }
}

#[test]
fn any_pair_signs_for_the_group() {
    let custody = setup_two_of_three();

    for pair in [[USER, BACKUP], [USER, WALLET], [BACKUP, WALLET]] {
        let partials: Vec<_> = pair
            .iter()
            .map(|&who| G1Scheme::partial_sign(&custody.signing_keys[who], b"Hello"))
            .collect();

        let sig = G1Scheme::aggregate(2, &partials).unwrap();
        assert!(G1Scheme::verify(&custody.group_pk, b"Hello", &sig));

        // The same signature does not transfer to any other message.
        assert!(!G1Scheme::verify(&custody.group_pk, b"Hello!", &sig));
    }
}

#[test]
fn one_participant_cannot_sign_alone() {
    let custody = setup_two_of_three();

    let partials = vec![G1Scheme::partial_sign(&custody.signing_keys[USER], b"Hello")];
    assert!(G1Scheme::aggregate(2, &partials).is_err());

    // A lone partial signature is not a group signature either.
    assert!(!G1Scheme::verify(&custody.group_pk, b"Hello", &partials[0].value));
}

#[test]
fn the_same_participant_twice_is_not_a_quorum() {
    let custody = setup_two_of_three();

    let partials = vec![
        G1Scheme::partial_sign(&custody.signing_keys[WALLET], b"Hello"),
        G1Scheme::partial_sign(&custody.signing_keys[WALLET], b"Hello"),
    ];
    assert!(G1Scheme::aggregate(2, &partials).is_err());
}

#[test]
fn quorums_agree_on_the_signature() {
    let custody = setup_two_of_three();

    let sign = |pair: [usize; 2]| {
        let partials: Vec<_> = pair
            .iter()
            .map(|&who| G1Scheme::partial_sign(&custody.signing_keys[who], b"Hello"))
            .collect();
        G1Scheme::aggregate(2, &partials).unwrap()
    };

    let a = sign([USER, BACKUP]);
    let b = sign([BACKUP, WALLET]);
    assert_eq!(a, b);
}
