//! BLS signing with public keys on G1 and signatures on G2: a signature is
//! the message hashed onto G2 and multiplied by the private key, and it
//! verifies iff `e(pk, H(msg)) == e(g1, sig)`.

use crate::{
    curve::group::{Element, PairingCurve, Point},
    sig::{Scheme, SignatureScheme},
};
use std::marker::PhantomData;

/// A BLS signature scheme instantiated over a pairing curve, with keys in the
/// first group and signatures in the second.
#[derive(Clone, Debug)]
pub struct G1Scheme<C: PairingCurve> {
    m: PhantomData<C>,
}

impl<C: PairingCurve> Scheme for G1Scheme<C> {
    type Private = C::Scalar;
    type Public = C::G1;
    type Signature = C::G2;
}

impl<C: PairingCurve> SignatureScheme for G1Scheme<C> {
    fn sign(private: &Self::Private, msg: &[u8]) -> Self::Signature {
        let mut h = C::G2::new();
        h.map(msg);
        h.mul(private);
        h
    }

    fn verify(public: &Self::Public, msg: &[u8], sig: &Self::Signature) -> bool {
        let mut h = C::G2::new();
        h.map(msg);
        C::pair(public, &h) == C::pair(&C::G1::one(), sig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{
        bls12381::PairingCurve as PCurve,
        group::{Encodable, Scalar},
    };

    type S = G1Scheme<PCurve>;

    #[test]
    fn sign_and_verify() {
        let (private, public) = S::keypair(&mut rand::thread_rng());
        let sig = S::sign(&private, b"hello");
        assert!(S::verify(&public, b"hello", &sig));
    }

    #[test]
    fn verify_rejects_other_message_and_key() {
        let mut rng = rand::thread_rng();
        let (private, public) = S::keypair(&mut rng);
        let sig = S::sign(&private, b"hello");

        assert!(!S::verify(&public, b"hello!", &sig));

        let (_, other) = S::keypair(&mut rng);
        assert!(!S::verify(&other, b"hello", &sig));
    }

    #[test]
    fn sign_is_deterministic() {
        let private = <S as Scheme>::Private::derive(&[9u8; 32]);
        assert_eq!(S::sign(&private, b"msg"), S::sign(&private, b"msg"));
    }

    #[test]
    fn verify_encoded_round_trip() {
        let (private, public) = S::keypair(&mut rand::thread_rng());
        let sig = S::sign(&private, b"hello");
        assert!(S::verify_encoded(&public.marshal(), b"hello", &sig.marshal()));
    }

    #[test]
    fn verify_encoded_fails_closed_on_malformed_input() {
        let (private, public) = S::keypair(&mut rand::thread_rng());
        let sig = S::sign(&private, b"hello");
        let pk = public.marshal();

        // Truncated or garbage encodings are an ordinary failure, not a panic.
        assert!(!S::verify_encoded(&pk[..47], b"hello", &sig.marshal()));
        assert!(!S::verify_encoded(&pk, b"hello", &[0u8; 96]));
        assert!(!S::verify_encoded(&[7u8; 48], b"hello", &sig.marshal()));
    }
}
