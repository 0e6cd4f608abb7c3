//! End-to-end coverage of the public API surface, exercised from outside
//! the crate the way a downstream consumer would use it.

use glyph_rlwe::{keygen, params, sign, verify, PublicKey, Signature};

#[test]
fn public_key_has_the_expected_byte_length() {
    let (pk, _sk) = keygen();
    assert_eq!(pk.to_bytes().len(), params::public_key_len());
}

#[test]
fn signature_byte_length_is_constant_across_runs() {
    let (_pk, sk) = keygen();
    let expected = params::signature_len();
    for _ in 0..5 {
        let sig = sign(&sk, b"Hello, World!").unwrap();
        assert_eq!(sig.to_bytes().len(), expected);
    }
}

#[test]
fn signing_the_same_message_twice_differs() {
    let (_pk, sk) = keygen();
    let m = b"Hello, World!";
    let sig1 = sign(&sk, m).unwrap();
    let sig2 = sign(&sk, m).unwrap();
    assert_ne!(sig1.to_bytes(), sig2.to_bytes());
}

#[test]
fn verify_accepts_one_hundred_random_messages() {
    let (pk, sk) = keygen();
    for i in 0..100u32 {
        let m = format!("message #{i}");
        let sig = sign(&sk, m.as_bytes()).unwrap();
        assert!(verify(&pk, m.as_bytes(), &sig), "message #{i} failed to verify");
    }
}

#[test]
fn verify_rejects_a_different_message() {
    let (pk, sk) = keygen();
    let sig = sign(&sk, b"original").unwrap();
    assert!(!verify(&pk, b"different", &sig));
}

#[test]
fn verify_rejects_a_bit_flip_in_the_public_key() {
    let (pk, sk) = keygen();
    let m = b"Hello, World!";
    let sig = sign(&sk, m).unwrap();

    let mut pk_bytes = pk.to_bytes().to_vec();
    pk_bytes[0] ^= 0x01;
    let tampered_pk = PublicKey::from_bytes(&pk_bytes).unwrap();

    assert!(!verify(&tampered_pk, m, &sig));
}

#[test]
fn verify_rejects_a_bit_flip_in_the_signature() {
    let (pk, sk) = keygen();
    let m = b"Hello, World!";
    let sig = sign(&sk, m).unwrap();

    let mut sig_bytes = sig.to_bytes().to_vec();
    let last = sig_bytes.len() - 1;
    sig_bytes[last] ^= 0x01;
    let tampered = Signature::from_bytes(&sig_bytes).unwrap();

    assert!(!verify(&pk, m, &tampered));
}

#[test]
fn distinct_keypairs_do_not_cross_verify() {
    let (_pk_a, sk_a) = keygen();
    let (pk_b, _sk_b) = keygen();
    let m = b"shared message";
    let sig = sign(&sk_a, m).unwrap();
    assert!(!verify(&pk_b, m, &sig));
}
