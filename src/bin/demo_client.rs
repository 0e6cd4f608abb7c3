//! Demo signing client: fetches the server's public key, requests a
//! resource, then verifies the signed response it gets back.

use glyph_rlwe::{params, verify, PublicKey, Signature};
use std::{
    io::{Read, Write},
    net::TcpStream,
};

const DEFAULT_ADDR: &str = "127.0.0.1:1337";

/// The fixed resource the demo server always signs and returns.
const EXPECTED_RESOURCE: &[u8] = b"Hello, World!";

fn main() {
    env_logger::init();

    let addr = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_ADDR.into());
    let mut conn = TcpStream::connect(&addr).expect("couldn't connect to demo server");
    log::info!("connected to {addr}");

    let mut pk_bytes = vec![0u8; params::public_key_len()];
    conn.read_exact(&mut pk_bytes).expect("couldn't read public key");
    let pk = PublicKey::from_bytes(&pk_bytes).expect("server sent an invalid public key");
    log::info!("received public key ({} bytes)", pk_bytes.len());

    conn.write_all(EXPECTED_RESOURCE).expect("couldn't send resource request");
    log::info!("resource request sent");

    let mut resource = vec![0u8; EXPECTED_RESOURCE.len()];
    conn.read_exact(&mut resource).expect("couldn't read resource");

    let mut sig_bytes = vec![0u8; params::signature_len()];
    conn.read_exact(&mut sig_bytes).expect("couldn't read signature");
    let sig = Signature::from_bytes(&sig_bytes).expect("server sent an invalid signature");

    if verify(&pk, &resource, &sig) {
        log::info!("resource received and verified: {:?}", String::from_utf8_lossy(&resource));
    } else {
        log::error!("signature verification failed");
    }
}
