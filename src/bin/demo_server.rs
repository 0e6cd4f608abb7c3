//! Demo signing server: generates a keypair, hands out the public key to
//! whoever connects, then signs and returns a fixed resource.

use glyph_rlwe::{keygen, sign};
use std::{
    io::{Read, Write},
    net::TcpListener,
};

const DEFAULT_ADDR: &str = "127.0.0.1:1337";

fn main() {
    env_logger::init();

    let addr = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_ADDR.into());
    let listener = TcpListener::bind(&addr).expect("couldn't bind demo server socket");
    log::info!("demo server listening on {addr}");

    let (pk, sk) = keygen();

    for stream in listener.incoming() {
        let mut conn = match stream {
            Ok(conn) => conn,
            Err(e) => {
                log::warn!("failed to accept connection: {e}");
                continue;
            }
        };
        log::info!("connection from {:?}", conn.peer_addr());

        conn.write_all(pk.to_bytes()).expect("couldn't send public key");
        log::info!("public key sent ({} bytes)", pk.to_bytes().len());

        let mut req = [0u8; 1024];
        let n = conn.read(&mut req).expect("couldn't read resource request");
        log::info!("received resource request: {:?}", String::from_utf8_lossy(&req[..n]));

        let resource = b"Hello, World!";
        let sig = sign(&sk, resource).expect("signing failed");

        conn.write_all(resource).expect("couldn't send resource");
        log::info!("resource sent");

        conn.write_all(sig.to_bytes()).expect("couldn't send signature");
        log::info!("signature sent ({} bytes)", sig.to_bytes().len());
    }
}
