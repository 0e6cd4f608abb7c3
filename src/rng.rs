//! Deterministic AES-CTR stream used as the sole randomness source when
//! sampling `y1, y2` during Sign (§4.2).
//!
//! The stream encrypts successive 16-byte big-endian counters with AES-128
//! and takes the first 8 bytes of each ciphertext as the next 64-bit word.
//! The counter starts at zero and increments by one per word drawn.

use aes::{
    cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit},
    Aes128,
};

/// A lazy, unbounded sequence of 64-bit words derived from a 128-bit key.
pub struct AesCtrStream {
    cipher: Aes128,
    counter: u128,
}

impl AesCtrStream {
    /// Construct a stream from a freshly-generated 128-bit key.
    pub fn new(key: [u8; 16]) -> Self {
        let key = GenericArray::from_slice(&key);
        AesCtrStream {
            cipher: Aes128::new(key),
            counter: 0,
        }
    }

    /// Draw the next 64-bit word from the stream.
    pub fn next_u64(&mut self) -> u64 {
        let mut block = GenericArray::from(self.counter.to_be_bytes());
        self.cipher.encrypt_block(&mut block);
        let word = u64::from_be_bytes(block[..8].try_into().unwrap());
        self.counter = self.counter.wrapping_add(1);
        word
    }
}

impl Iterator for AesCtrStream {
    type Item = u64;
    fn next(&mut self) -> Option<u64> {
        Some(self.next_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_key() {
        let words_a: Vec<u64> = AesCtrStream::new([7u8; 16]).take(4).collect();
        let words_b: Vec<u64> = AesCtrStream::new([7u8; 16]).take(4).collect();
        assert_eq!(words_a, words_b);
    }

    #[test]
    fn different_keys_differ() {
        let words_a: Vec<u64> = AesCtrStream::new([1u8; 16]).take(4).collect();
        let words_b: Vec<u64> = AesCtrStream::new([2u8; 16]).take(4).collect();
        assert_ne!(words_a, words_b);
    }

    #[test]
    fn successive_words_differ() {
        let mut stream = AesCtrStream::new([9u8; 16]);
        let a = stream.next_u64();
        let b = stream.next_u64();
        assert_ne!(a, b);
    }
}
