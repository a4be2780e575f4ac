//! Input hashing.
//!
//! Turns an arbitrary input string into a fixed-length digest that seeds
//! every downstream stage. MD5 is used as a deterministic, well-distributed
//! byte source, not for any security property — but it is load-bearing for
//! reproducibility: swapping the hash changes every generated image.

use md5::{Digest, Md5};

/// Number of bytes in the digest (MD5 output length).
pub const DIGEST_LEN: usize = 16;

/// Hash an input string into a fixed-length byte sequence.
///
/// Pure and total: every string, including the empty string, produces
/// a digest, and the same string always produces the same digest.
#[must_use]
pub fn digest(input: &str) -> [u8; DIGEST_LEN] {
    Md5::digest(input.as_bytes()).into()
}
