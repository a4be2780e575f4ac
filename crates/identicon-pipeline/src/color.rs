//! Color selection.
//!
//! The fill color is read directly from the first three digest bytes.
//! The digest is 16 bytes by construction, so the 3-byte precondition
//! holds statically — the signature takes the full fixed-size array
//! rather than checking a slice length at runtime.

use crate::digest::DIGEST_LEN;
use crate::types::Rgb;

/// Extract the fill color from the first three digest bytes.
#[must_use]
pub const fn select_color(digest: &[u8; DIGEST_LEN]) -> Rgb {
    Rgb::new(digest[0], digest[1], digest[2])
}
