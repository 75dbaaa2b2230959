//! Multipart boundary generation.
//!
//! Each browser builds its form boundary with its own algorithm, and the
//! boundary shape is visible to anything that reads request bodies. Both
//! generators draw only from a cryptographically secure source; a failing
//! source is an error, never a fallback.

use crate::base::error::ImpersonateError;
use crate::emulation::Browser;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::Serialize;

/// Prefix written by WebKit/Blink form encoders.
pub const WEBKIT_PREFIX: &str = "----WebKitFormBoundary";

/// Prefix written by Gecko form encoders (27 dashes).
pub const GECKO_PREFIX: &str = "---------------------------";

// 'A' and 'B' appear twice so the table has 64 slots.
const WEBKIT_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789AB";

/// Boundary algorithm of a browser engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryGenerator {
    /// `----WebKitFormBoundary` + 16 alphanumerics (Chrome, Safari).
    WebKit,
    /// 27 dashes + three decimal `u32`s (Firefox).
    Gecko,
}

impl BoundaryGenerator {
    pub const fn for_browser(browser: Browser) -> Self {
        match browser {
            Browser::Chrome => BoundaryGenerator::WebKit,
            Browser::Firefox => BoundaryGenerator::Gecko,
        }
    }

    /// Fresh boundary from the operating system's secure random source.
    pub fn generate(self) -> Result<String, ImpersonateError> {
        self.generate_with(&mut OsRng)
    }

    /// Fresh boundary from a caller-supplied secure random source.
    pub fn generate_with<R>(self, rng: &mut R) -> Result<String, ImpersonateError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        match self {
            BoundaryGenerator::WebKit => webkit_boundary(rng),
            BoundaryGenerator::Gecko => gecko_boundary(rng),
        }
    }
}

/// WebKit's `generateUniqueBoundaryString`.
///
/// Four rounds; each reads a big-endian `u32` and emits one character per
/// byte from its low six bits.
pub fn webkit_boundary<R>(rng: &mut R) -> Result<String, ImpersonateError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut boundary = String::with_capacity(WEBKIT_PREFIX.len() + 16);
    boundary.push_str(WEBKIT_PREFIX);

    for _ in 0..4 {
        let mut bytes = [0u8; 4];
        rng.try_fill_bytes(&mut bytes)?;
        let randomness = u32::from_be_bytes(bytes);

        for shift in [24, 16, 8, 0] {
            let index = ((randomness >> shift) & 0x3F) as usize;
            boundary.push(WEBKIT_ALPHABET[index] as char);
        }
    }

    Ok(boundary)
}

/// Gecko's `HTMLFormSubmission` boundary: three little-endian `u32`s in
/// decimal, unpadded and unseparated.
pub fn gecko_boundary<R>(rng: &mut R) -> Result<String, ImpersonateError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut boundary = String::with_capacity(GECKO_PREFIX.len() + 30);
    boundary.push_str(GECKO_PREFIX);

    for _ in 0..3 {
        let mut bytes = [0u8; 4];
        rng.try_fill_bytes(&mut bytes)?;
        boundary.push_str(&u32::from_le_bytes(bytes).to_string());
    }

    Ok(boundary)
}
