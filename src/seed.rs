//! Input hashing.
//!
//! Reduces arbitrary input bytes to the 64-bit seed that drives every visual
//! choice of an identicon. The hash is 64-bit FNV-1a: stable across platforms
//! and releases, not cryptographic.

use std::hash::Hasher;

use crate::color::{derive_foreground, Rgba8};
use crate::shapes::ShapeKind;

// ============================================================================
// Fnv1a64
// ============================================================================

/// 64-bit FNV-1a hasher.
///
/// Accumulates state across `write` calls until `reset` is called, so a
/// reused instance must be reset before hashing a new input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    pub const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    pub const PRIME: u64 = 0x0000_0100_0000_01b3;

    pub fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }

    /// Return the hasher to its freshly constructed state.
    pub fn reset(&mut self) {
        self.state = Self::OFFSET_BASIS;
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a64 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

// ============================================================================
// Seed
// ============================================================================

/// The 64-bit value an identicon is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Hash `input` with a fresh hasher.
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut hasher = Fnv1a64::new();
        Self::from_hasher(&mut hasher, input)
    }

    /// Hash `input` with a caller-owned scratch hasher. The hasher is reset
    /// first, so earlier inputs never leak into the seed.
    pub fn from_hasher(hasher: &mut Fnv1a64, input: &[u8]) -> Self {
        hasher.reset();
        hasher.write(input);
        Self(hasher.finish())
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The seed as a bit stream, least-significant bit first. After the 64
    /// seed bits the stream yields `false` forever.
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        let value = self.0;
        (0..u64::BITS)
            .map(move |i| (value >> i) & 1 == 1)
            .chain(std::iter::repeat(false))
    }

    /// Shape drawn into every active cell of the image.
    pub fn shape_kind(&self) -> ShapeKind {
        ShapeKind::from_seed(self.0)
    }

    /// Opaque foreground color.
    pub fn foreground(&self) -> Rgba8 {
        derive_foreground(self.0)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
