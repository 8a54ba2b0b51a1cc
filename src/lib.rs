//! # identicon-rust
//!
//! Deterministic identicon rasterizer. Hashes arbitrary bytes (a commit id,
//! a user id, an email address) into a 64-bit seed and draws a small,
//! left-right symmetric raster image from it. The same input always yields
//! the same pixels; different inputs yield visibly different images with
//! overwhelming probability.
//!
//! ## Architecture
//!
//! Rendering runs as a short pipeline:
//!
//! 1. **Seed**: 64-bit FNV-1a hash of the input bytes
//! 2. **Color**: HSV foreground derived from the seed, fixed gray background
//! 3. **Pattern**: mirrored boolean grid read from the seed bits
//! 4. **Shapes**: one of seven primitives, chosen once per image
//! 5. **Renderer**: clipped pixel writes into an owned RGBA8 buffer
//!
//! ```
//! use identicon_rust::Identicon;
//!
//! let icon = Identicon::new(300, 5, 5)?;
//! let img = icon.make(b"test data");
//! assert_eq!((img.width(), img.height()), (300, 300));
//! # Ok::<(), identicon_rust::IdenticonError>(())
//! ```
//!
//! Encoding the buffer to PNG or another format is left to the caller;
//! [`PixelBuffer::as_bytes`] returns tightly packed top-down RGBA8 rows.

// Foundation Types
pub mod basics;
pub mod color;
pub mod error;
pub mod seed;

// Pixel Storage & Renderers
pub mod pixfmt_rgba;
pub mod renderer_base;
pub mod rendering_buffer;

// Identicon Pipeline
pub mod identicon;
pub mod pattern;
pub mod shapes;

pub use color::{Rgba8, BACKGROUND};
pub use error::IdenticonError;
pub use identicon::{Identicon, IdenticonConfig};
pub use pattern::PatternGrid;
pub use rendering_buffer::PixelBuffer;
pub use seed::Seed;
pub use shapes::ShapeKind;
