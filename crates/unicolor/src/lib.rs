//! # Unicolor
//!
//! One color, three views. Browser-style 2D and GPU pipelines juggle the
//! same color in three incompatible shapes: CSS strings for styling and
//! drawing, packed 32-bit pixels for raster image buffers, and 4-byte RGBA
//! arrays for vertex and texture data. Unicolor keeps all three coherent
//! around a single 4-byte value.
//!
//! The main abstractions are:
//!
//!   * [`Color`] holds the four bytes and exposes the **byte view**, the
//!     **packed pixel view** (the same bytes reinterpreted as one `u32`),
//!     and the lazily cached **canonical CSS string**. Mutations through
//!     any view invalidate the cached string; equality compares packed
//!     pixels; [`rgb_distance`](Color::rgb_distance) ranks colors by an
//!     inexpensive perceptual metric.
//!   * The [`css`] module converts bytes into every CSS textual form this
//!     crate emits: `rgb()`/`rgba()`, `hsl()`/`hsla()`, short and long
//!     hashed hex, and the canonical hybrid of the two.
//!   * [`Surface`] abstracts the rendering surface that resolves arbitrary
//!     CSS color strings *back* into bytes by painting a single pixel.
//!     With the default `paint` feature, [`PaintSurface`] implements it on
//!     a reusable 1×1 [`unicanvas`] canvas; deployments with their own CSS
//!     machinery can substitute anything honoring the same contract.
//!
//! Parsing CSS color syntax is deliberately not this crate's job; strings
//! always round-trip through a surface. That keeps the core small and makes
//! the grammar pluggable.
//!
//! ```
//! # use unicolor::{Color, PaintSurface};
//! # fn main() -> Result<(), unicolor::error::UnresolvableColorError> {
//! let mut surface = PaintSurface::new();
//!
//! let mut color = Color::from_css("cadetblue", &mut surface)?;
//! assert_eq!(color.as_bytes(), &[95, 158, 160, 255]);
//! assert_eq!(color.css_string(), "#5f9ea0");
//!
//! color.set_pixel(u32::from_ne_bytes([255, 0, 0, 255]));
//! assert_eq!(color.css_string(), "#f00");
//! # Ok(())
//! # }
//! ```

mod color;
pub mod css;
pub mod error;
mod surface;

pub use color::{Color, ColorSource};
#[cfg(feature = "paint")]
pub use surface::PaintSurface;
pub use surface::Surface;
