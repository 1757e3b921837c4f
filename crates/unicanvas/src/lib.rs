//! # Unicanvas
//!
//! This crate provides a **minimal in-memory raster surface** that knows how
//! to resolve CSS color strings. It exists for one job: given any legal CSS
//! color, whether one of the 148 named colors, `transparent`, hashed
//! hexadecimal in short or long form, or the `rgb()`/`rgba()`/`hsl()`/`hsla()`
//! functions, produce the byte-exact RGBA value a browser canvas would paint.
//!
//! The two entry points are:
//!
//!   * [`parse`], which turns a CSS color string directly into its four
//!     RGBA bytes; and
//!   * [`Canvas`], an RGBA8 pixel buffer with the painting vocabulary of a
//!     2D rendering context: a fill style set from a CSS string,
//!     [`fill_rect`](Canvas::fill_rect) with source-over compositing,
//!     [`clear_rect`](Canvas::clear_rect), and per-pixel readback.
//!
//! Callers that only need string resolution paint a 1×1 canvas and read the
//! pixel back; callers that hold larger pixel buffers can use the canvas as
//! a scratch raster. Either way, no global state and no display hardware are
//! involved.
//!
//! ```
//! # use unicanvas::{Canvas, ColorParseError};
//! # fn main() -> Result<(), ColorParseError> {
//! let mut canvas = Canvas::new(1, 1);
//! canvas.set_fill_style("hsl(120, 100%, 50%)")?;
//! canvas.fill_rect(0, 0, 1, 1);
//! assert_eq!(canvas.pixel(0, 0), [0, 255, 0, 255]);
//! # Ok(())
//! # }
//! ```

mod canvas;
mod err;
mod named;
mod parse;

pub use canvas::Canvas;
pub use err::ColorParseError;
pub use parse::parse;
