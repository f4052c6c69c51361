//! # Nearcolor
//!
//! Nearcolor converts colors between hashed hexadecimal notation and RGBA
//! channels, and matches colors against a caller-supplied palette by
//! Euclidian distance in RGBA space.
//!
//! Its two abstractions are:
//!
//!   * [`Rgba`] implements **the color value** as four 8-bit channels. It
//!     parses from hexadecimal notation with
//!     [`FromStr`](struct.Rgba.html#impl-FromStr-for-Rgba) or
//!     [`Rgba::from_hex_with_alpha`] and formats itself with
//!     [`Display`](struct.Rgba.html#impl-Display-for-Rgba).
//!   * [`Matcher`] implements **nearest-color lookup**. It owns an
//!     insertion-ordered palette, populated from hexadecimal strings with
//!     [`Matcher::extend_with_hex`] or from channel values with
//!     [`Matcher::extend_with_colors`], and answers queries with
//!     [`Matcher::nearest`] and [`Matcher::nearest_hex`].
//!
//! Queries are [`ColorQuery`]s, palette entries with optional alpha are
//! [`PartialRgba`]s, and all failures surface as the error types in
//! [`error`]. No operation panics; a malformed color string or a query
//! against an empty palette is an `Err`, never a crash.
//!
//! ```
//! # use nearcolor::{Matcher, Rgba};
//! let mut matcher = Matcher::new();
//! matcher
//!     .extend_with_hex(["#ff0000", "#ff00ff", "#0f0", "#00ffff", "#0000ff"])
//!     .extend_with_colors([(255, 255, 0)]);
//!
//! assert_eq!(matcher.nearest_hex("#ff00aa")?, "#ff00ff");
//! assert_eq!(matcher.nearest("#12fe09")?, Rgba::opaque(0, 255, 0));
//! # Ok::<(), nearcolor::error::MatchError>(())
//! ```

pub mod error;
mod matcher;
mod parse;
mod rgba;

pub use matcher::{ColorQuery, Matcher, PartialRgba};
pub use rgba::Rgba;
