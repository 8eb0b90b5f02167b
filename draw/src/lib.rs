//!
//! `glyph_draw` assembles a character portrait out of `glyph_canvas` shapes
//!
//! The portrait is a fixed composition: a gradient-shaded head with a layered outline, hair, eyes, eyebrows,
//! a nose, a mouth, cheeks, and a body with arms. `character_art()` draws it on the standard 100x80 canvas,
//! and the `glyph_draw` binary prints it and saves it as a text file.
//!

pub use glyph_canvas as canvas;

mod character;

pub use self::character::*;
