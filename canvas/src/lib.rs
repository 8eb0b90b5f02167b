//!
//! # glyph_canvas
//!
//! `glyph_canvas` draws pictures made entirely of printable characters. A `Canvas` is a fixed-size
//! grid of `char` cells, and shapes are stamped onto it using analytic distance tests rather than
//! by rasterizing paths into a framebuffer: every shape operation visits every cell, works out how
//! far the cell is from the shape's boundary, and decides whether or not to write a character.
//!
//! The shape operations are:
//!
//! * `draw_circle` and `draw_filled_circle` - circle outlines (a band of `thickness` around the radius) and discs
//! * `draw_ellipse` - axis-aligned ellipse outlines and fills
//! * `draw_line` - thick line segments
//! * `shade_region` - fills an annulus, but only in cells that are still blank
//! * `draw_gradient_circle` - fills a disc with a radial ramp of characters, also only in blank cells
//! * `clear_circle` - erases a disc back to the background
//!
//! Later operations write over earlier ones, except for the 'paint-only-if-blank' operations, which
//! make it easy to shade the inside of a shape after its outline has been drawn.
//!
//! Once the picture is finished, `render()` turns the grid into text (one line per row) and
//! `save_to_file()` writes that text out.
//!
//! ```
//! use glyph_canvas::*;
//!
//! let mut canvas = Canvas::new(20, 10);
//! canvas.draw_circle((10.0, 5.0), 4.0, &CircleOptions::with_char('o').thickness(0.5));
//! canvas.shade_region((10.0, 5.0), 0.0, 3.0, &ShadeOptions::with_char('.'));
//!
//! assert!(canvas.render().lines().count() == 10);
//! ```
//!
//! # Features
//!
//! * `multithreading` - (on by default) uses `rayon` to process the rows of the grid in parallel
//!   during a shape operation. Every cell test only reads and writes its own cell, so the results
//!   are identical to the single-threaded version.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod error;
mod canvas;
mod render;
mod shapes;
mod options;
mod gradient;
pub mod geometry;

pub use self::error::*;
pub use self::canvas::*;
pub use self::options::*;
pub use self::gradient::*;
