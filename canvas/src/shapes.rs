use crate::canvas::*;
use crate::options::*;
use crate::gradient::*;
use crate::geometry::*;

use tracing::{trace, warn};

impl Canvas {
    ///
    /// Draws a circle
    ///
    /// When filling, every cell whose center is within `radius` of the center of the circle is drawn. Otherwise
    /// a cell is drawn if its distance from the center is within `options.thickness` of the radius.
    ///
    pub fn draw_circle(&mut self, center: (f64, f64), radius: f64, options: &CircleOptions) {
        trace!(?center, radius, ?options, "draw_circle");

        let CircleOptions { character, thickness, fill } = *options;

        self.stamp(Compositing::Overwrite, move |x, y| {
            let dist = distance((x, y), center);

            let inside = if fill {
                dist <= radius
            } else {
                (dist - radius).abs() <= thickness
            };

            if inside { Some(character) } else { None }
        });
    }

    ///
    /// Draws an axis-aligned ellipse
    ///
    /// The outline is the set of cells whose normalized distance (1.0 on the ellipse) is within
    /// `thickness / min(radius_x, radius_y)` of 1.0. The radii must both be greater than 0.
    ///
    pub fn draw_ellipse(&mut self, center: (f64, f64), radius_x: f64, radius_y: f64, options: &EllipseOptions) {
        trace!(?center, radius_x, radius_y, ?options, "draw_ellipse");

        let EllipseOptions { character, thickness, fill } = *options;
        let tolerance = thickness / radius_x.min(radius_y);

        self.stamp(Compositing::Overwrite, move |x, y| {
            let normalized = ellipse_distance((x, y), center, (radius_x, radius_y));

            let inside = if fill {
                normalized <= 1.0
            } else {
                (normalized - 1.0).abs() <= tolerance
            };

            if inside { Some(character) } else { None }
        });
    }

    ///
    /// Fills a circle with a character (`*` is the usual choice, see `FILLED_CIRCLE_CHAR`)
    ///
    pub fn draw_filled_circle(&mut self, center: (f64, f64), radius: f64, character: char) {
        self.draw_circle(center, radius, &CircleOptions::with_char(character).filled());
    }

    ///
    /// Shades the blank cells that are between `inner_radius` and `outer_radius` from a center point
    ///
    /// Cells that have already been drawn on are left alone, so this can be used to fill in the inside of
    /// a shape without disturbing its outline.
    ///
    pub fn shade_region(&mut self, center: (f64, f64), inner_radius: f64, outer_radius: f64, options: &ShadeOptions) {
        trace!(?center, inner_radius, outer_radius, ?options, "shade_region");

        let character = options.character;

        self.stamp(Compositing::IfBlank, move |x, y| {
            let dist = distance((x, y), center);

            if inner_radius <= dist && dist <= outer_radius {
                Some(character)
            } else {
                None
            }
        });
    }

    ///
    /// Fills the blank cells in a circle with a radial gradient
    ///
    /// The first character in the ramp is used at the center and the last at the edge. A cell at distance `d`
    /// uses the character at index `floor(d/radius * (len-1))`.
    ///
    pub fn draw_gradient_circle(&mut self, center: (f64, f64), radius: f64, ramp: &CharacterRamp) {
        trace!(?center, radius, ?ramp, "draw_gradient_circle");

        if ramp.is_empty() {
            warn!("gradient circle at {:?} has an empty character ramp: nothing will be drawn", center);
            return;
        }

        self.stamp(Compositing::IfBlank, move |x, y| {
            let dist = distance((x, y), center);

            if dist <= radius {
                // A zero radius can only contain the center point
                let ratio = if radius > 0.0 { dist / radius } else { 0.0 };
                ramp.character_for_ratio(ratio)
            } else {
                None
            }
        });
    }

    ///
    /// Erases every cell within `radius` of a center point back to the background
    ///
    pub fn clear_circle(&mut self, center: (f64, f64), radius: f64) {
        trace!(?center, radius, "clear_circle");

        self.stamp(Compositing::Overwrite, move |x, y| {
            if distance((x, y), center) <= radius {
                Some(BACKGROUND)
            } else {
                None
            }
        });
    }

    ///
    /// Draws a line between two points
    ///
    /// Cells within `thickness` of the line are drawn, provided they're also within the bounding box of the line
    /// (expanded by the thickness). Vertical lines skip the bounding box test unless the options say
    /// `VerticalExtent::Clamped`, so by default they extend over the whole height of the canvas.
    ///
    pub fn draw_line(&mut self, start: (f64, f64), end: (f64, f64), options: &LineOptions) {
        trace!(?start, ?end, ?options, "draw_line");

        let LineOptions { character, thickness, vertical_extent } = *options;

        let (min_x, max_x) = (start.0.min(end.0) - thickness, start.0.max(end.0) + thickness);
        let (min_y, max_y) = (start.1.min(end.1) - thickness, start.1.max(end.1) + thickness);

        self.stamp(Compositing::Overwrite, move |x, y| {
            let in_bounds = min_x <= x && x <= max_x && min_y <= y && y <= max_y;

            let dist = match line_distance((x, y), start, end) {
                LineDistance::Vertical(dist) => {
                    if vertical_extent == VerticalExtent::Clamped && !in_bounds { return None; }
                    dist
                }

                LineDistance::Segment(dist) => {
                    if !in_bounds { return None; }
                    dist
                }
            };

            if dist <= thickness { Some(character) } else { None }
        });
    }
}
