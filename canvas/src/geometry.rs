//!
//! Distance tests used to decide which cells belong to a shape
//!

///
/// The distance from a point to a line, as calculated by `line_distance()`
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LineDistance {
    /// The line was vertical (both ends had the same x coordinate): this is just the horizontal distance to that coordinate
    Vertical(f64),

    /// The perpendicular distance from the point to the infinite line passing through both ends of the segment
    Segment(f64),
}

impl LineDistance {
    ///
    /// The distance regardless of how it was calculated
    ///
    #[inline]
    pub fn distance(&self) -> f64 {
        match self {
            LineDistance::Vertical(distance)    => *distance,
            LineDistance::Segment(distance)     => *distance,
        }
    }
}

///
/// The euclidean distance between two points
///
#[inline]
pub fn distance((x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;

    (dx*dx + dy*dy).sqrt()
}

///
/// The normalized distance of a point from the center of an axis-aligned ellipse
///
/// This is 1.0 on the ellipse itself, less than 1.0 inside and greater than 1.0 outside. Radii of 0 produce
/// infinite or NaN values rather than failing.
///
#[inline]
pub fn ellipse_distance((x, y): (f64, f64), (center_x, center_y): (f64, f64), (radius_x, radius_y): (f64, f64)) -> f64 {
    let dx = x - center_x;
    let dy = y - center_y;

    (dx*dx)/(radius_x*radius_x) + (dy*dy)/(radius_y*radius_y)
}

///
/// The distance from a point to the line through `start` and `end`
///
/// For a vertical line this is only the distance along the x axis. Otherwise this uses the line equation
/// `Ax + By + C = 0`, so the result is the distance to the infinite line rather than to the segment: callers
/// are expected to limit the result to the segment's bounding box.
///
pub fn line_distance((x, y): (f64, f64), (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> LineDistance {
    if x1 == x2 {
        LineDistance::Vertical((x - x1).abs())
    } else {
        let a = y2 - y1;
        let b = x1 - x2;
        let c = x2*y1 - x1*y2;

        LineDistance::Segment((a*x + b*y + c).abs() / (a*a + b*b).sqrt())
    }
}
