///
/// The character used by `draw_filled_circle()`
///
pub const FILLED_CIRCLE_CHAR: char = '*';

///
/// Options for drawing a circle
///
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleOptions {
    /// The character to draw the circle with
    pub character: char,

    /// How far either side of the radius a cell can be and still be part of the outline (ignored when filling)
    pub thickness: f64,

    /// If true, every cell within the radius is drawn instead of just the outline
    pub fill: bool,
}

///
/// Options for drawing an ellipse
///
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EllipseOptions {
    /// The character to draw the ellipse with
    pub character: char,

    /// The width of the outline band, in cells (this is scaled by the smaller of the two radii)
    pub thickness: f64,

    /// If true, every cell inside the ellipse is drawn instead of just the outline
    pub fill: bool,
}

///
/// Options for `shade_region()`
///
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadeOptions {
    /// The character to shade blank cells with
    pub character: char,
}

///
/// How far a vertical line extends
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalExtent {
    /// A vertical line covers the full height of the canvas, whatever the y coordinates of its ends are
    Unbounded,

    /// A vertical line only covers the rows between its ends (extended by the line thickness), in the same way as other lines
    Clamped,
}

///
/// Options for drawing a line
///
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineOptions {
    /// The character to draw the line with
    pub character: char,

    /// The maximum distance from the line for a cell to be drawn
    pub thickness: f64,

    /// How vertical lines are treated
    pub vertical_extent: VerticalExtent,
}

impl Default for CircleOptions {
    fn default() -> Self {
        CircleOptions { character: '.', thickness: 1.0, fill: false }
    }
}

impl Default for EllipseOptions {
    fn default() -> Self {
        EllipseOptions { character: ':', thickness: 1.0, fill: false }
    }
}

impl Default for ShadeOptions {
    fn default() -> Self {
        ShadeOptions { character: '-' }
    }
}

impl Default for VerticalExtent {
    fn default() -> Self {
        VerticalExtent::Unbounded
    }
}

impl Default for LineOptions {
    fn default() -> Self {
        LineOptions { character: '-', thickness: 1.0, vertical_extent: VerticalExtent::default() }
    }
}

impl CircleOptions {
    ///
    /// Default options, using a different character
    ///
    pub fn with_char(character: char) -> Self {
        CircleOptions { character, ..Self::default() }
    }

    ///
    /// Sets the thickness of the outline
    ///
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    ///
    /// Fills the circle instead of drawing its outline
    ///
    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }
}

impl EllipseOptions {
    ///
    /// Default options, using a different character
    ///
    pub fn with_char(character: char) -> Self {
        EllipseOptions { character, ..Self::default() }
    }

    ///
    /// Sets the thickness of the outline
    ///
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    ///
    /// Fills the ellipse instead of drawing its outline
    ///
    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }
}

impl ShadeOptions {
    pub fn with_char(character: char) -> Self {
        ShadeOptions { character }
    }
}

impl LineOptions {
    ///
    /// Default options, using a different character
    ///
    pub fn with_char(character: char) -> Self {
        LineOptions { character, ..Self::default() }
    }

    ///
    /// Sets the thickness of the line
    ///
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    ///
    /// Sets how vertical lines are treated
    ///
    pub fn vertical_extent(mut self, vertical_extent: VerticalExtent) -> Self {
        self.vertical_extent = vertical_extent;
        self
    }
}
