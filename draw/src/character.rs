use glyph_canvas::*;

use tracing::{debug, trace};

/// Width of the canvas used by `character_art()`
pub const CHARACTER_WIDTH: usize = 100;

/// Height of the canvas used by `character_art()`
pub const CHARACTER_HEIGHT: usize = 80;

/// Center of the head
const HEAD: (i64, i64) = (50, 30);

/// Radius of the head
const HEAD_RADIUS: i64 = 24;

/// Ramp used to shade the face (the center of the face is left blank so the features can be shaded in later)
const FACE_RAMP: &str = "  ..::--=";

///
/// Converts a cell position to a point
///
#[inline]
fn point((x, y): (i64, i64)) -> (f64, f64) {
    (x as f64, y as f64)
}

///
/// Writes a single character, skipping it if it's outside the canvas
///
fn accent(canvas: &mut Canvas, x: i64, y: i64, ch: char) {
    if let Err(err) = canvas.set_cell(x, y, ch) {
        trace!("skipping accent: {}", err);
    }
}

///
/// Draws the character portrait on a 100x80 canvas
///
pub fn character_art() -> Canvas {
    character_art_sized(CHARACTER_WIDTH, CHARACTER_HEIGHT)
}

///
/// Draws the character portrait on a canvas of any size
///
/// The portrait is always drawn at the same position, so a smaller canvas will crop it and a larger one will
/// leave space to the right and below.
///
pub fn character_art_sized(width: usize, height: usize) -> Canvas {
    debug!("drawing character portrait on a {}x{} canvas", width, height);

    let mut canvas = Canvas::new(width, height);

    draw_head(&mut canvas);
    draw_hair(&mut canvas);

    let left_eye    = (HEAD.0 - 9, HEAD.1 - 4);
    let right_eye   = (HEAD.0 + 9, HEAD.1 - 4);

    draw_eye(&mut canvas, left_eye);
    draw_eye(&mut canvas, right_eye);
    draw_eyebrow(&mut canvas, left_eye);
    draw_eyebrow(&mut canvas, right_eye);

    draw_nose(&mut canvas, (HEAD.0, HEAD.1 + 5));
    draw_mouth(&mut canvas, (HEAD.0, HEAD.1 + 12));

    draw_cheek(&mut canvas, (HEAD.0 - 15, HEAD.1 + 6));
    draw_cheek(&mut canvas, (HEAD.0 + 15, HEAD.1 + 6));

    draw_body(&mut canvas, (HEAD.0, HEAD.1 + HEAD_RADIUS + 20));

    canvas
}

///
/// Shaded face and a three-layer outline
///
fn draw_head(canvas: &mut Canvas) {
    let center  = point(HEAD);
    let radius  = HEAD_RADIUS as f64;

    canvas.draw_gradient_circle(center, radius, &CharacterRamp::from(FACE_RAMP));

    canvas.draw_circle(center, radius, &CircleOptions::with_char('@').thickness(1.5));
    canvas.draw_circle(center, radius - 1.0, &CircleOptions::with_char('#').thickness(1.0));
    canvas.draw_circle(center, radius - 2.0, &CircleOptions::with_char('=').thickness(0.5));
}

fn draw_hair(canvas: &mut Canvas) {
    let top = HEAD.1 - HEAD_RADIUS;

    canvas.draw_circle(point((HEAD.0, top + 6)), 9.0, &CircleOptions::with_char(':').thickness(1.2));
    canvas.draw_circle(point((HEAD.0 - 10, top + 9)), 7.0, &CircleOptions::with_char(':').thickness(1.0));
    canvas.draw_circle(point((HEAD.0 + 10, top + 9)), 7.0, &CircleOptions::with_char(':').thickness(1.0));
}

///
/// An eye is a ring, a white, an iris with its own ring, a pupil and a highlight
///
fn draw_eye(canvas: &mut Canvas, eye: (i64, i64)) {
    let center = point(eye);

    canvas.draw_circle(center, 4.5, &CircleOptions::with_char('o').thickness(1.0));
    canvas.draw_filled_circle(center, 4.0, '.');

    canvas.draw_filled_circle(center, 3.0, '*');
    canvas.draw_circle(center, 3.0, &CircleOptions::with_char('#').thickness(0.8));

    canvas.draw_filled_circle(center, 1.5, '@');

    // Highlight
    let (x, y) = eye;
    if y - 1 >= 0 && x - 1 >= 0 {
        accent(canvas, x - 1, y - 1, 'o');
        accent(canvas, x, y - 1, '.');
    }
}

fn draw_eyebrow(canvas: &mut Canvas, (x, y): (i64, i64)) {
    canvas.draw_ellipse(point((x, y - 6)), 5.0, 1.5, &EllipseOptions::with_char('=').thickness(0.8));
}

fn draw_nose(canvas: &mut Canvas, (x, y): (i64, i64)) {
    canvas.draw_circle(point((x, y + 2)), 2.0, &CircleOptions::with_char('o').thickness(0.8));
    accent(canvas, x, y + 2, 'U');

    // Nostrils
    if y + 3 < canvas.height() as i64 {
        accent(canvas, x - 2, y + 3, '(');
        accent(canvas, x + 2, y + 3, ')');
    }
}

///
/// Two lips, the corners of the mouth and an underline in whatever space is left below it
///
fn draw_mouth(canvas: &mut Canvas, (x, y): (i64, i64)) {
    canvas.draw_ellipse(point((x, y - 1)), 7.0, 2.0, &EllipseOptions::with_char('-').thickness(0.6));
    canvas.draw_ellipse(point((x, y + 2)), 8.0, 3.0, &EllipseOptions::with_char('=').thickness(0.9));

    // Both corners or neither
    if canvas.cell(x - 7, y).is_some() && canvas.cell(x + 7, y).is_some() {
        accent(canvas, x - 7, y, '(');
        accent(canvas, x + 7, y, ')');
    }

    for offset in -6..=6 {
        if let Err(err) = canvas.set_cell_if_blank(x + offset, y + 1, '_') {
            trace!("skipping underline: {}", err);
        }
    }
}

fn draw_cheek(canvas: &mut Canvas, cheek: (i64, i64)) {
    let center = point(cheek);

    canvas.draw_circle(center, 3.5, &CircleOptions::with_char(':').thickness(1.2));
    canvas.shade_region(center, 0.0, 2.5, &ShadeOptions::with_char('.'));
}

///
/// The body is a layered ellipse shaded from the outside in, with a line for each arm
///
fn draw_body(canvas: &mut Canvas, body: (i64, i64)) {
    let center = point(body);

    canvas.draw_ellipse(center, 26.0, 24.0, &EllipseOptions::with_char('#').thickness(1.8));
    canvas.draw_ellipse(center, 25.0, 23.0, &EllipseOptions::with_char('=').thickness(1.2));
    canvas.draw_ellipse(center, 24.0, 22.0, &EllipseOptions::with_char('-').thickness(0.8));

    for (radius, ch) in vec![(22.0, '.'), (18.0, ':'), (14.0, '-')] {
        canvas.shade_region(center, 0.0, radius, &ShadeOptions::with_char(ch));
    }

    let (x, y) = body;
    let arm = LineOptions::with_char('=').thickness(1.8);

    canvas.draw_line(point((x - 22, y - 8)), point((x - 32, y + 6)), &arm);
    canvas.draw_line(point((x + 22, y - 8)), point((x + 32, y + 6)), &arm);
}
