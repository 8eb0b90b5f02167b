use glyph_canvas::*;

///
/// Draws a target with crosshairs, then saves it to target.txt
///
pub fn main() {
    let center      = (30.0, 15.0);
    let mut canvas  = Canvas::new(61, 31);

    // Rings
    for (radius, ch) in vec![(14.0, '#'), (10.0, '='), (6.0, '-')] {
        canvas.draw_circle(center, radius, &CircleOptions::with_char(ch).thickness(0.6));
    }

    // Shade between the rings without touching them
    canvas.shade_region(center, 10.5, 13.5, &ShadeOptions::with_char(':'));
    canvas.shade_region(center, 0.0, 5.5, &ShadeOptions::with_char('.'));
    canvas.draw_filled_circle(center, 1.5, '@');

    // Crosshairs (clamped, so the vertical one stops at the outer ring instead of running off the canvas)
    canvas.draw_line((14.0, 15.0), (46.0, 15.0), &LineOptions::with_char('-').thickness(0.0));
    canvas.draw_line((30.0, 1.0), (30.0, 29.0), &LineOptions::with_char('|').thickness(0.0).vertical_extent(VerticalExtent::Clamped));

    println!("{}", canvas);

    if let Err(err) = canvas.save_to_file("target.txt") {
        eprintln!("{}", err);
    }
}
