use glyph_canvas::*;

///
/// Prints a shaded sphere made out of characters
///
pub fn main() {
    let mut canvas = Canvas::new(60, 30);

    // The ramp runs from the center to the edge, so put the brightest characters first to get a highlight
    canvas.draw_gradient_circle((26.0, 12.0), 20.0, &CharacterRamp::from("@#*+=-:. "));
    canvas.draw_circle((30.0, 15.0), 14.0, &CircleOptions::with_char('#').thickness(0.5));
    canvas.clear_circle((30.0, 15.0), 13.0);
    canvas.draw_gradient_circle((26.0, 11.0), 13.0, &CharacterRamp::default());

    println!("{}", canvas);
}
