use glyph_canvas::*;
use glyph_canvas::geometry::*;

use itertools::*;

fn all_cells(canvas: &Canvas) -> impl Iterator<Item=(i64, i64)> {
    iproduct!(0..(canvas.height() as i64), 0..(canvas.width() as i64)).map(|(y, x)| (x, y))
}

#[test]
fn shading_does_not_touch_drawn_cells() {
    let center      = (12.0, 10.0);
    let mut canvas  = Canvas::new(25, 21);

    canvas.draw_filled_circle(center, 4.0, '*');
    canvas.draw_circle(center, 6.0, &CircleOptions::with_char('o').thickness(0.5));

    let before = canvas.clone();
    canvas.shade_region(center, 0.0, 9.0, &ShadeOptions::with_char('.'));

    for (x, y) in all_cells(&canvas) {
        let was     = before.cell(x, y).unwrap();
        let now     = canvas.cell(x, y).unwrap();
        let dist    = distance((x as f64, y as f64), center);

        if was != BACKGROUND {
            assert!(now == was, "({}, {}) was {:?} and is now {:?}", x, y, was, now);
        } else if dist <= 9.0 {
            assert!(now == '.', "({}, {}) should have been shaded", x, y);
        } else {
            assert!(now == BACKGROUND, "({}, {}) is outside the annulus", x, y);
        }
    }
}

#[test]
fn shading_an_annulus() {
    let center      = (10.0, 10.0);
    let mut canvas  = Canvas::new(21, 21);

    canvas.shade_region(center, 3.0, 5.0, &ShadeOptions::default());

    assert!(canvas.cell(10, 10) == Some(' '));
    assert!(canvas.cell(10, 8) == Some(' '));
    assert!(canvas.cell(10, 7) == Some('-'));
    assert!(canvas.cell(10, 5) == Some('-'));
    assert!(canvas.cell(10, 4) == Some(' '));

    for (x, y) in all_cells(&canvas) {
        let dist = distance((x as f64, y as f64), center);
        assert!((3.0 <= dist && dist <= 5.0) == (canvas.cell(x, y) == Some('-')), "({}, {})", x, y);
    }
}

#[test]
fn nested_shading_keeps_outer_layer() {
    let mut canvas = Canvas::new(21, 21);

    // Shade the larger region first, so the smaller ones have no blank cells left to paint
    canvas.shade_region((10.0, 10.0), 0.0, 8.0, &ShadeOptions::with_char('.'));
    canvas.shade_region((10.0, 10.0), 0.0, 4.0, &ShadeOptions::with_char(':'));

    assert!(canvas.count(':') == 0);
    assert!(canvas.cell(10, 10) == Some('.'));
}

#[test]
fn gradient_index_increases_with_distance() {
    let center      = (15.0, 15.0);
    let radius      = 12.0;
    let ramp        = CharacterRamp::from("abc");
    let mut canvas  = Canvas::new(31, 31);

    canvas.draw_gradient_circle(center, radius, &ramp);

    let mut samples = all_cells(&canvas)
        .map(|(x, y)| (distance((x as f64, y as f64), center), canvas.cell(x, y).unwrap()))
        .filter(|(dist, _)| *dist <= radius)
        .map(|(dist, ch)| (dist, ramp.chars().iter().position(|c| *c == ch).expect("cell inside the circle should be painted")))
        .collect::<Vec<_>>();

    samples.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap());

    for ((near_dist, near_idx), (far_dist, far_idx)) in samples.iter().tuple_windows() {
        assert!(near_idx <= far_idx, "{} at {} is further out than {} at {}", near_idx, near_dist, far_idx, far_dist);
    }

    // Center uses the first character, the edge uses the last
    assert!(canvas.cell(15, 15) == Some('a'));
    assert!(canvas.cell(15, 3) == Some('c'));
    assert!(canvas.cell(15, 2) == Some(' '));
}

#[test]
fn gradient_bands() {
    let mut canvas = Canvas::new(21, 1);

    canvas.draw_gradient_circle((10.0, 0.0), 10.0, &CharacterRamp::from("abc"));

    // floor(d/10 * 2): 'a' until halfway, 'b' until the edge, 'c' only at the edge
    assert!(canvas.render() == "cbbbbbaaaaaaaaabbbbbc", "{:?}", canvas.render());
}

#[test]
fn gradient_only_paints_blank_cells() {
    let mut canvas = Canvas::new(21, 21);

    canvas.draw_circle((10.0, 10.0), 8.0, &CircleOptions::with_char('O').thickness(0.5));
    let before = canvas.clone();

    canvas.draw_gradient_circle((10.0, 10.0), 9.0, &CharacterRamp::default());

    // The outline survives, and the last ramp character only appears at the edge of the gradient
    for (x, y) in all_cells(&canvas) {
        if before.cell(x, y) == Some('O') {
            assert!(canvas.cell(x, y) == Some('O'), "outline at ({}, {}) was painted over", x, y);
        }
    }

    assert!(canvas.count('O') == before.count('O'));
    assert!(canvas.cell(10, 10) == Some('.'));
    assert!(canvas.cell(10, 1) == Some('@'));
}

#[test]
fn spaces_in_a_ramp_stay_blank() {
    let mut canvas = Canvas::new(21, 21);

    canvas.draw_gradient_circle((10.0, 10.0), 10.0, &CharacterRamp::from("  #"));
    assert!(canvas.is_blank(10, 10));

    // Still blank, so a later shading pass can paint it
    canvas.shade_region((10.0, 10.0), 0.0, 1.0, &ShadeOptions::with_char('.'));
    assert!(canvas.cell(10, 10) == Some('.'));
}

#[test]
fn empty_ramp_draws_nothing() {
    let mut canvas = Canvas::new(10, 10);

    canvas.draw_gradient_circle((5.0, 5.0), 4.0, &CharacterRamp::new(vec![]));

    assert!(canvas == Canvas::new(10, 10));
}

#[test]
fn zero_radius_gradient() {
    let mut canvas = Canvas::new(5, 5);

    canvas.draw_gradient_circle((2.0, 2.0), 0.0, &CharacterRamp::from("xyz"));

    assert!(canvas.cell(2, 2) == Some('x'));
    assert!(canvas.count('x') == 1);
    assert!(canvas.count(' ') == 24);
}
