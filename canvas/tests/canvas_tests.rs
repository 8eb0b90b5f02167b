use glyph_canvas::*;

#[test]
fn new_canvas_is_blank() {
    for (width, height) in vec![(1, 1), (7, 3), (100, 80), (3, 12)] {
        let canvas  = Canvas::new(width, height);
        let text    = canvas.render();
        let lines   = text.split('\n').collect::<Vec<_>>();

        assert!(lines.len() == height, "{}x{} should have {} lines ({:?})", width, height, height, lines.len());
        assert!(lines.iter().all(|line| line.chars().count() == width), "{}x{} has a line of the wrong length", width, height);
        assert!(lines.iter().all(|line| line.chars().all(|ch| ch == BACKGROUND)), "{}x{} is not blank", width, height);
    }
}

#[test]
fn zero_sized_canvases() {
    let mut empty   = Canvas::new(0, 0);
    let mut no_cols = Canvas::new(0, 3);
    let mut no_rows = Canvas::new(4, 0);

    empty.draw_filled_circle((0.0, 0.0), 10.0, '*');
    no_cols.draw_filled_circle((0.0, 0.0), 10.0, '*');
    no_rows.draw_line((0.0, 0.0), (0.0, 10.0), &LineOptions::default());

    assert!(empty.render() == "");
    assert!(no_cols.render() == "\n\n", "{:?}", no_cols.render());
    assert!(no_rows.render() == "");
    assert!(no_rows.count('*') == 0);
}

#[test]
fn render_twice() {
    let mut canvas = Canvas::new(30, 20);

    canvas.draw_circle((15.0, 10.0), 8.0, &CircleOptions::with_char('o'));
    canvas.draw_gradient_circle((15.0, 10.0), 6.0, &CharacterRamp::default());

    let first   = canvas.render();
    let second  = canvas.render();

    assert!(first == second);
}

#[test]
fn display_matches_render() {
    let mut canvas = Canvas::new(12, 6);

    canvas.draw_ellipse((6.0, 3.0), 5.0, 2.0, &EllipseOptions::default());

    assert!(format!("{}", canvas) == canvas.render());
}

#[test]
fn rows_are_top_down() {
    let mut canvas = Canvas::new(3, 2);

    canvas.set_cell(0, 0, 'a').unwrap();
    canvas.set_cell(2, 1, 'b').unwrap();

    let rows = canvas.rows().map(|row| row.to_vec()).collect::<Vec<_>>();

    assert!(rows == vec![vec!['a', ' ', ' '], vec![' ', ' ', 'b']], "{:?}", rows);
    assert!(canvas.render() == "a  \n  b");
}

#[test]
fn set_and_read_cells() {
    let mut canvas = Canvas::new(5, 4);

    assert!(canvas.cell(4, 3) == Some(' '));
    assert!(canvas.is_blank(4, 3));

    canvas.set_cell(4, 3, 'U').unwrap();

    assert!(canvas.cell(4, 3) == Some('U'));
    assert!(!canvas.is_blank(4, 3));
    assert!(canvas.count('U') == 1);
}

#[test]
fn out_of_bounds_writes_are_errors() {
    let mut canvas  = Canvas::new(5, 4);
    let before      = canvas.clone();

    for (x, y) in vec![(-1, 0), (0, -1), (5, 0), (0, 4), (100, 100)] {
        match canvas.set_cell(x, y, '#') {
            Err(CanvasError::OutOfBounds { x: err_x, y: err_y, width: 5, height: 4 }) => {
                assert!(err_x == x && err_y == y);
            }

            other => panic!("({}, {}) should be out of bounds, got {:?}", x, y, other),
        }

        assert!(canvas.cell(x, y) == None);
        assert!(!canvas.is_blank(x, y));
    }

    assert!(canvas == before);
}

#[test]
fn set_cell_if_blank_leaves_drawn_cells() {
    let mut canvas = Canvas::new(5, 1);

    canvas.set_cell(1, 0, '(').unwrap();

    let written = (0..5).map(|x| canvas.set_cell_if_blank(x, 0, '_').unwrap()).collect::<Vec<_>>();

    assert!(written == vec![true, false, true, true, true]);
    assert!(canvas.render() == "_(___");
    assert!(canvas.set_cell_if_blank(5, 0, '_').is_err());
}

#[test]
fn custom_stamp() {
    let mut canvas = Canvas::new(4, 4);

    // Checkerboard
    canvas.stamp(Compositing::Overwrite, |x, y| if (x + y) as i64 % 2 == 0 { Some('#') } else { None });

    // Fill the gaps
    canvas.stamp(Compositing::IfBlank, |_, _| Some('.'));

    assert!(canvas.render() == "#.#.\n.#.#\n#.#.\n.#.#", "{}", canvas.render());
}
