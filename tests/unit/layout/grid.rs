use super::*;

fn sized(sizes: &[(u32, u32)]) -> Vec<Image> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| Image::solid(w, h, [i as u8 + 1, 0, 0]))
        .collect()
}

#[test]
fn near_square_dims_follow_ceil_sqrt() {
    assert_eq!(near_square_dims(0), None);
    assert_eq!(near_square_dims(1), Some((1, 1)));
    assert_eq!(near_square_dims(2), Some((2, 1)));
    assert_eq!(near_square_dims(4), Some((2, 2)));
    assert_eq!(near_square_dims(5), Some((3, 2)));
    assert_eq!(near_square_dims(9), Some((3, 3)));
    assert_eq!(near_square_dims(10), Some((4, 3)));

    for n in 1..200usize {
        let (cols, rows) = near_square_dims(n).unwrap();
        let expected_cols = (n as f64).sqrt().ceil() as usize;
        assert_eq!(cols, expected_cols, "n={n}");
        assert_eq!(rows, n.div_ceil(cols), "n={n}");
    }
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(compose_grid(&[]), Err(TilefadeError::EmptyInput)));
}

#[test]
fn canvas_is_sum_of_column_and_row_maxima() {
    // 5 images -> 3 columns x 2 rows.
    let images = sized(&[(4, 2), (1, 5), (3, 3), (6, 1), (2, 2)]);
    let grid = GridDescriptor::for_images(&images).unwrap();
    assert_eq!((grid.cols, grid.rows), (3, 2));
    assert_eq!(grid.col_widths, vec![6, 2, 3]);
    assert_eq!(grid.row_heights, vec![5, 2]);

    let canvas = compose_grid(&images).unwrap();
    assert_eq!(canvas.dimensions(), (11, 7));
}

#[test]
fn images_are_anchored_top_left_leaving_gaps() {
    let images = sized(&[(2, 2), (1, 1), (1, 1), (2, 2)]);
    let canvas = compose_grid(&images).unwrap();
    assert_eq!(canvas.dimensions(), (4, 4));

    // Second image sits at x=2 (width of column 0), y=0.
    assert_eq!(canvas.pixel(2, 0), Some([2, 0, 0]));
    // The rest of its 2x2 cell is background.
    assert_eq!(canvas.pixel(3, 0), Some([0, 0, 0]));
    assert_eq!(canvas.pixel(2, 1), Some([0, 0, 0]));
    // Third image starts the second row.
    assert_eq!(canvas.pixel(0, 2), Some([3, 0, 0]));
    assert_eq!(canvas.pixel(3, 3), Some([4, 0, 0]));
}

#[test]
fn single_image_is_unchanged() {
    let img = Image::from_rgb8(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let canvas = compose_grid(std::slice::from_ref(&img)).unwrap();
    assert_eq!(canvas, Canvas::from_image(&img));
}

#[test]
fn partial_last_row_keeps_row_major_origins() {
    let images = sized(&[(1, 1); 3]);
    let grid = GridDescriptor::for_images(&images).unwrap();
    assert_eq!(grid.cell(2), (1, 0));
    assert_eq!(&grid.cell_origins()[..3], &[(0, 0), (1, 0), (0, 1)]);
}
