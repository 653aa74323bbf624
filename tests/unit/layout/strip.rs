use super::*;

#[test]
fn strip_is_one_row_sum_of_widths_max_of_heights() {
    let images = vec![
        Image::solid(2, 3, [1, 1, 1]),
        Image::solid(4, 1, [2, 2, 2]),
        Image::solid(1, 2, [3, 3, 3]),
    ];
    let strip = StripDescriptor::for_images(&images).unwrap();
    assert_eq!(strip.total_width, 7);
    assert_eq!(strip.height, 3);
    assert_eq!(strip.x_offsets, vec![0, 2, 6]);

    let canvas = compose_strip(&images).unwrap();
    assert_eq!(canvas.dimensions(), (7, 3));
    assert_eq!(canvas.pixel(2, 0), Some([2, 2, 2]));
    assert_eq!(canvas.pixel(6, 1), Some([3, 3, 3]));
}

#[test]
fn shorter_images_leave_background_beneath() {
    let images = vec![Image::solid(1, 3, [9, 9, 9]), Image::solid(1, 1, [5, 5, 5])];
    let canvas = compose_strip(&images).unwrap();
    assert_eq!(canvas.pixel(1, 0), Some([5, 5, 5]));
    assert_eq!(canvas.pixel(1, 1), Some([0, 0, 0]));
    assert_eq!(canvas.pixel(1, 2), Some([0, 0, 0]));
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(compose_strip(&[]), Err(TilefadeError::EmptyInput)));
}
