use super::*;

fn canvas(w: u32, h: u32, px: [u8; 3]) -> Canvas {
    Canvas::from_rgb8(w, h, px.repeat((w * h) as usize)).unwrap()
}

fn gradient(w: u32, h: u32, seed: u8) -> Canvas {
    let data = (0..(w * h * 3) as usize)
        .map(|i| (i as u8).wrapping_mul(37).wrapping_add(seed))
        .collect();
    Canvas::from_rgb8(w, h, data).unwrap()
}

#[test]
fn mix_channel_endpoints_and_midpoint() {
    assert_eq!(mix_channel(10, 200, 0.0), 10);
    assert_eq!(mix_channel(10, 200, 1.0), 200);
    assert_eq!(mix_channel(0, 255, 0.5), 128);
    assert_eq!(mix_channel(100, 0, 0.5), 50);
}

#[test]
fn alpha_outside_unit_range_extrapolates_then_clamps() {
    assert_eq!(mix_channel(100, 200, 1.5), 250);
    assert_eq!(mix_channel(100, 200, 2.0), 255);
    assert_eq!(mix_channel(100, 200, -1.5), 0);
}

#[test]
fn blend_0_is_a_and_1_is_b() {
    let a = gradient(5, 3, 7);
    let b = gradient(5, 3, 91);
    assert_eq!(blend(&a, &b, 0.0).unwrap(), a);
    assert_eq!(blend(&a, &b, 1.0).unwrap(), b);
}

#[test]
fn blend_rounds_per_channel() {
    let a = canvas(2, 2, [0, 10, 255]);
    let b = canvas(2, 2, [255, 11, 0]);
    let out = blend(&a, &b, 0.25).unwrap();
    assert_eq!(out.pixel(1, 1), Some([64, 10, 191]));
}

#[test]
fn mismatched_dimensions_fail() {
    let a = canvas(2, 2, [0, 0, 0]);
    let b = canvas(3, 2, [0, 0, 0]);
    assert!(matches!(
        blend(&a, &b, 0.5),
        Err(TilefadeError::DimensionMismatch {
            a_width: 2,
            a_height: 2,
            b_width: 3,
            b_height: 2
        })
    ));
}

#[test]
fn non_finite_alpha_fails() {
    let a = canvas(1, 1, [0, 0, 0]);
    assert!(blend(&a, &a, f64::NAN).is_err());
    assert!(blend(&a, &a, f64::INFINITY).is_err());
}
