use super::*;
use crate::effects::blend::blend;

fn px(rgb: [u8; 3]) -> Canvas {
    Canvas::from_rgb8(1, 1, rgb.to_vec()).unwrap()
}

#[test]
fn length_is_four_steps_plus_two() {
    let a = px([0, 0, 0]);
    let b = px([255, 255, 255]);
    for steps in [1u32, 2, 3, 10, 17] {
        let frames = sequence(&a, &b, steps).unwrap();
        assert_eq!(frames.len(), 4 * steps as usize + 2);
        assert_eq!(TransitionSequence::new(&a, &b, steps).unwrap().len(), frames.len());
    }
}

#[test]
fn zero_steps_is_rejected() {
    let a = px([0, 0, 0]);
    assert!(matches!(
        sequence(&a, &a, 0),
        Err(TilefadeError::InvalidSteps)
    ));
}

#[test]
fn mismatched_canvases_are_rejected() {
    let a = px([0, 0, 0]);
    let b = Canvas::new(2, 1);
    assert!(matches!(
        TransitionSequence::new(&a, &b, 3),
        Err(TilefadeError::DimensionMismatch { .. })
    ));
}

#[test]
fn steps_2_walks_hold_fade_hold_fade_back() {
    let a = px([0, 0, 0]);
    let b = px([200, 100, 50]);
    let mid = px([100, 50, 25]);

    let frames = sequence(&a, &b, 2).unwrap();
    assert_eq!(
        frames,
        vec![
            a.clone(),
            a.clone(),
            a.clone(),
            mid.clone(),
            b.clone(),
            b.clone(),
            b.clone(),
            b.clone(),
            mid,
            a,
        ]
    );
}

#[test]
fn frames_match_blend_at_their_spec() {
    let a = Canvas::from_rgb8(2, 1, vec![10, 20, 30, 40, 50, 60]).unwrap();
    let b = Canvas::from_rgb8(2, 1, vec![250, 0, 125, 3, 99, 180]).unwrap();
    let seq = TransitionSequence::new(&a, &b, 4).unwrap();

    for (idx, frame) in seq.iter().enumerate() {
        let spec = seq.frame_spec(idx).unwrap();
        let expected = match spec.phase {
            Phase::FadeBack => blend(&b, &a, spec.alpha).unwrap(),
            _ => blend(&a, &b, spec.alpha).unwrap(),
        };
        assert_eq!(frame, expected, "frame {idx}");
    }
}

#[test]
fn phase_boundaries_for_steps_3() {
    let a = px([0, 0, 0]);
    let seq = TransitionSequence::new(&a, &a, 3).unwrap();
    let phases: Vec<Phase> = (0..seq.len())
        .map(|i| seq.frame_spec(i).unwrap().phase)
        .collect();
    use Phase::*;
    assert_eq!(
        phases,
        vec![
            HoldFirst, HoldFirst, HoldFirst, FadeForward, FadeForward, FadeForward, FadeForward,
            HoldSecond, HoldSecond, HoldSecond, FadeBack, FadeBack, FadeBack, FadeBack,
        ]
    );
    assert_eq!(seq.frame_spec(5).unwrap().alpha, 2.0 / 3.0);
    assert_eq!(seq.frame_spec(seq.len()), None);
    assert!(seq.frame(seq.len()).is_none());
}

#[test]
fn identical_endpoints_give_a_constant_sequence() {
    let a = Canvas::from_rgb8(2, 2, (0..12).map(|v| v * 20).collect()).unwrap();
    let frames = sequence(&a, &a, 5).unwrap();
    assert!(frames.iter().all(|f| *f == a));
}

#[test]
fn iteration_is_restartable_and_exact_size() {
    let a = px([1, 2, 3]);
    let b = px([4, 5, 6]);
    let seq = TransitionSequence::new(&a, &b, 3).unwrap();

    let mut it = seq.iter();
    assert_eq!(it.len(), 14);
    it.next();
    assert_eq!(it.len(), 13);

    let first_pass: Vec<Canvas> = seq.iter().collect();
    let second_pass: Vec<Canvas> = (&seq).into_iter().collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass.len(), 14);
}
