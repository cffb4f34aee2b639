use super::*;

#[test]
fn clamped_pins_outside_the_window() {
    for f in [-50.0, -1.0, 0.0, 9.99] {
        assert_eq!(interpolate_clamped(f, [10.0, 20.0], [3.0, 7.0]), 3.0);
    }
    for f in [20.0, 20.01, 400.0] {
        assert_eq!(interpolate_clamped(f, [10.0, 20.0], [3.0, 7.0]), 7.0);
    }
}

#[test]
fn clamped_is_monotonic_inside_the_window() {
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=100 {
        let f = 10.0 + f64::from(i) * 0.1;
        let v = interpolate_clamped(f, [10.0, 20.0], [0.0, 1.0]);
        assert!(v >= prev);
        prev = v;
    }

    let mut prev = f64::INFINITY;
    for i in 0..=100 {
        let f = f64::from(i);
        let v = interpolate(
            f,
            [0.0, 100.0],
            [1.0, 0.0],
            InterpolateOpts::clamped().with_easing(Ease::InCubic),
        );
        assert!(v <= prev);
        prev = v;
    }
}

#[test]
fn extend_extrapolates_linearly() {
    let v = interpolate(
        15.0,
        [0.0, 10.0],
        [0.0, 1.0],
        InterpolateOpts::extended(),
    );
    assert!((v - 1.5).abs() < 1e-12);
    let v = interpolate(-5.0, [0.0, 10.0], [0.0, 1.0], InterpolateOpts::extended());
    assert!((v + 0.5).abs() < 1e-12);
}

#[test]
fn sides_are_independent() {
    let opts = InterpolateOpts::extended().right(Extrapolate::Clamp);
    assert_eq!(interpolate(30.0, [0.0, 10.0], [0.0, 1.0], opts), 1.0);
    assert!((interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], opts) + 1.0).abs() < 1e-12);

    let opts = InterpolateOpts::clamped().left(Extrapolate::Identity);
    assert_eq!(interpolate(-7.0, [0.0, 10.0], [0.0, 1.0], opts), -7.0);
}

#[test]
fn easing_applies_only_inside() {
    let opts = InterpolateOpts::clamped().with_easing(Ease::OutCubic);
    let v = interpolate(5.0, [0.0, 10.0], [0.0, 100.0], opts);
    assert!((v - 87.5).abs() < 1e-9);
}

#[test]
fn zero_width_returns_first_output() {
    assert_eq!(interpolate_clamped(3.0, [5.0, 5.0], [1.0, 2.0]), 1.0);
}

#[test]
fn multi_point_selects_segment() {
    let opts = InterpolateOpts::clamped();
    let input = [0.0, 10.0, 20.0];
    let output = [0.0, 1.0, 0.0];
    assert!((interpolate_multi(5.0, &input, &output, opts).unwrap() - 0.5).abs() < 1e-12);
    assert!((interpolate_multi(15.0, &input, &output, opts).unwrap() - 0.5).abs() < 1e-12);
    assert_eq!(interpolate_multi(-3.0, &input, &output, opts).unwrap(), 0.0);
    assert_eq!(interpolate_multi(99.0, &input, &output, opts).unwrap(), 0.0);
    assert_eq!(interpolate_multi(10.0, &input, &output, opts).unwrap(), 1.0);
}

#[test]
fn multi_point_rejects_bad_ranges() {
    let opts = InterpolateOpts::clamped();
    assert!(interpolate_multi(0.0, &[0.0, 1.0], &[0.0], opts).is_err());
    assert!(interpolate_multi(0.0, &[0.0], &[0.0], opts).is_err());
    assert!(interpolate_multi(0.0, &[0.0, 0.0], &[0.0, 1.0], opts).is_err());
    assert!(interpolate_multi(0.0, &[0.0, f64::NAN], &[0.0, 1.0], opts).is_err());
}
