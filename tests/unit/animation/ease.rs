use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InSine,
    Ease::OutSine,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_cubic_front_loads_progress() {
    assert!((Ease::OutCubic.apply(0.5) - 0.875).abs() < 1e-12);
    assert!((Ease::InCubic.apply(0.5) - 0.125).abs() < 1e-12);
    assert!((Ease::OutQuad.apply(0.5) - 0.75).abs() < 1e-12);
}

#[test]
fn input_outside_unit_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-1.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(3.0), 1.0);
}

#[test]
fn bezier_endpoints_and_linear_diagonal() {
    let ease = Ease::Bezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };
    assert!(ease.apply(0.0).abs() < 1e-9);
    assert!((ease.apply(1.0) - 1.0).abs() < 1e-9);

    let diagonal = Ease::Bezier {
        x1: 1.0 / 3.0,
        y1: 1.0 / 3.0,
        x2: 2.0 / 3.0,
        y2: 2.0 / 3.0,
    };
    assert!((diagonal.apply(0.4) - 0.4).abs() < 1e-2);
}
