use super::*;

#[test]
fn window_progress_is_clamped() {
    let w = TimingWindow::new(24.0, 54.0);
    assert_eq!(w.progress(0.0), 0.0);
    assert_eq!(w.progress(24.0), 0.0);
    assert!((w.progress(39.0) - 0.5).abs() < 1e-12);
    assert_eq!(w.progress(54.0), 1.0);
    assert_eq!(w.progress(1000.0), 1.0);
}

#[test]
fn staggered_windows_shift_by_index() {
    let w = TimingWindow::staggered(3, 3.0, 15.0);
    assert_eq!(w.start, 9.0);
    assert_eq!(w.end, 24.0);
    assert_eq!(TimingWindow::staggered(0, 3.0, 15.0).start, 0.0);
}

#[test]
fn local_frame_shifts_origin() {
    assert_eq!(local_frame(100.0, 81.0), 19.0);
    assert_eq!(local_frame(10.0, 81.0), -71.0);
}

#[test]
fn blink_alternates_by_period() {
    let period = 16.5;
    assert!(blink_on(0.0, period));
    assert!(blink_on(16.0, period));
    assert!(!blink_on(17.0, period));
    assert!(!blink_on(32.0, period));
    assert!(blink_on(33.0, period));
    assert!(blink_on(5.0, 0.0));
}
