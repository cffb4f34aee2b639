use super::*;

fn fps() -> Fps {
    Fps::whole(30).unwrap()
}

#[test]
fn bars_grow_in_sequence_to_their_share_of_the_max() {
    let chart = HorizontalBarChart::drilldown();
    assert!(chart.width_percents(0.0, fps()).iter().all(|w| *w == 0.0));

    let mid = chart.width_percents(10.0, fps());
    assert!(mid[0] > mid[1] && mid[1] > 0.0);
    assert_eq!(mid[4], 0.0);

    let done = chart.width_percents(100.0, fps());
    assert!((done[0] - 100.0).abs() < 1e-9);
    assert!((done[3] - 21.7 / 78.9 * 100.0).abs() < 1e-9);
}

#[test]
fn bar_labels_use_one_decimal() {
    let node = HorizontalBarChart::drilldown().render(100.0, fps(), Size::new(232.0, 122.0));
    let texts = node.texts();
    assert!(texts.contains(&"78.0"));
    assert!(texts.contains(&"21.7"));
}

#[test]
fn stacked_columns_rise_with_stagger() {
    assert_eq!(StackedBarChart::column_progress(0.0, fps()), [0.0; 5]);
    let p = StackedBarChart::column_progress(21.0, fps());
    assert!((p[0] - 1.0).abs() < 1e-9);
    assert!((p[4] - 0.5).abs() < 1e-6);
    assert!(p.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn candle_geometry_grows_from_body_bottom() {
    let flat = CandlestickChart::geometry(0, 0.0);
    assert_eq!(flat.body_height, 3.0);
    assert_eq!(flat.wick_top, flat.wick_bottom);

    let full = CandlestickChart::geometry(0, 1.0);
    assert!(full.up);
    let scale = 92.0 / 36.0;
    assert!((full.body_top - (14.0 + 20.0 * scale)).abs() < 1e-9);
    assert!((full.body_height - 10.0 * scale).abs() < 1e-9);
    assert!((full.wick_top - (14.0 + 14.0 * scale)).abs() < 1e-9);

    assert!((CandlestickChart::geometry(9, 1.0).x - 208.0).abs() < 1e-9);
    assert!(!CandlestickChart::geometry(2, 1.0).up);
}

#[test]
fn candles_fade_in_over_two_point_two_seconds() {
    assert_eq!(CandlestickChart::reveal(0.0, fps()), 0.0);
    assert!((CandlestickChart::reveal(33.0, fps()) - 0.5).abs() < 1e-9);
    assert_eq!(CandlestickChart::reveal(90.0, fps()), 1.0);
}
