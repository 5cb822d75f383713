// File: crates/gapminder-core/tests/scatter.rs
// Purpose: Scatter builder properties: year filter, scale endpoints, radius monotonicity, labels, hit testing.

mod common;

use common::approx;
use gapminder_core::{MissingPolicy, ScatterConfig, ScatterPlot, Theme, VizError};

#[test]
fn points_are_the_rows_of_the_year() {
    let ds = common::fixture();
    let plot = ScatterPlot::build(&ds, &ScatterConfig::default()).unwrap();
    let countries = plot.points.iter().map(|p| p.country.as_str()).collect::<Vec<_>>();
    // Chad has no fertility for 1980 and is skipped.
    assert_eq!(countries, vec!["Albania", "China", "India", "Niger"]);

    let mut cfg = ScatterConfig::default();
    cfg.missing = MissingPolicy::Zero;
    let plot = ScatterPlot::build(&ds, &cfg).unwrap();
    assert_eq!(plot.points.len(), ds.for_year("1980").len());
    assert!(approx(plot.limits.x.min, 0.0));
}

#[test]
fn error_policy_fails_on_missing_value() {
    let ds = common::fixture();
    let mut cfg = ScatterConfig::default();
    cfg.missing = MissingPolicy::Error;
    assert!(matches!(ScatterPlot::build(&ds, &cfg), Err(VizError::MissingValue { .. })));
}

#[test]
fn unknown_year_is_an_empty_selection() {
    let ds = common::fixture();
    let mut cfg = ScatterConfig::default();
    cfg.year = "1900".to_string();
    assert!(matches!(ScatterPlot::build(&ds, &cfg), Err(VizError::EmptySelection { .. })));
}

#[test]
fn extents_map_to_range_ends_with_buffer() {
    let ds = common::fixture();
    let plot = ScatterPlot::build(&ds, &ScatterConfig::default()).unwrap();
    assert!(approx(plot.limits.x.min, 2.63));
    assert!(approx(plot.limits.x.max, 7.73));
    assert!(approx(plot.limits.y.min, 40.6));
    assert!(approx(plot.limits.y.max, 70.5));

    // Padded domain ends land exactly on the pixel range ends.
    assert!(approx(plot.x_scale.map(plot.limits.x.min - 0.5), 50.0));
    assert!(approx(plot.x_scale.map(plot.limits.x.max + 0.5), 700.0));
    assert!(approx(plot.y_scale.map(plot.limits.y.max + 5.0), 50.0));
    assert!(approx(plot.y_scale.map(plot.limits.y.min - 5.0), 450.0));

    // Raw extremes sit one buffer inside.
    let px_per_unit = 650.0 / (7.73 - 2.63 + 1.0);
    assert!(approx(plot.x_scale.map(plot.limits.x.min), 50.0 + 0.5 * px_per_unit));
    let inv = plot.x_scale.invert(plot.x_scale.map(4.2));
    assert!(approx(inv, 4.2));
}

#[test]
fn radius_grows_with_population() {
    let ds = common::fixture();
    let plot = ScatterPlot::build(&ds, &ScatterConfig::default()).unwrap();
    let mut pts = plot.points.clone();
    pts.sort_by(|a, b| a.size.total_cmp(&b.size));
    assert!(pts.windows(2).all(|w| w[0].radius <= w[1].radius));
    assert!((pts.first().unwrap().radius - 3.0).abs() < 1e-4);
    assert!((pts.last().unwrap().radius - 20.0).abs() < 1e-4);

    for pop in [1.0e6, 5.0e7, 2.0e8, 9.0e8] {
        assert!(plot.size_scale.map(pop) <= plot.size_scale.map(pop * 1.1));
    }
}

#[test]
fn only_large_countries_are_labelled() {
    let ds = common::fixture();
    let plot = ScatterPlot::build(&ds, &ScatterConfig::default()).unwrap();
    let labelled = plot.points.iter().filter(|p| p.labelled).map(|p| p.country.as_str()).collect::<Vec<_>>();
    assert_eq!(labelled, vec!["China", "India"]);

    let scene = plot.scene(&Theme::light());
    assert_eq!(scene.circles().count(), 4);
    let texts = scene.texts().map(|t| t.text.as_str()).collect::<Vec<_>>();
    assert!(texts.contains(&"China"));
    assert!(texts.contains(&"India"));
    assert!(!texts.contains(&"Niger"));
    assert!(texts.contains(&"Fertility Rates (Avg Children per Woman)"));
    assert!(texts.contains(&"Life Expectancy (years)"));

    let china = plot.points.iter().find(|p| p.country == "China").unwrap();
    let label = scene.texts().find(|t| t.text == "China").unwrap();
    assert_eq!(label.pos, (china.px + 20.0, china.py + 5.0));
}

#[test]
fn hit_test_prefers_topmost_circle() {
    let ds = common::fixture();
    let plot = ScatterPlot::build(&ds, &ScatterConfig::default()).unwrap();
    let india = plot.points.iter().find(|p| p.country == "India").unwrap();
    let hit = plot.hit_test(india.px, india.py).unwrap();
    assert_eq!(hit.country, "India");
    assert!(plot.hit_test(1.0, 1.0).is_none());
}
