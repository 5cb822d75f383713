// File: crates/gapminder-core/tests/line.rs
// Purpose: Country line chart: filtering, NA exclusion, year ordering and scale endpoints.

mod common;

use common::approx;
use gapminder_core::line::country_series;
use gapminder_core::{Field, LineChart, LineConfig, Node, Theme, VizError};

#[test]
fn country_rows_sorted_by_year_without_missing_population() {
    let ds = common::fixture();
    let series = country_series(&ds, "India", Field::Year, Field::Population).unwrap();
    let years = series.iter().map(|p| p.0).collect::<Vec<_>>();
    // 2016 has population NA and is dropped; 1970 precedes 1960 in the file.
    assert_eq!(years, vec![1960.0, 1970.0, 1980.0]);
    assert!(approx(series[0].1, 449_661_874.0));
}

#[test]
fn chart_uses_full_dataset_not_the_year_view() {
    let ds = common::fixture();
    let chart = LineChart::build(&ds, "China", &LineConfig::default()).unwrap();
    assert_eq!(chart.points.len(), 3);
    assert!(approx(chart.limits.x.min, 1960.0));
    assert!(approx(chart.limits.x.max, 1980.0));
    assert!(approx(chart.x_scale.map(1960.0 - 0.5), 100.0));
    assert!(approx(chart.x_scale.map(1980.0 + 0.5), 500.0));
    assert!(approx(chart.y_scale.map(chart.limits.y.max + 5.0), 50.0));
    assert!(approx(chart.y_scale.map(chart.limits.y.min - 5.0), 450.0));
}

#[test]
fn scene_has_one_path_through_every_point() {
    let ds = common::fixture();
    let chart = LineChart::build(&ds, "India", &LineConfig::default()).unwrap();
    let scene = chart.scene(&Theme::light());
    assert_eq!((scene.width, scene.height), (550, 550));
    let paths = scene
        .nodes
        .iter()
        .filter_map(|n| match n {
            Node::Polyline { points, .. } => Some(points),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 3);
    assert!(paths[0].windows(2).all(|w| w[0].0 < w[1].0));

    let texts = scene.texts().map(|t| t.text.as_str()).collect::<Vec<_>>();
    assert!(texts.contains(&"Population over Time"));
    assert!(texts.contains(&"Year"));
    assert!(texts.contains(&"1970"));
    assert!(!texts.iter().any(|t| *t == "1,970"));
}

#[test]
fn unknown_country_is_an_empty_selection() {
    let ds = common::fixture();
    assert!(matches!(
        LineChart::build(&ds, "Atlantis", &LineConfig::default()),
        Err(VizError::EmptySelection { .. })
    ));
}
