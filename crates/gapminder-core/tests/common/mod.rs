// File: crates/gapminder-core/tests/common/mod.rs
// Purpose: Shared fixture loading for integration tests.

#![allow(dead_code)]

use gapminder_core::Dataset;

pub const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/gapminder_sample.csv");

pub fn fixture() -> Dataset {
    Dataset::from_path(FIXTURE).expect("fixture loads")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
