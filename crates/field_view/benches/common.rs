#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use field_view::prelude::{FieldData, Grid};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub const SIZES: [usize; 3] = [64, 256, 1000];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

pub fn bytes_throughput(bytes: usize) -> Throughput {
    Throughput::Bytes(bytes.max(1) as u64)
}

/// Square field with axes over `[-2, 2)` and a banded value pattern.
pub fn synthetic_field(n: usize) -> FieldData {
    let axis: Vec<f32> = (0..n).map(|i| -2.0 + 4.0 * i as f32 / n as f32).collect();
    let values: Vec<i32> = (0..n * n)
        .map(|i| ((i / n) * 31 + (i % n) * 17) as i32 % 256)
        .collect();
    let grid = Grid::from_vec(n, n, values).expect("valid grid");
    FieldData::new(axis.clone(), axis, grid).expect("valid field")
}
