//! Reference packages with their expected outcome, shared by the
//! `sort_samples` binary and the integration tests.

use crate::domain::model::{Category, Package};

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub label: &'static str,
    pub package: Package,
    /// `None` when the package must be refused as an invalid measurement.
    pub expected: Option<Category>,
}

const fn sample(
    label: &'static str,
    dims: [f64; 3],
    mass: f64,
    expected: Option<Category>,
) -> Sample {
    Sample {
        label,
        package: Package {
            width: dims[0],
            height: dims[1],
            length: dims[2],
            mass,
        },
        expected,
    }
}

pub const SAMPLES: &[Sample] = &[
    sample("standard", [10.0, 10.0, 10.0], 5.0, Some(Category::Standard)),
    sample("bulky by volume", [100.0, 100.0, 100.0], 5.0, Some(Category::Special)),
    sample("bulky by dimension", [150.0, 10.0, 10.0], 5.0, Some(Category::Special)),
    sample("heavy", [10.0, 10.0, 10.0], 20.0, Some(Category::Special)),
    sample("heavy and bulky", [150.0, 100.0, 100.0], 25.0, Some(Category::Rejected)),
    sample("edge volume", [100.0, 100.0, 100.0], 10.0, Some(Category::Special)),
    sample("edge dimension", [150.0, 10.0, 10.0], 10.0, Some(Category::Special)),
    sample("under thresholds", [99.9, 99.9, 99.9], 19.9, Some(Category::Standard)),
    sample("float dimensions", [10.5, 10.5, 10.5], 5.5, Some(Category::Standard)),
    sample("large package", [200.0, 50.0, 50.0], 15.0, Some(Category::Special)),
    sample("very heavy but small", [5.0, 5.0, 5.0], 50.0, Some(Category::Special)),
    sample("negative width", [-10.0, 10.0, 10.0], 5.0, None),
    sample("zero mass", [10.0, 10.0, 10.0], 0.0, None),
];
