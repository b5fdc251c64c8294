use crate::domain::model::{Category, Classification, Package};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_measurement, Validate};

/// Volume in cm³ at or above which a package is bulky.
pub const BULKY_VOLUME_CM3: f64 = 1_000_000.0;

/// Any single dimension in cm at or above which a package is bulky.
pub const BULKY_DIMENSION_CM: f64 = 150.0;

/// Mass in kg at or above which a package is heavy.
pub const HEAVY_MASS_KG: f64 = 20.0;

impl Validate for Package {
    fn validate(&self) -> Result<()> {
        validate_positive_measurement("width", self.width)?;
        validate_positive_measurement("height", self.height)?;
        validate_positive_measurement("length", self.length)?;
        validate_positive_measurement("mass", self.mass)
    }
}

pub fn is_bulky(package: &Package) -> bool {
    package.volume() >= BULKY_VOLUME_CM3
        || [package.width, package.height, package.length]
            .iter()
            .any(|&dim| dim >= BULKY_DIMENSION_CM)
}

pub fn is_heavy(package: &Package) -> bool {
    package.mass >= HEAVY_MASS_KG
}

pub fn category_for(bulky: bool, heavy: bool) -> Category {
    match (bulky, heavy) {
        (true, true) => Category::Rejected,
        (true, false) | (false, true) => Category::Special,
        (false, false) => Category::Standard,
    }
}

/// Classifies a package by its dimensions (cm) and mass (kg).
///
/// Fails with `InvalidMeasurement` naming the first of width, height,
/// length, mass that is not finite and strictly positive.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
    classify_package(&Package::new(width, height, length, mass)).map(|c| c.category)
}

pub fn classify_package(package: &Package) -> Result<Classification> {
    package.validate()?;

    let bulky = is_bulky(package);
    let heavy = is_heavy(package);

    Ok(Classification {
        package: *package,
        volume: Some(package.volume()).filter(|v| v.is_finite()),
        bulky,
        heavy,
        category: category_for(bulky, heavy),
    })
}
