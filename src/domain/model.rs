use serde::{Deserialize, Serialize};
use std::fmt;

/// Handling category, ordered from least to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Standard,
    Special,
    Rejected,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width, height and length in centimeters; mass in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

impl Package {
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }
}

/// Full outcome of classifying one package, used for structured output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(flatten)]
    pub package: Package,
    /// `None` when the product overflows `f64`; such a package is always bulky.
    pub volume: Option<f64>,
    pub bulky: bool,
    pub heavy: bool,
    pub category: Category,
}
