use anyhow::Result;
use package_sorter::core::samples::SAMPLES;
use package_sorter::{classify_package, Category, Classification, Package};

#[test]
fn test_every_sample_matches_expectation() {
    for sample in SAMPLES {
        let actual = classify_package(&sample.package)
            .ok()
            .map(|report| report.category);
        assert_eq!(actual, sample.expected, "sample '{}'", sample.label);
    }
}

#[test]
fn test_samples_cover_every_category_and_an_error() {
    for category in [Category::Standard, Category::Special, Category::Rejected] {
        assert!(SAMPLES.iter().any(|s| s.expected == Some(category)));
    }
    assert!(SAMPLES.iter().any(|s| s.expected.is_none()));
}

#[test]
fn test_json_report_shape() -> Result<()> {
    let report = classify_package(&Package::new(150.0, 100.0, 100.0, 25.0))?;
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["width"], 150.0);
    assert_eq!(json["mass"], 25.0);
    assert_eq!(json["volume"], 1_500_000.0);
    assert_eq!(json["bulky"], true);
    assert_eq!(json["heavy"], true);
    assert_eq!(json["category"], "REJECTED");

    let parsed: Classification = serde_json::from_value(json)?;
    assert_eq!(parsed, report);
    Ok(())
}

#[test]
fn test_overflowed_volume_report_round_trips() -> Result<()> {
    let report = classify_package(&Package::new(1e200, 1e200, 1e200, 1.0))?;
    let text = serde_json::to_string(&report)?;
    let parsed: Classification = serde_json::from_str(&text)?;

    assert_eq!(parsed.volume, None);
    assert!(parsed.bulky);
    assert_eq!(parsed.category, report.category);
    Ok(())
}
