use crate::domain::model::Package;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Print only the category token
    #[default]
    Text,
    /// Print the full classification as JSON
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "package-sorter")]
#[command(about = "Sort a package into the STANDARD, SPECIAL or REJECTED stack")]
pub struct CliConfig {
    /// Width in centimeters
    #[arg(allow_negative_numbers = true)]
    pub width: f64,

    /// Height in centimeters
    #[arg(allow_negative_numbers = true)]
    pub height: f64,

    /// Length in centimeters
    #[arg(allow_negative_numbers = true)]
    pub length: f64,

    /// Mass in kilograms
    #[arg(allow_negative_numbers = true)]
    pub mass: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn package(&self) -> Package {
        Package::new(self.width, self.height, self.length, self.mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positionals() {
        let config = CliConfig::parse_from(["package-sorter", "10", "20.5", "30", "4"]);
        assert_eq!(config.package(), Package::new(10.0, 20.5, 30.0, 4.0));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_negative_and_flags() {
        let config =
            CliConfig::parse_from(["package-sorter", "-10", "10", "10", "5", "--format", "json"]);
        assert_eq!(config.width, -10.0);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.log_json);
    }

    #[test]
    fn test_missing_mass_is_rejected_by_parser() {
        assert!(CliConfig::try_parse_from(["package-sorter", "10", "10", "10"]).is_err());
    }
}
