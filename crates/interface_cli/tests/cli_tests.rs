//! Tests for the command line interface

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use interface_cli::{run, Args, CliConfig, LogFormat};
use tempfile::TempDir;
use test_utils::BatchFixtures;

fn config_in(dir: &TempDir, input: &str) -> CliConfig {
    let input_path = dir.path().join("input.json");
    fs::write(&input_path, input).unwrap();

    CliConfig {
        input: input_path,
        output: dir.path().join("output.json"),
        ..CliConfig::default()
    }
}

// ============================================================================
// Run Tests
// ============================================================================

mod run_tests {
    use super::*;

    #[test]
    fn test_writes_reference_report() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, &BatchFixtures::reference_json());

        let settled = run(&config).unwrap();
        assert_eq!(settled, 3);

        let written = fs::read_to_string(&config.output).unwrap();
        assert!(written.ends_with("}\n"));
        let report: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(report, BatchFixtures::reference_report());
    }

    #[test]
    fn test_identical_input_gives_identical_bytes() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, &BatchFixtures::reference_json());

        run(&config).unwrap();
        let first = fs::read(&config.output).unwrap();
        run(&config).unwrap();
        let second = fs::read(&config.output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_input_file() {
        let dir = TempDir::new().unwrap();
        let config = CliConfig {
            input: dir.path().join("absent.json"),
            output: dir.path().join("output.json"),
            ..CliConfig::default()
        };

        let err = run(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Input file not found: {}", config.input.display())
        );
        assert!(!config.output.exists());
    }

    #[test]
    fn test_invalid_json_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "{ not json");

        let err = run(&config).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON format"));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_validation_error_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let mut document = BatchFixtures::reference_document();
        document["options"][2]["type"] = serde_json::json!("jetpack");
        let config = config_in(&dir, &document.to_string());

        let err = run(&config).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Option at index 2 has invalid type: must be one of gps, baby_seat, additional_insurance"));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir, &BatchFixtures::reference_json());
        config.output = dir.path().join("missing-dir").join("output.json");

        let err = run(&config).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write"));
    }
}

// ============================================================================
// Argument Tests
// ============================================================================

mod argument_tests {
    use super::*;

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("rental.toml");
        fs::write(
            &config_path,
            "input = \"from-file.json\"\nlog_level = \"warn\"\n\n[pricing.commission]\nrate = 25\n",
        )
        .unwrap();

        let args = Args::parse_from([
            "rental-pricing",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            "-",
            "--log-format",
            "json",
        ]);
        let config = args.resolve().unwrap();

        assert_eq!(config.input, PathBuf::from("from-file.json"));
        assert!(config.writes_to_stdout());
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.pricing.commission.rate,
            core_kernel::Percentage::from_whole(25)
        );
    }

    #[test]
    fn test_missing_config_file() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/rental.toml")),
            ..Args::default()
        };

        let err = args.resolve().unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to load configuration from /nonexistent/rental.toml"));
    }
}
