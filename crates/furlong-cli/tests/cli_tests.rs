//! End-to-end tests through the CLI library surface.

use furlong_cli::cli::{InputArgs, PresetArg};
use furlong_cli::commands::parse::only_entrant;
use furlong_cli::input::read_document;
use furlong_cli::{load_extractor_config, CliError, Formatter, OutputFormat};
use furlong_extractor::CardParser;
use std::io::Write;
use tempfile::NamedTempFile;

const CARD: &str = "\
1 Silver Thunder (E 5) Own: Blue Barn LLC
B. g. 4
05Oct25Bel 7f ft 23 46 1:22 Alw 2 3 2 1 OrtizI 2.10 Silver Thunder tired late
7 Night Owl (P 3) Own: Hoot Stable
Dk. f. 3
";

fn card_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CARD.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_to_quiet_output() {
    let file = card_file();
    let config = load_extractor_config(None, None).unwrap();
    let args = InputArgs {
        input: Some(file.path().to_path_buf()),
        pdf: false,
    };

    let text = read_document(&args, &config).unwrap();
    let card = CardParser::new(config).unwrap().parse(&text);
    let output = Formatter::new(OutputFormat::Quiet, false)
        .format_card(&card, false)
        .unwrap();

    assert_eq!(output, "1\tSilver Thunder\n7\tNight Owl");
}

#[test]
fn test_entrant_filter_then_json() {
    let card = CardParser::default().parse(CARD);
    let card = only_entrant(card, 7).unwrap();
    let json = Formatter::new(OutputFormat::Json, false)
        .format_card(&card, false)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["records"].as_array().unwrap().len(), 1);
    assert_eq!(value["records"][0]["name"], "Night Owl");
    assert_eq!(value["metadata"]["boundaries"], 2);
}

#[test]
fn test_config_file_feeds_parser() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "sex_age_max_lines = 1").unwrap();
    let config = load_extractor_config(Some(file.path()), Some(PresetArg::Lenient)).unwrap();
    assert_eq!(config.sex_age_max_lines, 1);

    assert!(CardParser::new(config).is_ok());
}

#[test]
fn test_zero_limit_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_leader_times = 0").unwrap();
    let err = load_extractor_config(Some(file.path()), None).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}
