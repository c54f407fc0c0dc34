use std::io::Write;

use clap::Parser;
use golf_card::args::validation::{check_hole_count, check_player_count, check_readable_file};
use golf_card::args::{Cli, DEFAULT_LOG_LEVEL, resolve_args};
use golf_card::model::HoleCount;

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write toml");
    file.flush().expect("flush toml");
    file
}

#[test]
fn defaults_without_flags_or_file() -> Result<(), Box<dyn std::error::Error>> {
    let args = resolve_args(Cli::default())?;
    assert_eq!(args.draft.player_count(), 1);
    assert_eq!(args.draft.player_names(), ["Player 1"]);
    assert_eq!(args.draft.hole_count(), HoleCount::Nine);
    assert_eq!(args.log_level, DEFAULT_LOG_LEVEL);
    assert!(args.script.is_none());
    Ok(())
}

#[test]
fn names_imply_player_count() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from(["golf-card", "-n", "Ann", "--name", "Bob", "--holes", "18"])?;
    let args = resolve_args(cli)?;
    assert_eq!(args.draft.player_names(), ["Ann", "Bob"]);
    assert_eq!(args.draft.hole_count(), HoleCount::Eighteen);
    Ok(())
}

#[test]
fn cli_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let file = toml_file(
        r#"
players = 3
names = ["Ann", "Bob", "Cy"]
holes = 6
log_level = "debug"
"#,
    );
    let path = file.path().to_string_lossy().to_string();

    let from_file = resolve_args(Cli::try_parse_from(["golf-card", "--config-toml", path.as_str()])?)?;
    assert_eq!(from_file.draft.player_names(), ["Ann", "Bob", "Cy"]);
    assert_eq!(from_file.draft.hole_count(), HoleCount::Six);
    assert_eq!(from_file.log_level, "debug");

    let overridden = resolve_args(Cli::try_parse_from([
        "golf-card",
        "--config-toml",
        path.as_str(),
        "--players",
        "2",
        "--holes",
        "9",
        "--log-level",
        "info",
    ])?)?;
    assert_eq!(overridden.draft.player_names(), ["Ann", "Bob"]);
    assert_eq!(overridden.draft.hole_count(), HoleCount::Nine);
    assert_eq!(overridden.log_level, "info");
    Ok(())
}

#[test]
fn bad_file_values_are_errors() {
    let file = toml_file("holes = 10\n");
    let cli = Cli {
        config_toml: Some(file.path().to_path_buf()),
        ..Cli::default()
    };
    assert!(resolve_args(cli).is_err());

    let file = toml_file("players = 5\n");
    let cli = Cli {
        config_toml: Some(file.path().to_path_buf()),
        ..Cli::default()
    };
    assert!(resolve_args(cli).is_err());

    let file = toml_file("colour = \"green\"\n");
    let cli = Cli {
        config_toml: Some(file.path().to_path_buf()),
        ..Cli::default()
    };
    assert!(resolve_args(cli).is_err());
}

#[test]
fn value_parsers_reject_out_of_range() {
    assert_eq!(check_player_count("4"), Ok(4));
    assert!(check_player_count("0").is_err());
    assert!(check_player_count("five").is_err());
    assert_eq!(check_hole_count("18"), Ok(HoleCount::Eighteen));
    assert!(check_hole_count("12").is_err());
    assert!(check_readable_file("/definitely/not/here.toml").is_err());

    assert!(Cli::try_parse_from(["golf-card", "--players", "7"]).is_err());
    assert!(Cli::try_parse_from(["golf-card", "--holes", "3"]).is_err());
}
