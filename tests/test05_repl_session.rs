use std::io::Write;

use golf_card::model::RoundConfig;
use golf_card::mvu::Screen;
use golf_card::repl::{Flow, Session, run_lines, run_script};

fn run(session: &mut Session<'_>, line: &str) -> String {
    let mut out = Vec::new();
    session.execute(line, &mut out).expect("write to vec");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn setup_commands_edit_the_draft() {
    let mut session = Session::new(RoundConfig::default());
    run(&mut session, "players 2");
    run(&mut session, r#"name 1 "Ann Lee""#);
    let out = run(&mut session, "holes 6");
    assert!(out.contains("1. Ann Lee"));
    assert!(out.contains("2. Player 2"));
    assert!(out.contains("Holes: 6"));

    let out = run(&mut session, "holes 7");
    assert!(out.starts_with("Ignored: hole count must be 6, 9 or 18"));
    assert_eq!(session.model().draft.hole_count().get(), 6);
}

#[test]
fn malformed_arguments_print_usage() {
    let mut session = Session::new(RoundConfig::default());
    assert_eq!(run(&mut session, "players"), "Usage: players <1-4>\n");
    assert_eq!(run(&mut session, "name 0 Bob"), "Usage: name <player> <name>\n");
    assert!(run(&mut session, "bogus").starts_with("Unknown command: bogus\nCommands:"));
    assert!(run(&mut session, "name 1 \"Bob").starts_with("Unbalanced quote"));
    assert_eq!(session.screen(), Screen::Start);
}

#[test]
fn full_round_through_commands() {
    let mut session = Session::new(RoundConfig::default());
    run(&mut session, "players 2");
    run(&mut session, "holes 6");
    let out = run(&mut session, "start");
    assert!(out.starts_with("Round started: 2 player(s), 6 holes."));
    assert!(out.contains("<Hole 1>"));

    // player A: [4,5,3,4,4,5], player B: [5,5,4,3,4,4]
    let a = [4, 5, 3, 4, 4, 5];
    let b = [5, 5, 4, 3, 4, 4];
    for hole in 0..6 {
        for _ in 1..a[hole] {
            run(&mut session, "inc 1");
        }
        for _ in 1..b[hole] {
            run(&mut session, "+ 2");
        }
        if hole < 5 {
            let out = run(&mut session, "next");
            assert!(out.contains(&format!("[Hole {}] <Hole {}>", hole + 1, hole + 2)));
        }
    }
    let out = run(&mut session, "next");
    assert!(out.contains("Type `summary` to finish the round."));

    let out = run(&mut session, "set 1 1 2");
    assert!(out.starts_with("Ignored: editing strokes is not available on the round screen"));
    let round = session.model().round.as_ref().unwrap();
    assert_eq!(round.stroke(0, 0), Ok(4));

    let out = run(&mut session, "summary");
    assert!(out.starts_with("Round complete.\n"));
    let total_line = out
        .lines()
        .find(|line| line.starts_with("Total"))
        .expect("totals row");
    let cells: Vec<&str> = total_line.split_whitespace().collect();
    assert_eq!(cells, vec!["Total", "18", "25", "25"]);
    assert_eq!(session.screen(), Screen::Summary);

    let out = run(&mut session, "set 1 1 2");
    let total_line = out.lines().find(|line| line.starts_with("Total")).unwrap();
    assert_eq!(
        total_line.split_whitespace().collect::<Vec<_>>(),
        vec!["Total", "18", "23", "25"]
    );

    let out = run(&mut session, "set 1 1 nope");
    assert!(out.contains("Total"));
    let json = run(&mut session, "show json");
    assert!(json.contains("\"total_strokes\""));
    assert!(json.contains("23"));
}

#[test]
fn help_lists_commands_for_the_screen() {
    let mut session = Session::new(RoundConfig::default());
    let help = run(&mut session, "help");
    assert!(help.contains("players <1-4>"));
    assert!(!help.contains("par <3|4|5>"));

    run(&mut session, "start");
    let help = run(&mut session, "?");
    assert!(help.contains("par <3|4|5>"));
    assert!(!help.contains("players <1-4>"));
}

#[test]
fn decrement_at_floor_stays_at_one() {
    let mut session = Session::new(RoundConfig::default());
    run(&mut session, "start");
    for _ in 0..3 {
        let out = run(&mut session, "dec 1");
        assert!(!out.contains("Ignored"));
    }
    let round = session.model().round.as_ref().unwrap();
    assert_eq!(round.stroke(0, 0), Ok(1));
}

#[test]
fn exit_stops_a_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    run_lines(
        RoundConfig::default(),
        ["# warm up", "", "start", "quit", "inc 1"],
        &mut out,
    )?;
    let text = String::from_utf8(out)?;
    assert!(text.contains("> start"));
    assert!(text.contains("> quit"));
    assert!(!text.contains("> inc 1"));

    let mut session = Session::new(RoundConfig::default());
    assert_eq!(session.execute("exit", &mut Vec::new())?, Flow::Exit);
    Ok(())
}

#[test]
fn script_file_runs_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut script = tempfile::NamedTempFile::new()?;
    writeln!(script, "players 1")?;
    writeln!(script, "holes 6")?;
    writeln!(script, "start")?;
    writeln!(script, "par 5")?;
    writeln!(script, "show html")?;
    script.flush()?;

    let mut out = Vec::new();
    run_script(RoundConfig::default(), script.path(), &mut out)?;
    let text = String::from_utf8(out)?;
    assert!(text.contains("Par: 5"));
    assert!(text.contains("<table class=\"styled-table summary-table\">"));

    let missing = run_script(
        RoundConfig::default(),
        std::path::Path::new("/definitely/not/here.txt"),
        &mut Vec::new(),
    );
    assert!(missing.is_err());
    Ok(())
}
