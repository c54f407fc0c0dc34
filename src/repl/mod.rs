use crate::model::RoundConfig;
use crate::repl::helper::{ReplHelper, ReplHelperState};
use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

mod commands;
mod helper;
mod parse;
mod session;

pub use session::{Flow, Session};

/// Run the interactive scorecard.
///
/// # Errors
/// Returns an error if the terminal cannot be read or written.
pub fn run_repl(draft: RoundConfig) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Golf card. Type `help` for commands, Ctrl-C or Ctrl-D to quit.")?;
    let mut rl = Editor::<ReplHelper, DefaultHistory>::new().context("init repl")?;
    let helper_state = Rc::new(RefCell::new(ReplHelperState::new()));
    rl.set_helper(Some(ReplHelper::new(Rc::clone(&helper_state))));
    let mut session = Session::new(draft);
    session.execute("show", &mut out)?;
    loop {
        let prompt = format!("{}> ", session.screen());
        match rl.readline(&prompt) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(input)?;
                let flow = session.execute(input, &mut out)?;
                helper_state.borrow_mut().set_screen(session.screen());
                if flow == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("read repl input"),
        }
    }
    Ok(())
}

/// Run commands from a file, one per line. Blank lines and `#` comments are skipped.
///
/// # Errors
/// Returns an error if the script cannot be read or output cannot be written.
pub fn run_script(draft: RoundConfig, script: &Path, out: &mut impl Write) -> Result<()> {
    let contents = fs::read_to_string(script)
        .with_context(|| format!("read script {}", script.display()))?;
    run_lines(draft, contents.lines(), out)
}

/// Runs every line through one shared session, echoing it first.
///
/// # Errors
/// Returns an error if output cannot be written.
pub fn run_lines<'l>(
    draft: RoundConfig,
    lines: impl IntoIterator<Item = &'l str>,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = Session::new(draft);
    for line in lines {
        let input = line.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }
        writeln!(out, "> {input}")?;
        if session.execute(input, out)? == Flow::Exit {
            break;
        }
    }
    Ok(())
}
