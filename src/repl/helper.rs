use crate::mvu::Screen;
use crate::repl::commands::{REPL_COMMANDS, find_command};
use rustyline::Helper;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use std::cell::RefCell;
use std::rc::Rc;

/// What the completer needs to know about the session; updated after every command.
pub(crate) struct ReplHelperState {
    screen: Screen,
}

impl ReplHelperState {
    pub(crate) fn new() -> Self {
        Self {
            screen: Screen::Start,
        }
    }

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }
}

pub(crate) struct ReplHelper {
    state: Rc<RefCell<ReplHelperState>>,
}

impl ReplHelper {
    pub(crate) fn new(state: Rc<RefCell<ReplHelperState>>) -> Self {
        Self { state }
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let screen = self.state.borrow().screen;
        Ok(complete_repl(line, pos, screen))
    }
}

/// Completes command names available on `screen`, or a subcommand after a command.
pub(crate) fn complete_repl(line: &str, pos: usize, screen: Screen) -> (usize, Vec<Pair>) {
    let prefix = &line[..pos];
    let mut parts = prefix.split_whitespace();
    let first = parts.next().unwrap_or_default();
    let second = parts.next();

    if let Some(command) = find_command(first)
        && !command.subcommands.is_empty()
        && parts.next().is_none()
        && prefix.contains(char::is_whitespace)
    {
        let sub_prefix = second.unwrap_or_default();
        let candidates = command
            .subcommands
            .iter()
            .map(|subcommand| subcommand.name)
            .filter(|cmd| cmd.starts_with(sub_prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        let start = prefix.rfind(' ').map_or(pos, |i| i + 1);
        return (start, candidates);
    }

    if prefix.contains(char::is_whitespace) {
        return (pos, Vec::new());
    }

    let candidates = REPL_COMMANDS
        .iter()
        .filter(|command| command.available_on(screen))
        .flat_map(|command| command.aliases.iter().copied().chain([command.name]))
        .filter(|cmd| cmd.starts_with(prefix))
        .map(|cmd| Pair {
            display: cmd.to_string(),
            replacement: cmd.to_string(),
        })
        .collect();
    (0, candidates)
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}
