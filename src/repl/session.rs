use anyhow::{Context, Result};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tracing::debug;

use crate::model::{RoundConfig, Summary};
use crate::mvu::{AppModel, Effect, Msg, Observer, Runtime, Screen};
use crate::repl::commands::{
    CommandId, ReplCommand, SubcommandId, build_repl_help, find_command, find_subcommand,
    subcommand_help,
};
use crate::repl::parse::{format_parse_error, parse_number, parse_position, tokenize};
use crate::view::{
    render_round_screen, render_start_screen, render_summary_html, render_summary_json,
    render_summary_text,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Renders every screen change into a buffer the session flushes after each command.
struct ScreenPrinter {
    pending: Rc<RefCell<Vec<String>>>,
}

impl Observer for ScreenPrinter {
    fn notify(&mut self, model: &AppModel, effect: Effect) {
        let text = match effect {
            Effect::RoundStarted => model.round.as_ref().map(|round| {
                format!(
                    "Round started: {} player(s), {} holes.",
                    round.player_count(),
                    round.hole_count()
                )
            }),
            Effect::RoundFinished => Some("Round complete.".to_string()),
            Effect::Render(screen) => Some(render_screen(model, screen)),
        };
        if let Some(text) = text {
            self.pending.borrow_mut().push(text);
        }
    }
}

fn render_screen(model: &AppModel, screen: Screen) -> String {
    match (screen, model.round.as_ref()) {
        (Screen::Round, Some(round)) => render_round_screen(round),
        (Screen::Summary, Some(round)) => render_summary_text(&Summary::from_round(round)),
        _ => render_start_screen(&model.draft),
    }
}

/// One scorekeeping session: turns command lines into messages for the runtime.
pub struct Session<'a> {
    runtime: Runtime<'a>,
    pending: Rc<RefCell<Vec<String>>>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(draft: RoundConfig) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let mut runtime = Runtime::new(AppModel::new(draft));
        runtime.subscribe(ScreenPrinter {
            pending: Rc::clone(&pending),
        });
        Self { runtime, pending }
    }

    /// Adds another observer alongside the built-in screen printer.
    pub fn subscribe(&mut self, observer: impl Observer + 'a) {
        self.runtime.subscribe(observer);
    }

    #[must_use]
    pub fn model(&self) -> &AppModel {
        self.runtime.model()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.runtime.model().screen
    }

    #[must_use]
    pub fn help(&self) -> String {
        build_repl_help(self.screen())
    }

    /// Runs one command line, writing everything it prints to `out`.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let input = line.trim();
        if input.is_empty() {
            return Ok(Flow::Continue);
        }
        let tokens = match tokenize(input) {
            Ok(tokens) => tokens,
            Err(err) => {
                writeln!(out, "{}", format_parse_error(input, err.index))?;
                return Ok(Flow::Continue);
            }
        };
        let mut args = tokens.iter().map(String::as_str);
        let command_token = args.next().unwrap_or_default();
        let Some(command) = find_command(command_token) else {
            writeln!(out, "Unknown command: {command_token}")?;
            writeln!(out, "{}", self.help())?;
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = args.collect();
        debug!(command = command.name, ?args, "repl command");

        let msg = match command.id {
            CommandId::Help => {
                writeln!(out, "{}", self.help())?;
                return Ok(Flow::Continue);
            }
            CommandId::Exit | CommandId::Quit => return Ok(Flow::Exit),
            CommandId::Show => {
                self.show(command, args.first().copied(), out)?;
                return Ok(Flow::Continue);
            }
            _ => message_for(command.id, &args),
        };

        match msg {
            Some(msg) => self.dispatch(msg, out)?,
            None => writeln!(out, "Usage: {}", command.usage)?,
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, msg: Msg, out: &mut impl Write) -> Result<()> {
        let effects = self.runtime.dispatch(msg);
        if effects.is_empty()
            && let Some(notice) = &self.runtime.model().notice
        {
            writeln!(out, "Ignored: {notice}")?;
        }
        for text in self.pending.borrow_mut().drain(..) {
            writeln!(out, "{text}")?;
        }
        Ok(())
    }

    fn show(
        &self,
        command: &'static ReplCommand,
        format: Option<&str>,
        out: &mut impl Write,
    ) -> Result<()> {
        let format = match format {
            None => SubcommandId::Text,
            Some(token) => match find_subcommand(command.subcommands, token) {
                Some(sub) => sub.id,
                None => {
                    writeln!(out, "Unknown format: {token}")?;
                    writeln!(out, "{}", subcommand_help(command))?;
                    return Ok(());
                }
            },
        };
        let model = self.runtime.model();
        match format {
            SubcommandId::Text => writeln!(out, "{}", render_screen(model, model.screen))?,
            SubcommandId::Json | SubcommandId::Html => {
                let Some(summary) = model.summary() else {
                    writeln!(out, "No round in progress.")?;
                    return Ok(());
                };
                if format == SubcommandId::Json {
                    let json = render_summary_json(&summary).context("serialize summary")?;
                    writeln!(out, "{json}")?;
                } else {
                    writeln!(out, "{}", render_summary_html(&summary).into_string())?;
                }
            }
        }
        Ok(())
    }
}

/// Builds the message for a scoring command, `None` when the arguments don't parse.
fn message_for(id: CommandId, args: &[&str]) -> Option<Msg> {
    let first = args.first().copied();
    let msg = match id {
        CommandId::Players => Msg::SetPlayerCount(parse_number(first)?),
        CommandId::Name => {
            let player = parse_position(first)?;
            Msg::SetPlayerName {
                player,
                name: args.get(1..).unwrap_or_default().join(" "),
            }
        }
        CommandId::Holes => Msg::SetHoleCount(parse_number(first)?),
        CommandId::Start => Msg::StartRound,
        CommandId::Hole => Msg::SelectHole(parse_position(first)?),
        CommandId::Par => Msg::SetPar(parse_number(first)?),
        CommandId::Inc => Msg::Increment {
            player: parse_position(first)?,
        },
        CommandId::Dec => Msg::Decrement {
            player: parse_position(first)?,
        },
        CommandId::Next => Msg::NextHole,
        CommandId::Summary => Msg::ShowSummary,
        CommandId::Set => Msg::EditStroke {
            player: parse_position(first)?,
            hole: parse_position(args.get(1).copied())?,
            text: args.get(2..).unwrap_or_default().join(" "),
        },
        CommandId::Restart => Msg::Restart,
        CommandId::Help | CommandId::Show | CommandId::Exit | CommandId::Quit => return None,
    };
    Some(msg)
}
