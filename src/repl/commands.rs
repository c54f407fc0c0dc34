use crate::mvu::Screen;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CommandId {
    Help,
    Show,
    Players,
    Name,
    Holes,
    Start,
    Hole,
    Par,
    Inc,
    Dec,
    Next,
    Summary,
    Set,
    Restart,
    Exit,
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SubcommandId {
    Text,
    Json,
    Html,
}

pub(crate) struct ReplCommand {
    pub(crate) id: CommandId,
    pub(crate) name: &'static str,
    pub(crate) usage: &'static str,
    pub(crate) description: &'static str,
    pub(crate) aliases: &'static [&'static str],
    /// Screens where the command applies; empty means everywhere.
    pub(crate) screens: &'static [Screen],
    pub(crate) subcommands: &'static [ReplSubcommand],
}

pub(crate) struct ReplSubcommand {
    pub(crate) id: SubcommandId,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
}

const SHOW_SUBCOMMANDS: &[ReplSubcommand] = &[
    ReplSubcommand {
        id: SubcommandId::Text,
        name: "text",
        description: "plain text (default)",
    },
    ReplSubcommand {
        id: SubcommandId::Json,
        name: "json",
        description: "summary as json",
    },
    ReplSubcommand {
        id: SubcommandId::Html,
        name: "html",
        description: "summary as an html table",
    },
];

const START: &[Screen] = &[Screen::Start];
const ROUND: &[Screen] = &[Screen::Round];
const SUMMARY: &[Screen] = &[Screen::Summary];
const SCORING: &[Screen] = &[Screen::Round, Screen::Summary];

pub(crate) const REPL_COMMANDS: &[ReplCommand] = &[
    ReplCommand {
        id: CommandId::Help,
        name: "help",
        usage: "help",
        description: "Show this help.",
        aliases: &["?", "-h", "--help"],
        screens: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Show,
        name: "show",
        usage: "show [text|json|html]",
        description: "Print the current screen.",
        aliases: &["ls"],
        screens: &[],
        subcommands: SHOW_SUBCOMMANDS,
    },
    ReplCommand {
        id: CommandId::Players,
        name: "players",
        usage: "players <1-4>",
        description: "Set the number of players.",
        aliases: &[],
        screens: START,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Name,
        name: "name",
        usage: "name <player> <name>",
        description: "Rename a player.",
        aliases: &[],
        screens: START,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Holes,
        name: "holes",
        usage: "holes <6|9|18>",
        description: "Set the number of holes.",
        aliases: &[],
        screens: START,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Start,
        name: "start",
        usage: "start",
        description: "Start the round.",
        aliases: &[],
        screens: START,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Hole,
        name: "hole",
        usage: "hole <hole>",
        description: "Switch to a neighbouring hole tab.",
        aliases: &[],
        screens: ROUND,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Par,
        name: "par",
        usage: "par <3|4|5>",
        description: "Set par for the current hole.",
        aliases: &[],
        screens: ROUND,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Inc,
        name: "inc",
        usage: "inc <player>",
        description: "Add a stroke on the current hole.",
        aliases: &["+"],
        screens: ROUND,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Dec,
        name: "dec",
        usage: "dec <player>",
        description: "Remove a stroke on the current hole.",
        aliases: &["-"],
        screens: ROUND,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Next,
        name: "next",
        usage: "next",
        description: "Go to the next hole.",
        aliases: &["n"],
        screens: ROUND,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Summary,
        name: "summary",
        usage: "summary",
        description: "Finish the round (final hole only).",
        aliases: &[],
        screens: ROUND,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Set,
        name: "set",
        usage: "set <player> <hole> <strokes>",
        description: "Overwrite a stroke count on the summary grid.",
        aliases: &[],
        screens: SUMMARY,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Restart,
        name: "restart",
        usage: "restart",
        description: "Discard the round and return to setup.",
        aliases: &[],
        screens: SCORING,
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Exit,
        name: "exit",
        usage: "exit",
        description: "Exit the REPL.",
        aliases: &[],
        screens: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Quit,
        name: "quit",
        usage: "quit",
        description: "Exit the REPL.",
        aliases: &["q"],
        screens: &[],
        subcommands: &[],
    },
];

impl ReplCommand {
    pub(crate) fn available_on(&self, screen: Screen) -> bool {
        self.screens.is_empty() || self.screens.contains(&screen)
    }
}

pub(crate) fn find_command(name: &str) -> Option<&'static ReplCommand> {
    REPL_COMMANDS
        .iter()
        .find(|command| command.name == name || command.aliases.contains(&name))
}

pub(crate) fn find_subcommand(
    subcommands: &'static [ReplSubcommand],
    name: &str,
) -> Option<&'static ReplSubcommand> {
    subcommands
        .iter()
        .find(|subcommand| subcommand.name == name)
}

pub(crate) fn subcommand_help(command: &ReplCommand) -> String {
    command
        .subcommands
        .iter()
        .map(|subcommand| format!("{} {}", subcommand.name, subcommand.description))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn build_repl_help(screen: Screen) -> String {
    let mut help = String::from("Commands:");
    for command in REPL_COMMANDS.iter().filter(|c| c.available_on(screen)) {
        let names = if command.aliases.is_empty() {
            command.usage.to_string()
        } else {
            let mut parts = Vec::with_capacity(command.aliases.len() + 1);
            parts.push(command.usage);
            parts.extend(command.aliases);
            parts.join(", ")
        };
        help.push_str("\n  ");
        help.push_str(&names);
        let padding = 34usize.saturating_sub(names.len());
        help.push_str(&" ".repeat(padding.max(2)));
        help.push_str(command.description);
    }
    help
}
