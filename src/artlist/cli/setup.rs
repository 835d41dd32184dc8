use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "artlist", bin_name = "artlist", version)]
#[command(
    about = "Interactive artwork list manager",
    long_about = "Interactive artwork list manager.\n\n\
                  Reads one command per line from standard input. Type `help` for the command list."
)]
pub struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Load a CSV or XLSX document before the session starts
    #[arg(long, value_name = "PATH")]
    pub import: Option<PathBuf>,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(
    name = "artlist",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Edit,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse:",
            CommandGroup::Edit => "Edit:",
            CommandGroup::Data => "Documents:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "search" | "clear-search" | "show" => Some(CommandGroup::Browse),
            "add" | "edit" | "set" | "photo" | "unphoto" | "draft" | "save" | "cancel"
            | "delete" => Some(CommandGroup::Edit),
            "import" | "export" | "print" => Some(CommandGroup::Data),
            "config" | "help" | "quit" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Browse,
            CommandGroup::Edit,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// List artworks matching the current search
    #[command(alias = "ls")]
    List,

    /// Filter the list by text
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Field to search: all, artist, title, medium or status
        #[arg(short, long, default_value = "all")]
        scope: String,
    },

    /// Drop the current search
    ClearSearch,

    /// Show every field of one artwork
    Show { id: String },

    /// Start a draft for a new artwork
    #[command(alias = "new")]
    Add,

    /// Start editing an artwork
    Edit { id: String },

    /// Set a field of the open draft
    Set {
        /// Field key (number, artist, title, concept, medium, size, price, status) or column label
        field: String,

        /// Value words (joined with spaces; empty clears the field)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Attach an image to an artwork id or to `new`
    Photo { target: String, file: PathBuf },

    /// Remove the image of an artwork id or of `new`
    Unphoto { target: String },

    /// Show the open draft
    Draft,

    /// Save the open draft
    Save,

    /// Discard the open draft
    Cancel,

    /// Delete an artwork
    #[command(alias = "rm")]
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Append artworks from a CSV or XLSX document
    Import { path: PathBuf },

    /// Write all artworks to a CSV or XLSX document
    Export { path: Option<PathBuf> },

    /// Write a printable HTML summary of the listed artworks
    Print { path: Option<PathBuf> },

    /// Show or change configuration
    Config {
        key: Option<String>,

        #[arg(trailing_var_arg = true)]
        value: Vec<String>,
    },

    /// Show help
    Help { command: Option<String> },

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

pub fn get_grouped_help() -> String {
    let cmd = SessionLine::command();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let mut output = String::new();
    output.push_str("Commands (one per line):\n");

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<14} {}\n", sc.get_name(), about));
            }
        }
    }

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = SessionLine::command();

    if let Some(subcmd) = cmd.find_subcommand_mut(name) {
        print!("{}", subcmd.render_help());
        return;
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(words: &[&str]) -> SessionCommand {
        SessionLine::try_parse_from(words).unwrap().command
    }

    #[test]
    fn session_lines_parse() {
        assert_eq!(parse(&["ls"]), SessionCommand::List);
        assert_eq!(parse(&["clear-search"]), SessionCommand::ClearSearch);
        assert_eq!(parse(&["exit"]), SessionCommand::Quit);
        assert_eq!(
            parse(&["search", "晨", "--scope", "title"]),
            SessionCommand::Search {
                query: vec!["晨".into()],
                scope: "title".into()
            }
        );
        assert_eq!(
            parse(&["delete", "3", "--yes"]),
            SessionCommand::Delete {
                id: "3".into(),
                yes: true
            }
        );
    }

    #[test]
    fn set_takes_the_rest_of_the_line() {
        assert_eq!(
            parse(&["set", "price", "-", "NT$", "5,000"]),
            SessionCommand::Set {
                field: "price".into(),
                value: vec!["-".into(), "NT$".into(), "5,000".into()]
            }
        );
        assert_eq!(
            parse(&["set", "concept"]),
            SessionCommand::Set {
                field: "concept".into(),
                value: vec![]
            }
        );
    }

    #[test]
    fn every_command_has_a_help_group() {
        for sc in SessionLine::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no group",
                sc.get_name()
            );
        }
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(SessionLine::try_parse_from(["frobnicate"]).is_err());
    }
}
