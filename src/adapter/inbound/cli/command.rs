//! Command-line interface definitions.
//!
//! Defines the CLI structure for roster using `clap`. Running with no
//! subcommand opens the interactive menu; the remaining subcommands perform a
//! single roster operation and exit, which makes them scriptable.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Student roster kept in a local SQLite database
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Path to the SQLite database (overrides config and ROSTER_DATABASE)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the roster CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Add a student
    Add(AddArgs),

    /// List all students
    List,

    /// Show one student
    Show(IdArg),

    /// Update a student, optionally moving it to a new id
    Update(UpdateArgs),

    /// Delete a student
    Delete(IdArg),

    /// Create the database and apply the schema
    Init,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `roster config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a configuration file with default values.
    Init(ConfigInitArgs),
    /// Display the effective configuration.
    Show,
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// A single student id.
#[derive(Args, Debug)]
pub struct IdArg {
    /// Student id.
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
}

/// Arguments for `add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Student id (must not exist yet).
    #[arg(long, allow_negative_numbers = true)]
    pub id: i64,

    /// Student name.
    #[arg(long)]
    pub name: String,

    /// Student age.
    #[arg(long, allow_negative_numbers = true)]
    pub age: i64,

    /// Student grade.
    #[arg(long)]
    pub grade: String,
}

/// Arguments for `update`. Omitted fields keep their current value.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Id of the student to update.
    #[arg(allow_negative_numbers = true)]
    pub id: i64,

    /// Move the student to this id (must be free).
    #[arg(long, allow_negative_numbers = true)]
    pub new_id: Option<i64>,

    /// New name.
    #[arg(long)]
    pub name: Option<String>,

    /// New age.
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,

    /// New grade.
    #[arg(long)]
    pub grade: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "roster");
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["roster", "list", "--json", "-vv", "--db", "x.db"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from(["roster", "--color", "never", "menu"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
        assert!(matches!(cli.command, Some(Commands::Menu)));
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "roster", "add", "--id", "3", "--name", "Lin", "--age", "14", "--grade", "B",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.id, 3);
                assert_eq!(args.name, "Lin");
                assert_eq!(args.age, 14);
                assert_eq!(args.grade, "B");
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn test_add_requires_all_fields() {
        assert!(Cli::try_parse_from(["roster", "add", "--id", "3"]).is_err());
    }

    #[test]
    fn test_parse_update_partial() {
        let cli = Cli::try_parse_from(["roster", "update", "3", "--new-id", "4"]).unwrap();
        match cli.command {
            Some(Commands::Update(args)) => {
                assert_eq!(args.id, 3);
                assert_eq!(args.new_id, Some(4));
                assert!(args.name.is_none());
                assert!(args.age.is_none());
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_ids_parse() {
        let cli = Cli::try_parse_from(["roster", "show", "-5"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show(IdArg { id: -5 }))));

        let cli = Cli::try_parse_from(["roster", "delete", "-5"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Delete(IdArg { id: -5 }))));

        let cli = Cli::try_parse_from([
            "roster", "add", "--id", "-5", "--name", "Ada", "--age", "12", "--grade", "A",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Add(AddArgs { id: -5, .. }))));

        let cli = Cli::try_parse_from(["roster", "update", "-5", "--new-id", "-6"]).unwrap();
        match cli.command {
            Some(Commands::Update(args)) => {
                assert_eq!(args.id, -5);
                assert_eq!(args.new_id, Some(-6));
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_ids_beyond_32_bits_parse() {
        let cli = Cli::try_parse_from(["roster", "show", "3000000000"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Show(IdArg { id: 3_000_000_000 }))
        ));
    }

    #[test]
    fn test_short_flags_still_parse_alongside_negative_ids() {
        let cli = Cli::try_parse_from(["roster", "show", "-v", "-5"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Some(Commands::Show(IdArg { id: -5 }))));
    }

    #[test]
    fn test_non_numeric_id_rejected() {
        assert!(Cli::try_parse_from(["roster", "show", "abc"]).is_err());
    }

    #[test]
    fn test_parse_config_init_force() {
        let cli = Cli::try_parse_from(["roster", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommand::Init(ConfigInitArgs { force: true })))
        ));
    }
}
