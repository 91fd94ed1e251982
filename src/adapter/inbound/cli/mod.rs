//! CLI module graph and command dispatch.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod menu;
pub mod output;
pub mod paths;
pub mod prompt;
pub mod student;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::info;

use crate::adapter::outbound::sqlite::database::connection;
use crate::adapter::outbound::sqlite::store::SqliteStudentStore;
use crate::application::roster::Roster;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

use command::{Cli, Commands, ConfigCommand};
use prompt::{DialoguerPrompt, LinePrompt};

/// Run a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    output::set_color(&cli.color);
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    // `config init` must work even when the existing file is broken.
    let config = match &cli.command {
        Some(Commands::Config(ConfigCommand::Init(_))) => Config::default(),
        _ => config::load(&cli.config)?,
    };
    config.init_logging(output::verbosity());

    let database = cli
        .db
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.database));

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(&database, &config),
        Commands::Add(args) => student::execute_add(&open_roster(&database, &config)?, args),
        Commands::List => student::execute_list(&open_roster(&database, &config)?),
        Commands::Show(arg) => student::execute_show(&open_roster(&database, &config)?, arg.id),
        Commands::Update(args) => student::execute_update(&open_roster(&database, &config)?, args),
        Commands::Delete(arg) => student::execute_delete(&open_roster(&database, &config)?, arg.id),
        Commands::Init => execute_init(&database, &config),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&cli.config, args.force),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config, &config, &database),
    }
}

/// Open (creating if needed) the database and wrap it in a roster.
fn open_roster(database: &Path, config: &Config) -> Result<Roster<SqliteStudentStore>> {
    paths::ensure_parent_dir(database)?;
    let url = database.display().to_string();
    let pool = connection::open(&url, &config.pool_settings())?;
    info!(database = %url, "database opened");
    Ok(Roster::new(SqliteStudentStore::new(pool)))
}

fn execute_init(database: &Path, config: &Config) -> Result<()> {
    let roster = open_roster(database, config)?;
    let count = roster.count()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "init",
            "database": database.display().to_string(),
            "students": count,
        }));
        return Ok(());
    }

    output::success("Database ready");
    output::field("Path", database.display());
    output::field("Students", count);
    Ok(())
}

fn run_menu(database: &Path, config: &Config) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "the menu is interactive; use `roster list`, `roster add`, ... for scripting"
                .to_string(),
        }
        .into());
    }

    let roster = open_roster(database, config)?;
    output::header(env!("CARGO_PKG_VERSION"));
    output::hint(&format!("database {}", output::highlight(database.display())));

    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        menu::run(&roster, &mut DialoguerPrompt::new())
    } else {
        let stdin = std::io::stdin();
        menu::run(&roster, &mut LinePrompt::new(stdin.lock(), std::io::stdout()))
    }
}
