//! Handler for the `config` command group and config loading for other commands.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::diagnostic::ConfigDiagnostic;
use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = r#"# roster configuration

# SQLite database file. Relative paths resolve against the working directory.
# ROSTER_DATABASE and --db override this value.
database = "students.db"

# Maximum pooled database connections.
pool_size = 1

# How long SQLite waits on a locked database, in milliseconds.
busy_timeout_ms = 5000

[logging]
# Filter directive; RUST_LOG takes precedence.
level = "warn"
# "pretty" or "json"
format = "pretty"
"#;

/// Load the configuration, rendering TOML errors with source context.
pub fn load(path: &Path) -> Result<Config> {
    match Config::load_or_default(path) {
        Err(Error::Config(ConfigError::Parse(err))) => {
            if let Ok(content) = fs::read_to_string(path) {
                let name = path.display().to_string();
                eprintln!("{}", ConfigDiagnostic::from_toml(&name, &content, &err).render());
            }
            Err(ConfigError::Parse(err).into())
        }
        other => other,
    }
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::success("Created configuration file");
    output::field("Path", path.display());
    Ok(())
}

/// Execute `config show`. `database` is the path after `--db` and
/// `ROSTER_DATABASE` have been applied.
pub fn execute_show(path: &Path, config: &Config, database: &Path) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "exists": path.exists(),
            "database": database.display().to_string(),
            "pool_size": config.pool_size,
            "busy_timeout_ms": config.busy_timeout_ms,
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} {}", path.display(), output::muted("(not found, defaults)"))
    };
    output::field("File", source);
    output::field("Database", database.display());
    output::field("Pool size", config.pool_size);
    output::field("Busy timeout", format!("{}ms", config.busy_timeout_ms));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "pool_size = 3\n").unwrap();

        assert!(execute_init(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "pool_size = 3\n");

        execute_init(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn init_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        execute_init(&path, false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "pool_size = \"many\"\n").unwrap();

        assert!(matches!(
            load(&path),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
