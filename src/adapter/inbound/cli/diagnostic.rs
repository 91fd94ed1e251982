//! Miette-based error diagnostics for CLI error presentation.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Configuration parse error pointing into the offending file.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(roster::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file content.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: Option<SourceSpan>,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a diagnostic from a TOML parse failure.
    #[must_use]
    pub fn from_toml(name: &str, content: &str, err: &toml::de::Error) -> Self {
        Self {
            message: err.message().to_string(),
            src: NamedSource::new(name, content.to_string()),
            span: err.span().map(|range| (range.start, range.len()).into()),
            help: Some("run `roster config init --force` to regenerate defaults".to_string()),
        }
    }

    /// Render the diagnostic as a report string.
    #[must_use]
    pub fn render(self) -> String {
        format!("{:?}", miette::Report::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_bad_value() {
        let content = "database = \"a.db\"\npool_size = \"two\"\n";
        let err = toml::from_str::<crate::infrastructure::config::settings::Config>(content)
            .unwrap_err();

        let diagnostic = ConfigDiagnostic::from_toml("config.toml", content, &err);
        let span = diagnostic.span.expect("toml reports a span");
        assert!(span.offset() >= content.find("pool_size").unwrap());
    }

    #[test]
    fn render_mentions_file_name() {
        let content = "database = ";
        let err = toml::from_str::<toml::Value>(content).unwrap_err();

        let report = ConfigDiagnostic::from_toml("roster.toml", content, &err).render();
        assert!(report.contains("roster.toml"));
    }
}
