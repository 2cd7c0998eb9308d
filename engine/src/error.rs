use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the palette pipeline, the renderers, the warehouse and
/// the activation engine.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Parse`] - the palette document is not valid TOML
/// - [`Json`] - an application's JSON settings file is malformed
/// - [`Validation`] - one or more palette fields failed validation
/// - [`Usage`] - unknown theme, unset alias, invalid variant
///
/// ## Environment Errors
/// - [`Io`] - filesystem read/write failures, with the offending path
/// - [`ExternalTool`] - a helper process exited non-zero
///
/// ## Internal Errors
/// - [`Programmer`] - adapter name collision or a broken invariant
/// - [`Template`] - a renderer template failed to render
///
/// [`Parse`]: ThemerError::Parse
/// [`Json`]: ThemerError::Json
/// [`Validation`]: ThemerError::Validation
/// [`Usage`]: ThemerError::Usage
/// [`Io`]: ThemerError::Io
/// [`ExternalTool`]: ThemerError::ExternalTool
/// [`Programmer`]: ThemerError::Programmer
/// [`Template`]: ThemerError::Template
#[derive(Debug, Error)]
pub enum ThemerError {
    /// Malformed palette document
    #[error("parsing TOML: {0}")]
    Parse(String),

    /// A JSON document that cannot be edited in place
    #[error("parsing JSON: {0}")]
    Json(String),

    /// Every problem found while validating a palette
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Filesystem failure on a specific path
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A helper process (bat, git, nvim) exited unsuccessfully
    #[error("{tool} failed: {output}")]
    ExternalTool { tool: String, output: String },

    /// The user asked for something that cannot be done as stated
    #[error("{0}")]
    Usage(String),

    /// A broken internal invariant, such as two adapters sharing a name
    #[error("internal error: {0}")]
    Programmer(String),

    /// Template rendering failure
    #[error("rendering template: {0}")]
    Template(String),

    /// An adapter failed while generating its output
    #[error("adapter {adapter}: {source}")]
    Adapter {
        adapter: String,
        #[source]
        source: Box<ThemerError>,
    },

    /// A theme in the warehouse could not be loaded
    #[error("loading theme \"{name}\": {source}")]
    ThemeLoad {
        name: String,
        #[source]
        source: Box<ThemerError>,
    },
}

impl ThemerError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ThemerError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn external(tool: &str, output: impl AsRef<str>) -> Self {
        ThemerError::ExternalTool {
            tool: tool.to_string(),
            output: output.as_ref().trim().to_string(),
        }
    }
}

impl From<minijinja::Error> for ThemerError {
    fn from(err: minijinja::Error) -> Self {
        ThemerError::Template(err.to_string())
    }
}

/// Result type alias for engine operations
pub type ThemerResult<T> = Result<T, ThemerError>;

/// Accumulated palette validation failures.
///
/// Validation never stops at the first problem; every message names the
/// offending field and, for format errors, the offending value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Prefix every message, used when validating a per-adapter override.
    pub fn prefixed(self, prefix: &str) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|message| format!("{prefix}: {message}"))
                .collect(),
        )
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for ThemerError {
    fn from(errors: ValidationErrors) -> Self {
        ThemerError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_join_with_newlines() {
        let mut errors = ValidationErrors::new();
        errors.push("palette.bg is required but not set");
        errors.push("palette.fg is required but not set");

        assert_eq!(
            errors.to_string(),
            "palette.bg is required but not set\npalette.fg is required but not set"
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_prefixed_messages() {
        let mut errors = ValidationErrors::new();
        errors.push("palette.color1 is required but not set");

        let prefixed = errors.prefixed("adapter fzf");
        assert_eq!(
            prefixed.messages(),
            &["adapter fzf: palette.color1 is required but not set".to_string()]
        );
    }

    #[test]
    fn test_external_tool_output_is_trimmed() {
        let err = ThemerError::external("bat", "  cache failed\n");
        assert_eq!(err.to_string(), "bat failed: cache failed");
    }

    #[test]
    fn test_empty_errors_are_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
