//! Deploying a theme's files and making them active.
//!
//! [`install`] copies each application's files from the theme directory to
//! where the application looks for them. [`switch`] then points every
//! application at the theme. Both run a fixed sequence of per-application
//! handlers; a failing handler is recorded in its [`ActivationOutcome`] and
//! never stops the handlers after it.

pub mod install;
pub mod json_edit;
pub mod state;
pub mod switch;
pub mod tools;

pub use install::install;
pub use state::{StateStore, Variant, resolve_theme_name};
pub use switch::switch;
pub use tools::{SystemTools, ToolOutput, ToolRunner};

use crate::error::ThemerError;
use std::path::PathBuf;

/// Environment shared by every handler.
pub struct ActivationContext<'a> {
    pub home: PathBuf,
    pub tools: &'a dyn ToolRunner,
}

impl<'a> ActivationContext<'a> {
    pub fn new(home: impl Into<PathBuf>, tools: &'a dyn ToolRunner) -> Self {
        Self {
            home: home.into(),
            tools,
        }
    }

    /// `<home>/.config`
    pub fn config_dir(&self) -> PathBuf {
        self.home.join(".config")
    }

    /// `<home>/.config/the-themer`, which also holds staged files.
    pub fn themer_dir(&self) -> PathBuf {
        self.config_dir().join("the-themer")
    }
}

/// What happened to one application during install or switch.
#[derive(Debug)]
pub struct ActivationOutcome {
    pub app: &'static str,
    /// The theme has nothing for this application
    pub skipped: bool,
    pub message: String,
    pub error: Option<ThemerError>,
}

impl ActivationOutcome {
    pub fn done(app: &'static str, message: impl Into<String>) -> Self {
        Self {
            app,
            skipped: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn skipped(app: &'static str, message: impl Into<String>) -> Self {
        Self {
            app,
            skipped: true,
            message: message.into(),
            error: None,
        }
    }

    /// A failure, keeping whatever progress message preceded it.
    pub fn failed(app: &'static str, message: impl Into<String>, error: ThemerError) -> Self {
        Self {
            app,
            skipped: false,
            message: message.into(),
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// True when any outcome carries an error.
pub fn has_errors(outcomes: &[ActivationOutcome]) -> bool {
    outcomes.iter().any(ActivationOutcome::is_error)
}
