/// Failures that belong to the command-line layer rather than the engine.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("could not determine the home directory")]
    NoHome,

    #[error("loading configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// At least one application reported an error; the details were already
    /// printed per application.
    #[error("some apps failed to {command}")]
    ActivationFailed { command: &'static str },
}
