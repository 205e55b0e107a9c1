use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("no page targets configured")]
    #[diagnostic(
        code(listab::config::no_targets),
        help("omit `targets` to use the default repository pages")
    )]
    NoTargets,

    #[error("page target {target} has no segment rules")]
    #[diagnostic(code(listab::config::empty_target))]
    EmptyTarget { target: usize },

    #[error("page target {target} has an empty value for segment {index}")]
    #[diagnostic(code(listab::config::empty_segment))]
    EmptySegmentValue { target: usize, index: usize },

    #[error("style property `{property}` must not be empty")]
    #[diagnostic(code(listab::config::empty_style))]
    EmptyStyle { property: &'static str },
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("browser environment unavailable: {what}")]
    #[diagnostic(code(listab::browser::environment))]
    Environment { what: &'static str },

    #[error("{context}: {message}")]
    #[diagnostic(code(listab::browser::js))]
    Browser {
        context: &'static str,
        message: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
