use thiserror::Error;

/// Library error type for carousel operations.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more configured photo directories are invalid or unreadable.
    #[error("invalid photo directory: {0}")]
    BadDir(String),

    /// A carousel needs at least one page.
    #[error("no pages to show")]
    EmptyCollection,

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),

    /// Console input that does not name a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A known command with a missing or malformed argument.
    #[error("invalid argument for {command}: {value:?}")]
    InvalidArgument { command: &'static str, value: String },

    /// A slot outside the current window.
    #[error("slot {slot} is outside the window (size {window})")]
    SlotOutOfRange { slot: usize, window: usize },
}
