//! Host error type.

/// Errors that stop the host before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },

    /// The `[package.metadata.leptos]` section could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// Binding the listener or serving connections failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
