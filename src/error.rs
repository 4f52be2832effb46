use thiserror::Error;

/// Errors from the probing and configuration layers.
///
/// Track selection and label formatting are total functions and never fail;
/// an empty track list or an unknown language code is a value, not an error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("probe error: {0}")]
    Probe(String),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}
