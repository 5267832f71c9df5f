use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Fullscreen request failed: {0}")]
    Fullscreen(String),

    #[error("Empty media list")]
    EmptyMediaList,
}

pub type Result<T> = std::result::Result<T, VitrineError>;
