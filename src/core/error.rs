use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("grid_size {grid_size} is not evenly divisible by partial_size {partial_size}")]
    IndivisibleGrid {
        grid_size: usize,
        partial_size: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
