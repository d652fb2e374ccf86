use thiserror::Error;

/// Errors produced by the walkthrough examples.
#[derive(Error, Debug)]
pub enum SolidError {
    #[error("invalid {dimension} for {shape}: {value} (must be a positive, finite number)")]
    InvalidDimension {
        shape: &'static str,
        dimension: &'static str,
        value: f64,
    },

    #[error("{shape} area is {area}; dimensions must give a positive, finite area")]
    InvalidArea { shape: &'static str, area: f64 },

    #[error("{variant} does not support '{operation}'")]
    UnsupportedOperation {
        variant: &'static str,
        operation: &'static str,
    },

    #[error("invalid demo config: {0}")]
    Config(String),

    #[error("failed to write demo output: {0}")]
    Io(#[from] std::io::Error),
}

impl SolidError {
    pub fn invalid_dimension(shape: &'static str, dimension: &'static str, value: f64) -> Self {
        Self::InvalidDimension {
            shape,
            dimension,
            value,
        }
    }
}

impl From<toml::de::Error> for SolidError {
    fn from(err: toml::de::Error) -> Self {
        SolidError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
