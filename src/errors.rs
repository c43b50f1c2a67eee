#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Transport(#[from] azure_core::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),

    #[error("invalid port `{0}`")]
    InvalidPort(String),
}

pub type UploadResult<T> = std::result::Result<T, UploadError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
