use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassfotoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid crop region: {0}")]
    InvalidRegion(String),

    #[error("Unknown size profile: {0}")]
    UnknownProfile(String),

    #[error("Invalid size profile: {0}")]
    InvalidProfile(String),
}

pub type Result<T> = std::result::Result<T, PassfotoError>;
