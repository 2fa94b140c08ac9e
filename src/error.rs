use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to load font: {0}")]
    FontLoad(String),

    #[error("Failed to decode embedded asset {name}: {message}")]
    AssetDecode { name: &'static str, message: String },

    #[error("Failed to decode artwork image: {0}")]
    ArtworkDecode(String),

    #[error("Failed to encode output image: {0}")]
    ImageEncode(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
