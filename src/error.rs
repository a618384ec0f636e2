use std::path::PathBuf;

/// Crate-level error type for the pictone sonification library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input file has an unsupported extension.
    #[error("unsupported input file type `{}`: use .jpg, .jpeg or .png", .0.display())]
    InvalidInputExtension(PathBuf),

    /// Output file extension does not match the container the encoder produces.
    #[error("unsupported output file type `{}`: use .{expected}", path.display())]
    InvalidOutputExtension {
        path: PathBuf,
        expected: &'static str,
    },

    /// Image decoded to an unusable grid (zero width or height).
    #[error("malformed image: {0}")]
    MalformedImage(String),

    /// Image decoding errors.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// WAV container errors.
    #[error(transparent)]
    Wav(#[from] hound::Error),

    /// File I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for pictone operations.
pub type Result<T> = std::result::Result<T, Error>;
