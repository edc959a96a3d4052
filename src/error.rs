use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("matrix is not invertible (determinant {determinant})")]
    NotInvertible { determinant: f64 },

    #[error("invalid scene: {0}")]
    InvalidScene(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
