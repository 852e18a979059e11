//! Errors surfaced by the render driver and image output.
//!
//! The tracing hot path never fails; only configuration and I/O do.

use thiserror::Error;

/// Errors that can occur while setting up a render or writing its image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;
