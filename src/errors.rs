use thiserror::Error;

#[derive(Debug, Error)]
pub enum SparseBenchError {
    #[error("read error: {0}")]
    ReadError(String),
    #[error("parse error: {0}")]
    ParseError(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("render error: {0}")]
    RenderError(String),
}

impl SparseBenchError {
    pub fn read<T: Into<String>>(msg: T) -> Self {
        SparseBenchError::ReadError(msg.into())
    }

    pub fn parse<T: Into<String>>(msg: T) -> Self {
        SparseBenchError::ParseError(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        SparseBenchError::InvalidInput(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SparseBenchError::NotFound(msg.into())
    }

    pub fn render<T: Into<String>>(msg: T) -> Self {
        SparseBenchError::RenderError(msg.into())
    }
}
