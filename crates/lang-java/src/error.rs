use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty type expression")]
    Empty,
    #[error("Failed to load Java grammar: {0}")]
    Language(String),
    #[error("Invalid Java type syntax: {0}")]
    Syntax(String),
    #[error("Unsupported type construct `{kind}` in {text}")]
    Unsupported { kind: String, text: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
