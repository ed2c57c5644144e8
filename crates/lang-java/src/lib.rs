pub mod error;
pub mod parser;

pub use error::{ParseError, Result};
pub use parser::JavaTypeParser;
