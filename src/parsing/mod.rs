//! parser for the IPPcode22 language

use std::io::Read;
use tracing::debug;

use crate::language::{Document, LoadingError};

pub mod parser;

// Re-export all public symbols
pub use parser::ParsingError;

/// Read an entire input stream into an owned String. Ownership is passed
/// back to the caller so that the Document returned by parse() below can
/// borrow from it.
pub fn load(mut input: impl Read) -> Result<String, LoadingError> {
    let mut content = String::new();

    match input.read_to_string(&mut content) {
        Ok(size) => {
            debug!("Read {} bytes", size);
            Ok(content)
        }
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::InvalidData => Err(LoadingError {
                    problem: "Input is not valid UTF-8".to_string(),
                    details: error.to_string(),
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                }),
            }
        }
    }
}

/// Parse text into a Document object, or return the first error
/// encountered.
pub fn parse(content: &str) -> Result<Document<'_>, ParsingError<'_>> {
    match parser::parse_program(content) {
        Ok(document) => {
            if document.is_empty() {
                debug!("No instructions found");
            } else {
                debug!(
                    "Found {} instruction{}",
                    document.len(),
                    if document.len() == 1 { "" } else { "s" }
                );
            }
            Ok(document)
        }
        Err(error) => {
            debug!("error: {:?}", error);
            Err(error)
        }
    }
}
