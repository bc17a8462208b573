// Types representing an IPPcode22 program

mod error;
mod opcodes;
mod types;

// Re-export all public symbols
pub use error::*;
pub use opcodes::*;
pub use types::*;
