use std::{fmt, process::ExitCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError {
    pub problem: String,
    pub details: String,
}

impl fmt::Display for LoadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// Process exit statuses. Success is zero; everything else is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// unknown flag, or `--help` alongside other arguments
    Parameter = 10,
    /// the input could not be read
    InputFile = 11,
    /// the output could not be written
    OutputFile = 12,
    /// missing or malformed `.IPPcode22` header
    Header = 21,
    /// unknown opcode
    Opcode = 22,
    /// wrong argument count, or an argument failing its grammar
    Syntax = 23,
    Internal = 99,
}

impl Status {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}
