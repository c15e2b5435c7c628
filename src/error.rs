use std::fmt;

use crate::object::Object;
use crate::token::{Location, Token, Type};

/// An error produced by the scanner. The scanner does not recover from a
/// lexical error; the first one encountered ends scanning.
#[derive(Debug)]
pub struct ScanError {
    pub location: Location,
    pub message: String,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[line {line}:{column}] Error: {message}",
            line = self.location.line + 1,
            column = self.location.column + 1,
            message = self.message,
        )
    }
}

impl ScanError {
    pub fn report(&self) {
        eprintln!("{self}");
    }
}

/// An error produced by the parser. Parsing recovers via panic-mode
/// synchronization, so many of these can accumulate from a single run.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.token.r#type == Type::EOF {
            write!(
                f,
                "[line {line}:{column}] Error at end: {message}",
                line = self.token.location.line + 1,
                column = self.token.location.column + 1,
                message = self.message,
            )
        } else {
            write!(
                f,
                "[line {line}:{column}] Error at '{lexeme}': {message}",
                line = self.token.location.line + 1,
                column = self.token.location.column + 1,
                lexeme = self.token.lexeme,
                message = self.message,
            )
        }
    }
}

impl ParseError {
    pub fn report(&self) {
        eprintln!("{self}");
    }
}

/// A static error produced by the resolver.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[line {line}:{column}] Error at '{lexeme}': {message}",
            line = self.token.location.line + 1,
            column = self.token.location.column + 1,
            lexeme = self.token.lexeme,
            message = self.message,
        )
    }
}

impl ResolveError {
    pub fn report(&self) {
        eprintln!("{self}");
    }
}

/// An error raised during evaluation. Carries the token at the error site so
/// callers can report a line and column.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[line {line}:{column}] Error at '{lexeme}': {message}",
            line = self.token.location.line + 1,
            column = self.token.location.column + 1,
            lexeme = self.token.lexeme,
            message = self.message,
        )
    }
}

impl RuntimeError {
    pub fn report(&self) {
        eprintln!("{self}");
    }
}

/// Non-local control flow threaded through statement execution. `return` in
/// Lox is not an exceptional condition, so it travels the same `Result`
/// channel as a runtime error rather than unwinding through a panic.
#[derive(Debug, Clone)]
pub enum Signal {
    Return(Object),
    Error(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Signal::Error(error)
    }
}

pub type EvalResult = Result<Object, Signal>;
pub type ExecResult = Result<(), Signal>;
