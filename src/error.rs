use std::sync::atomic::{AtomicBool, Ordering};

use crate::object::Object;
use crate::token::{Token, Type};

static HAD_ERROR: AtomicBool = AtomicBool::new(false);
static HAD_RUNTIME_ERROR: AtomicBool = AtomicBool::new(false);

/// Checks if a compile-time or runtime error occurred.
pub fn did_error() -> bool {
    HAD_ERROR.load(Ordering::SeqCst) || HAD_RUNTIME_ERROR.load(Ordering::SeqCst)
}

/// Checks if a runtime error occurred.
pub fn did_runtime_error() -> bool {
    HAD_RUNTIME_ERROR.load(Ordering::SeqCst)
}

/// Resets both error flags. Used by the REPL after every line.
pub fn reset_error() {
    HAD_ERROR.store(false, Ordering::SeqCst);
    HAD_RUNTIME_ERROR.store(false, Ordering::SeqCst);
}

/// Every error type implements this to report itself and flip the
/// appropriate flag.
pub trait Error {
    fn throw(&self);
}

/// A lexical error: unterminated string, unterminated number, unexpected
/// character.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Error for ScanError {
    fn throw(&self) {
        eprintln!("[line {}] Error: {}", self.line, self.message);
        HAD_ERROR.store(true, Ordering::SeqCst);
    }
}

/// A syntactic error raised by the parser.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Error for ParseError {
    fn throw(&self) {
        if self.token.r#type == Type::EOF {
            eprintln!("[line {}] Error at end: {}", self.token.line(), self.message);
        } else {
            eprintln!("[line {}] Error at '{}': {}", self.token.line(), self.token.lexeme, self.message);
        }

        HAD_ERROR.store(true, Ordering::SeqCst);
    }
}

/// A static-semantic error raised by the resolver.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Error for ResolveError {
    fn throw(&self) {
        if self.token.r#type == Type::EOF {
            eprintln!("[line {}] Error at end: {}", self.token.line(), self.message);
        } else {
            eprintln!("[line {}] Error at '{}': {}", self.token.line(), self.token.lexeme, self.message);
        }

        HAD_ERROR.store(true, Ordering::SeqCst);
    }
}

/// A runtime error. Every constructor call must supply the token responsible
/// so the line number can always be printed.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Error for RuntimeError {
    fn throw(&self) {
        eprintln!("{}\n[line {}]", self.message, self.token.line());
        HAD_RUNTIME_ERROR.store(true, Ordering::SeqCst);
    }
}

/// Non-local control flow, distinguished from both compile-time and runtime
/// errors (SPEC_FULL §5/§9). `Unwind` is what statement execution threads
/// through `?`; only `Error` corresponds to an actual fault.
#[derive(Debug)]
pub enum Unwind {
    Return(Object),
    Break,
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}
