#![allow(clippy::needless_return)]

//! Rocks is a programming language written in Rust. It is a dynamically typed language with
//! lexical scoping and first-class functions. Rocks is a tree-walk interpreter with a hand-written
//! recursive descent parser. Rocks is a hobby project and is not intended for production use.
//!
//! Rocks is a dynamically typed language. This means that the type of a variable is determined at
//! runtime. This is in contrast to statically typed languages, where the type of a variable is
//! determined at compile time. Dynamically typed languages are often easier to use, but are
//! generally slower than statically typed languages.
//!
//! Rocks is a tree-walk interpreter. This means that the interpreter walks the abstract syntax tree
//! (AST) and evaluates each node. This is in contrast to a compiler, which would convert the AST
//! into bytecode or machine code. Tree-walk interpreters are generally easier to implement than
//! compilers, but are generally slower than compilers.
//!
//! Rocks is a hobby project and is not intended for production use. The goal of this project is to
//! learn more about programming languages and interpreters. This project is inspired by the
//! [Crafting Interpreters](https://craftinginterpreters.com/) book by Bob Nystrom.
//!
//! ## Scanning
//! The first step in the interpreter is scanning. Scanning is the process of converting a string of
//! characters into a list of tokens. A token is a single unit of a programming language. For
//! example, the string `1 + 2` would be converted into the following tokens:
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module as an iterator over the characters
//! in the source code. It is a simple state machine that returns the next token in the source code
//! when called.
//!
//! The scanner reports syntax errors in the source code as a [`ScanError`](error::ScanError).
//! These errors are trivial problems like an unterminated string literal or an unexpected character.
//! The scanner does not attempt to recover from one: the first error found ends the scan.
//!
//! ## Parsing
//! The second step in the interpreter is parsing. Parsing is the process of converting a list of
//! tokens into an abstract syntax tree (AST). The parser is implemented in the [`parser`](parser)
//! module as a recursive descent parser. The parser transforms the list of tokens into expressions
//! and statements. [`Expressions`](expr::Expr) are pieces of code that produce a value, specifically an
//! [`Object`](object::Object). Objects are an umbrella term for all types of values in Rocks
//! including literals, functions, classes and instances. [`Statements`](stmt::Stmt) are pieces of code
//! that do not produce a value but instead perform some action. These actions modify the state of the
//! program and thus, are called side-effects. For example, a variable decleration or an if clause
//! would be classified as statements.
//!
//! The parser reports syntax errors in the source code as a [`ParseError`](error::ParseError).
//! Unlike the scanner, the parser will continue parsing the source code even after a syntax error
//! using a technique called synchronization, so that several mistakes can be reported from one run.
//!
//! ## Resolving
//! The third step in the interpreter is resolving. Resolving is the process of statically analyzing
//! the AST to determine the scope of each variable. While this requires a pre-pass of the AST, it
//! is necessary to construct robust lexical scoping. The resolver is implemented in the
//! [`resolver`](resolver) module and reports errors as a [`ResolveError`](error::ResolveError). These
//! errors are syntactically valid but semantically invalid and therefore cannot be caught by the
//! scanner or the parser. For example, the following expression is valid Rocks syntax but is
//! semantically invalid because `this` is used outside of a class:
//! ```text
//! print this;
//! ```
//!
//! ## Interpreting
//! The final step in the interpreter is _interpreting_. Interpreting is the process of evaluating the
//! AST. The interpreter is implemented in the [`interpreter`](interpreter) module. Thanks to all the
//! previous steps, the interpreter is able to evaluate the AST and produce a result. The interpreter
//! reports errors as a [`RuntimeError`](error::RuntimeError). While the scanner, the parser and the
//! resolver try to catch as many errors as possible before running the code, most errors can only be
//! caught at runtime. For example, the following expression is valid Rocks syntax but is semantically
//! invalid because it tries to add a string and a number:
//! ```text
//! var a = "123";
//! var b = a + 123;
//! ```
//! The interpreter is also responsible for managing the environment. The environment is a mapping of
//! variable names to their values, implemented in the [`environment`](environment) module as a
//! parent-linked chain of scopes so closures can capture their defining environment.

use std::fs;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use substring::Substring;

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use error::{ParseError, ResolveError, RuntimeError, ScanError};
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// What happened while running a chunk of source. The CLI driver turns this
/// into an exit code; the REPL just uses it to decide whether to keep the
/// prompt quiet or not.
pub enum Outcome {
    Ok,
    StaticError,
    RuntimeError,
}

/// The interpreter driver: owns the long-lived [`Interpreter`] and the I/O
/// concerns (file reading, the REPL) around it. Generic over the output
/// sink so a test can hand it an in-memory buffer instead of real stdout.
#[allow(non_camel_case_types)]
pub struct rocks<'a> {
    interpreter: Interpreter<'a>,
}

impl<'a> rocks<'a> {
    pub fn new(output: &'a mut dyn std::io::Write) -> Self {
        rocks { interpreter: Interpreter::new(output) }
    }

    /// Runs a whole file. A leading shebang line (`#!/usr/bin/env rocks`) is
    /// stripped before scanning so scripts can be made directly executable.
    pub fn run_file(&mut self, path: &str) -> Outcome {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("Could not read '{path}': {error}");
                return Outcome::StaticError;
            }
        };

        let contents = if contents.starts_with("#!") {
            let body_start = contents.find('\n').map_or(contents.len(), |i| i + 1);
            contents.substring(body_start, contents.len())
        } else {
            contents.as_str()
        };

        self.run(contents)
    }

    /// Runs an interactive prompt, one line at a time, against the same
    /// interpreter so variables and functions persist across lines. History
    /// is kept at `~/.rocks_history` when a home directory can be resolved.
    pub fn run_prompt(&mut self) {
        let mut editor = DefaultEditor::new().expect("failed to initialize the line editor");
        let history_path = Self::history_path();
        if let Some(path) = &history_path {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(line.as_str());
                    self.run(&line);
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("Error reading input: {error}");
                    break;
                }
            }
        }

        if let Some(path) = &history_path {
            let _ = editor.save_history(path);
        }
    }

    fn history_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".rocks_history"))
    }

    fn run(&mut self, source: &str) -> Outcome {
        let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
        if !scan_errors.is_empty() {
            scan_errors.iter().for_each(ScanError::report);
            return Outcome::StaticError;
        }

        let (statements, parse_errors) = Parser::new(tokens).parse();
        if !parse_errors.is_empty() {
            parse_errors.iter().for_each(ParseError::report);
            return Outcome::StaticError;
        }

        let (locals, resolve_errors) = Resolver::new().resolve(&statements);
        if !resolve_errors.is_empty() {
            resolve_errors.iter().for_each(ResolveError::report);
            return Outcome::StaticError;
        }

        self.interpreter.resolve(locals);

        match self.interpreter.interpret(&statements) {
            Ok(()) => Outcome::Ok,
            Err(error) => {
                RuntimeError::report(&error);
                Outcome::RuntimeError
            }
        }
    }
}
