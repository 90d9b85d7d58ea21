//! chung programming language front end
//!
//! A tokenizer and recursive-descent parser producing positioned tokens,
//! an abstract syntax tree, and structured diagnostics with caret
//! underlines. Lexing and parsing never fail outright: malformed input is
//! collected as diagnostics and recovery resumes at the next statement.
//!
//! # Example
//!
//! ```
//! use chung::frontend::Compiler;
//!
//! let compiler = Compiler::new();
//! let output = compiler.parse_source("<input>", "let x = (1 + 2) * 69;");
//! assert!(output.is_clean());
//! assert_eq!(output.statements.len(), 1);
//! ```

#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod frontend;
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "chung";
