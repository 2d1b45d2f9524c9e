//! dumpgen-compiler
//!
//! This crate implements:
//!  1) A tokenizer for C-style struct declarations,
//!  2) A field walker that recognizes whitelisted `type name[N];` members,
//!  3) A formatting rule table (declared type → printf fragment + strategy),
//!  4) Statement emission (`generate_statements` → `Vec<String>`),
//!  5) Error types (`DumpError`).

pub mod error;
pub mod types;
pub mod tokenizer;
pub mod rules;
pub mod walker;
pub mod emitter;
pub mod compiler;

pub use compiler::collect_fields;
pub use compiler::generate_statements;
pub use error::DumpError;
pub use types::{EmitContext, Field};
