//! Core types for Oblique.
//!
//! This crate provides:
//! - [`Ref`] - Validated `type/identifier` object references
//! - [`TypeKind`] - Strict or lazy handling of a type's instances
//! - [`Error`] - Rich error types with context
//! - [`grammar`] - Textual constants of the language

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod grammar;
pub mod reference;
pub mod types;

pub use error::{Error, ErrorCategory, ErrorContext, ErrorKind, Result};
pub use reference::{Ref, is_ident_char, is_identifier, is_type_char, is_type_name};
pub use types::TypeKind;
