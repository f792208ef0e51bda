//! Graph storage for Oblique.
//!
//! This crate provides:
//! - [`Object`] - One node: its reference, content and outbound references
//! - [`Database`] - The read-only typed graph, with forward and reverse indices
//! - [`GraphBuilder`] - The only way to add objects and edges; enforces the type system

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod database;
pub mod object;

pub use builder::{Attributes, GraphBuilder};
pub use database::Database;
pub use object::{Object, Origin};
