//! The name resolution pass for the Rill compiler.
//!
//! This crate transforms a [`rill_ast::named::NamedProgram`] into a
//! [`rill_ast::resolved::ResolvedProgram`]: every textual reference — to a
//! value definition, a table, an enum tag, or a type — is bound to the
//! canonical symbol of the declaration it targets, and programs with
//! undefined or ambiguous references are rejected.
//!
//! Resolution is a pure, deterministic transformation. Independent
//! sub-resolutions proceed even after one fails, so a single run reports
//! every defect; only dependency chains short-circuit.

pub mod core;
pub mod error;
pub mod lookup;
pub mod resolve_decl;
pub mod resolve_expr;
pub mod resolve_params;
pub mod resolve_pattern;
pub mod resolve_predicate;
pub mod resolve_types;

pub use crate::core::{resolve, Resolver};
pub use error::ResolutionError;
pub use lookup::{lookup_ref, lookup_table, lookup_tag, lookup_type, RefTarget};

/// An accumulating result: the value, or every error found on the way.
pub type Validation<T> = Result<T, Vec<ResolutionError>>;
