//! Shared data model for the Rill compiler front-end.
//!
//! Rill programs flow through the front-end as a sequence of tree-shaped
//! program representations. This crate defines the two that surround the
//! name-resolution phase:
//!
//! - the *Named* program ([`named::NamedProgram`]), produced by the naming
//!   phase: every declaration owns a canonical symbol, but references are
//!   still textual [`common::QName`]s;
//! - the *Resolved* program ([`resolved::ResolvedProgram`]), produced by
//!   the resolver: every reference is bound to the symbol of its target
//!   declaration and every type is canonical.
//!
//! It also defines the pieces shared by both sides: identifiers and
//! namespace paths ([`common`]), canonical symbols ([`symbol`]), canonical
//! types ([`types`]), and host-provided hooks ([`hook`]).

pub mod common;
pub mod hook;
pub mod named;
pub mod resolved;
pub mod symbol;
pub mod types;

pub use common::{BinaryOp, Ident, NName, NativeRef, QName, Time, UnaryOp};
pub use hook::Hook;
pub use symbol::{DefnSym, EnumSym, TableSym, VarSym};
pub use types::{Kind, Type, TypeVar};
