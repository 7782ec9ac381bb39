//! The Named program: output of the naming phase, input of the resolver.
//!
//! Every declaration already owns its canonical symbol, but references —
//! to definitions, tables, enum tags, and types — are still textual
//! [`QName`]s. The resolver binds them.

pub mod expr;
pub mod pattern;
pub mod predicate;
pub mod types;

pub use expr::{NamedExpr, NamedMatchRule};
pub use pattern::NamedPattern;
pub use predicate::{NamedBodyPredicate, NamedHeadPredicate};
pub use types::NamedType;

use crate::common::{Ident, NName, QName, Time};
use crate::hook::Hook;
use crate::symbol::{DefnSym, EnumSym, TableSym, VarSym};
use crate::types::TypeVar;
use fxhash::{FxHashMap, FxHashSet};
use miette::SourceSpan;
use std::collections::BTreeMap;

/// A whole program after naming, immutable during resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedProgram {
    pub definitions: FxHashMap<NName, FxHashMap<String, NamedDef>>,
    pub enums: FxHashMap<NName, FxHashMap<String, NamedEnum>>,
    pub tables: FxHashMap<NName, FxHashMap<String, NamedTable>>,
    pub indexes: FxHashMap<NName, FxHashMap<String, NamedIndex>>,
    pub lattices: FxHashMap<NamedType, NamedLattice>,
    pub constraints: FxHashMap<NName, Vec<NamedConstraint>>,
    pub properties: FxHashMap<NName, Vec<NamedProperty>>,
    /// Host-provided definitions, keyed by fully-qualified symbol.
    pub hooks: FxHashMap<DefnSym, Hook>,
    /// Symbols considered entry points.
    pub reachable: FxHashSet<DefnSym>,
    /// Phase-timing metadata, passed through untouched.
    pub time: Time,
}

/// A value definition: a function or a named constant.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedDef {
    pub sym: DefnSym,
    pub ident: Ident,
    pub tparams: Vec<NamedTypeParam>,
    pub fparams: Vec<NamedFormalParam>,
    pub exp: NamedExpr,
    /// The base type of the declared type scheme.
    pub tpe: NamedType,
    pub span: SourceSpan,
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedEnum {
    pub sym: EnumSym,
    pub ident: Ident,
    pub tparams: Vec<NamedTypeParam>,
    /// Cases keyed by tag name.
    pub cases: BTreeMap<String, NamedCase>,
    /// The enum's own declared type shape.
    pub tpe: NamedType,
    pub span: SourceSpan,
}

/// A single case of an enum declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedCase {
    pub enum_ident: Ident,
    pub tag: Ident,
    pub tpe: NamedType,
}

/// A table declaration: a relation, or a lattice-valued table whose last
/// attribute carries lattice elements.
#[derive(Debug, Clone, PartialEq)]
pub enum NamedTable {
    Relation {
        sym: TableSym,
        ident: Ident,
        attributes: Vec<NamedAttribute>,
        span: SourceSpan,
    },
    Lattice {
        sym: TableSym,
        ident: Ident,
        keys: Vec<NamedAttribute>,
        value: NamedAttribute,
        span: SourceSpan,
    },
}

impl NamedTable {
    pub fn sym(&self) -> &TableSym {
        match self {
            NamedTable::Relation { sym, .. } | NamedTable::Lattice { sym, .. } => sym,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            NamedTable::Relation { span, .. } | NamedTable::Lattice { span, .. } => *span,
        }
    }
}

/// A named, typed attribute of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedAttribute {
    pub ident: Ident,
    pub tpe: NamedType,
    pub span: SourceSpan,
}

/// An index declaration over a table.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedIndex {
    pub table: QName,
    /// Attribute groups, each a set of column names indexed together.
    pub groups: Vec<Vec<Ident>>,
    pub span: SourceSpan,
}

/// A user-declared bounded lattice: a carrier type and its five
/// operators, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedLattice {
    pub tpe: NamedType,
    pub bot: NamedExpr,
    pub top: NamedExpr,
    pub leq: NamedExpr,
    pub lub: NamedExpr,
    pub glb: NamedExpr,
    /// The namespace the lattice was declared in.
    pub ns: NName,
    pub span: SourceSpan,
}

/// A Datalog constraint: a head atom and zero or more body atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedConstraint {
    pub cparams: Vec<NamedConstraintParam>,
    pub head: NamedHeadPredicate,
    pub body: Vec<NamedBodyPredicate>,
    pub span: SourceSpan,
}

/// A law application to be checked by the verifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedProperty {
    pub law: QName,
    pub exp: NamedExpr,
    pub span: SourceSpan,
}

/// A formal parameter of a definition or lambda.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedFormalParam {
    pub sym: VarSym,
    pub ident: Ident,
    pub tpe: NamedType,
    pub span: SourceSpan,
}

/// A type parameter of a definition or enum.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTypeParam {
    pub ident: Ident,
    pub tvar: TypeVar,
    pub span: SourceSpan,
}

/// A quantified variable of a constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum NamedConstraintParam {
    /// A variable that occurs in the head atom.
    Head { sym: VarSym, tvar: TypeVar, span: SourceSpan },
    /// A variable that occurs in body atoms only.
    Rule { sym: VarSym, tvar: TypeVar, span: SourceSpan },
}
