//! The Resolved program: output of the resolver, input of the type
//! checker.
//!
//! Structurally parallel to the Named program, with every textual
//! reference replaced by the symbol of its target declaration and every
//! type in checking position replaced by a canonical [`Type`]. Three
//! by-symbol maps are materialised alongside the per-namespace maps for
//! direct downstream lookup.

pub mod expr;
pub mod pattern;
pub mod predicate;
pub mod types;

pub use expr::{ResolvedExpr, ResolvedMatchRule};
pub use pattern::ResolvedPattern;
pub use predicate::{ResolvedBodyPredicate, ResolvedHeadPredicate};
pub use types::TypeShape;

use crate::common::{Ident, NName, Time};
use crate::hook::Hook;
use crate::symbol::{DefnSym, EnumSym, TableSym, VarSym};
use crate::types::{Type, TypeVar};
use fxhash::{FxHashMap, FxHashSet};
use miette::SourceSpan;
use std::collections::BTreeMap;

/// A whole program after resolution, immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedProgram {
    pub definitions: FxHashMap<NName, FxHashMap<String, ResolvedDef>>,
    pub enums: FxHashMap<NName, FxHashMap<String, ResolvedEnum>>,
    pub tables: FxHashMap<NName, FxHashMap<String, ResolvedTable>>,
    pub indexes: FxHashMap<NName, FxHashMap<String, ResolvedIndex>>,
    pub lattices: FxHashMap<Type, ResolvedLattice>,
    pub constraints: FxHashMap<NName, Vec<ResolvedConstraint>>,
    pub properties: FxHashMap<NName, Vec<ResolvedProperty>>,
    pub definitions_by_symbol: FxHashMap<DefnSym, ResolvedDef>,
    pub enums_by_symbol: FxHashMap<EnumSym, ResolvedEnum>,
    pub tables_by_symbol: FxHashMap<TableSym, ResolvedTable>,
    pub hooks: FxHashMap<DefnSym, Hook>,
    pub reachable: FxHashSet<DefnSym>,
    pub time: Time,
}

/// A resolved value definition. Carries the symbol assigned during naming.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDef {
    pub sym: DefnSym,
    pub ident: Ident,
    pub tparams: Vec<ResolvedTypeParam>,
    pub fparams: Vec<ResolvedFormalParam>,
    pub exp: ResolvedExpr,
    pub tpe: Type,
    pub span: SourceSpan,
}

/// A resolved enum declaration.
///
/// Case types keep their written form (see [`TypeShape`]) so later
/// diagnostics can echo the source; the kind checker canonicalises them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEnum {
    pub sym: EnumSym,
    pub ident: Ident,
    pub tparams: Vec<ResolvedTypeParam>,
    pub cases: BTreeMap<String, ResolvedCase>,
    pub tpe: TypeShape,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCase {
    pub enum_ident: Ident,
    pub tag: Ident,
    pub tpe: TypeShape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTable {
    Relation {
        sym: TableSym,
        ident: Ident,
        attributes: Vec<ResolvedAttribute>,
        span: SourceSpan,
    },
    Lattice {
        sym: TableSym,
        ident: Ident,
        keys: Vec<ResolvedAttribute>,
        value: ResolvedAttribute,
        span: SourceSpan,
    },
}

impl ResolvedTable {
    pub fn sym(&self) -> &TableSym {
        match self {
            ResolvedTable::Relation { sym, .. } | ResolvedTable::Lattice { sym, .. } => sym,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttribute {
    pub ident: Ident,
    pub tpe: Type,
    pub span: SourceSpan,
}

/// A resolved index: the table is bound to its declaration symbol, the
/// attribute groups are carried verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIndex {
    pub table: TableSym,
    pub groups: Vec<Vec<Ident>>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLattice {
    pub tpe: Type,
    pub bot: ResolvedExpr,
    pub top: ResolvedExpr,
    pub leq: ResolvedExpr,
    pub lub: ResolvedExpr,
    pub glb: ResolvedExpr,
    pub ns: NName,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConstraint {
    pub cparams: Vec<ResolvedConstraintParam>,
    pub head: ResolvedHeadPredicate,
    pub body: Vec<ResolvedBodyPredicate>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProperty {
    pub law: DefnSym,
    pub exp: ResolvedExpr,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFormalParam {
    pub sym: VarSym,
    pub ident: Ident,
    pub tpe: Type,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTypeParam {
    pub ident: Ident,
    pub tvar: TypeVar,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedConstraintParam {
    Head { sym: VarSym, tvar: TypeVar, span: SourceSpan },
    Rule { sym: VarSym, tvar: TypeVar, span: SourceSpan },
}
