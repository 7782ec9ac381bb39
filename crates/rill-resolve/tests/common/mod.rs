//! Shared builders for constructing Named programs in tests.
//!
//! The naming phase is out of scope for this crate, so tests assemble
//! `NamedProgram` values directly. Spans are synthesized from the given
//! offsets; symbol identity ignores spans, so offsets only matter where a
//! test asserts on locations.

#![allow(dead_code)]

use miette::SourceSpan;
use rill_ast::common::{Ident, NName, QName};
use rill_ast::hook::Hook;
use rill_ast::named::{
    NamedAttribute, NamedCase, NamedConstraint, NamedDef, NamedEnum, NamedExpr, NamedIndex,
    NamedLattice, NamedProgram, NamedTable, NamedType,
};
use rill_ast::symbol::{DefnSym, EnumSym, TableSym};
use rill_ast::types::{Type, TypeVar};
use std::collections::BTreeMap;

pub fn sp(offset: usize) -> SourceSpan {
    (offset, 1).into()
}

pub fn ident(name: &str, offset: usize) -> Ident {
    Ident::new(name, (offset, name.len()).into())
}

pub fn root() -> NName {
    NName::root()
}

pub fn nname(parts: &[&str]) -> NName {
    let parts: Vec<Ident> = parts.iter().map(|part| ident(part, 0)).collect();
    NName::new(parts, sp(0))
}

pub fn unqualified(name: &str, offset: usize) -> QName {
    QName::new(NName::root(), ident(name, offset), sp(offset))
}

pub fn qualified(ns: &[&str], name: &str, offset: usize) -> QName {
    QName::new(nname(ns), ident(name, offset), sp(offset))
}

pub fn owned_strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

pub fn tvar(id: u32) -> TypeVar {
    TypeVar(id)
}

// --- types ---

pub fn type_ref(name: &str, offset: usize) -> NamedType {
    NamedType::Ref(unqualified(name, offset))
}

pub fn qualified_type_ref(ns: &[&str], name: &str, offset: usize) -> NamedType {
    NamedType::Ref(qualified(ns, name, offset))
}

// --- expressions ---

pub fn unit_expr(offset: usize) -> NamedExpr {
    NamedExpr::Unit { span: sp(offset) }
}

pub fn int32_expr(lit: i32, offset: usize) -> NamedExpr {
    NamedExpr::Int32 { lit, span: sp(offset) }
}

pub fn ref_expr(name: QName) -> NamedExpr {
    let span = name.span;
    NamedExpr::Ref { name, tvar: tvar(0), span }
}

pub fn tag_expr(enum_name: Option<QName>, tag: &str, offset: usize) -> NamedExpr {
    NamedExpr::Tag {
        enum_name,
        tag: ident(tag, offset),
        exp: Box::new(unit_expr(offset)),
        tvar: tvar(0),
        span: sp(offset),
    }
}

// --- declarations ---

pub fn def(ns: &[&str], name: &str, exp: NamedExpr, tpe: NamedType, offset: usize) -> NamedDef {
    NamedDef {
        sym: DefnSym::new(owned_strings(ns), name, sp(offset)),
        ident: ident(name, offset),
        tparams: Vec::new(),
        fparams: Vec::new(),
        exp,
        tpe,
        span: sp(offset),
    }
}

/// An enum declaration whose cases all carry the unit type. Each entry of
/// `tags` is a case name and the offset of its declaration site.
pub fn enum_decl(ns: &[&str], name: &str, tags: &[(&str, usize)], offset: usize) -> NamedEnum {
    let sym = EnumSym::new(owned_strings(ns), name, sp(offset));
    let cases: BTreeMap<String, NamedCase> = tags
        .iter()
        .map(|(tag, tag_offset)| {
            let case = NamedCase {
                enum_ident: ident(name, offset),
                tag: ident(tag, *tag_offset),
                tpe: NamedType::Unit(sp(*tag_offset)),
            };
            (tag.to_string(), case)
        })
        .collect();
    NamedEnum {
        sym: sym.clone(),
        ident: ident(name, offset),
        tparams: Vec::new(),
        cases,
        tpe: NamedType::Enum(sym),
        span: sp(offset),
    }
}

pub fn relation(ns: &[&str], name: &str, attrs: Vec<(&str, NamedType)>, offset: usize) -> NamedTable {
    NamedTable::Relation {
        sym: TableSym::new(owned_strings(ns), name, sp(offset)),
        ident: ident(name, offset),
        attributes: attrs
            .into_iter()
            .map(|(attr, tpe)| NamedAttribute {
                ident: ident(attr, offset),
                tpe,
                span: sp(offset),
            })
            .collect(),
        span: sp(offset),
    }
}

pub fn lattice_table(
    ns: &[&str],
    name: &str,
    keys: Vec<(&str, NamedType)>,
    value: (&str, NamedType),
    offset: usize,
) -> NamedTable {
    NamedTable::Lattice {
        sym: TableSym::new(owned_strings(ns), name, sp(offset)),
        ident: ident(name, offset),
        keys: keys
            .into_iter()
            .map(|(attr, tpe)| NamedAttribute {
                ident: ident(attr, offset),
                tpe,
                span: sp(offset),
            })
            .collect(),
        value: NamedAttribute {
            ident: ident(value.0, offset),
            tpe: value.1,
            span: sp(offset),
        },
        span: sp(offset),
    }
}

/// A bounded lattice declaration whose five operators are unit
/// expressions, enough to exercise carrier-type resolution.
pub fn lattice_decl(tpe: NamedType, ns: NName, offset: usize) -> NamedLattice {
    NamedLattice {
        tpe,
        bot: unit_expr(offset),
        top: unit_expr(offset),
        leq: unit_expr(offset),
        lub: unit_expr(offset),
        glb: unit_expr(offset),
        ns,
        span: sp(offset),
    }
}

pub fn constraint(
    head: rill_ast::named::NamedHeadPredicate,
    body: Vec<rill_ast::named::NamedBodyPredicate>,
    offset: usize,
) -> NamedConstraint {
    NamedConstraint {
        cparams: Vec::new(),
        head,
        body,
        span: sp(offset),
    }
}

pub fn hook(ns: &[&str], name: &str) -> Hook {
    Hook::new(
        DefnSym::new(owned_strings(ns), name, sp(0)),
        Type::Arrow { params: vec![Type::Bool], ret: Box::new(Type::Bool) },
    )
}

// --- program assembly ---

pub fn add_def(program: &mut NamedProgram, ns: &[&str], decl: NamedDef) {
    program
        .definitions
        .entry(nname(ns))
        .or_default()
        .insert(decl.ident.name.clone(), decl);
}

pub fn add_enum(program: &mut NamedProgram, ns: &[&str], decl: NamedEnum) {
    program
        .enums
        .entry(nname(ns))
        .or_default()
        .insert(decl.ident.name.clone(), decl);
}

pub fn add_table(program: &mut NamedProgram, ns: &[&str], decl: NamedTable) {
    let name = decl.sym().name.clone();
    program.tables.entry(nname(ns)).or_default().insert(name, decl);
}

pub fn add_index(program: &mut NamedProgram, ns: &[&str], name: &str, decl: NamedIndex) {
    program
        .indexes
        .entry(nname(ns))
        .or_default()
        .insert(name.to_string(), decl);
}

pub fn add_hook(program: &mut NamedProgram, ns: &[&str], name: &str) {
    let hook = hook(ns, name);
    program.hooks.insert(hook.sym.clone(), hook);
}

pub fn add_constraint(program: &mut NamedProgram, ns: &[&str], decl: NamedConstraint) {
    program.constraints.entry(nname(ns)).or_default().push(decl);
}
