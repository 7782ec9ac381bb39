//! Declaration resolvers.
//!
//! One resolver per declaration category. Each keeps the symbol assigned
//! during naming; resolution binds the references inside the declaration,
//! never the declaration's own identity.

use crate::error::{record, ResolutionError};
use crate::lookup::{lookup_ref, lookup_table, lookup_type, RefTarget};
use crate::resolve_expr::resolve_expr;
use crate::resolve_params::{resolve_constraint_param, resolve_formal_param, resolve_type_param};
use crate::resolve_predicate::{resolve_body_predicate, resolve_head_predicate};
use crate::resolve_types::resolve_type_shape;
use rill_ast::common::NName;
use rill_ast::named::{
    NamedAttribute, NamedConstraint, NamedDef, NamedEnum, NamedIndex, NamedLattice, NamedProgram,
    NamedProperty, NamedTable,
};
use rill_ast::resolved::{
    ResolvedAttribute, ResolvedBodyPredicate, ResolvedCase, ResolvedConstraint, ResolvedDef,
    ResolvedEnum, ResolvedFormalParam, ResolvedIndex, ResolvedLattice, ResolvedProperty,
    ResolvedTable,
};

/// Resolves a value definition: type parameters, formal parameters, the
/// body, and the declared type, all independently.
pub fn resolve_def(
    program: &NamedProgram,
    def: &NamedDef,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedDef> {
    let tparams = def.tparams.iter().map(resolve_type_param).collect();
    let fparams: Vec<Option<ResolvedFormalParam>> = def
        .fparams
        .iter()
        .map(|fparam| resolve_formal_param(program, fparam, ns, errors))
        .collect();
    let exp = resolve_expr(program, &def.exp, ns, errors);
    let tpe = record(lookup_type(program, &def.tpe, ns), errors);
    let fparams: Option<Vec<ResolvedFormalParam>> = fparams.into_iter().collect();
    Some(ResolvedDef {
        sym: def.sym.clone(),
        ident: def.ident.clone(),
        tparams,
        fparams: fparams?,
        exp: exp?,
        tpe: tpe?,
        span: def.span,
    })
}

/// Resolves an enum declaration. Case types keep their written form, so
/// this never fails.
pub fn resolve_enum(decl: &NamedEnum) -> ResolvedEnum {
    let cases = decl
        .cases
        .iter()
        .map(|(tag, case)| {
            let resolved = ResolvedCase {
                enum_ident: case.enum_ident.clone(),
                tag: case.tag.clone(),
                tpe: resolve_type_shape(&case.tpe),
            };
            (tag.clone(), resolved)
        })
        .collect();
    ResolvedEnum {
        sym: decl.sym.clone(),
        ident: decl.ident.clone(),
        tparams: decl.tparams.iter().map(resolve_type_param).collect(),
        cases,
        tpe: resolve_type_shape(&decl.tpe),
        span: decl.span,
    }
}

/// Resolves an index declaration to the symbol of the indexed table.
pub fn resolve_index(
    program: &NamedProgram,
    index: &NamedIndex,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedIndex> {
    let table = record(lookup_table(program, &index.table, ns), errors)?;
    Some(ResolvedIndex {
        table: table.sym().clone(),
        groups: index.groups.clone(),
        span: index.span,
    })
}

/// Resolves a bounded lattice declaration: the carrier type, then the
/// five operators in declaration order.
pub fn resolve_lattice(
    program: &NamedProgram,
    lattice: &NamedLattice,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedLattice> {
    let ns = &lattice.ns;
    let tpe = record(lookup_type(program, &lattice.tpe, ns), errors);
    let bot = resolve_expr(program, &lattice.bot, ns, errors);
    let top = resolve_expr(program, &lattice.top, ns, errors);
    let leq = resolve_expr(program, &lattice.leq, ns, errors);
    let lub = resolve_expr(program, &lattice.lub, ns, errors);
    let glb = resolve_expr(program, &lattice.glb, ns, errors);
    Some(ResolvedLattice {
        tpe: tpe?,
        bot: bot?,
        top: top?,
        leq: leq?,
        lub: lub?,
        glb: glb?,
        ns: lattice.ns.clone(),
        span: lattice.span,
    })
}

/// Resolves a table declaration: every attribute type for a relation,
/// every key attribute and the value attribute for a lattice-valued
/// table.
pub fn resolve_table(
    program: &NamedProgram,
    table: &NamedTable,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedTable> {
    match table {
        NamedTable::Relation { sym, ident, attributes, span } => {
            let attributes: Vec<Option<ResolvedAttribute>> = attributes
                .iter()
                .map(|attr| resolve_attribute(program, attr, ns, errors))
                .collect();
            let attributes: Option<Vec<ResolvedAttribute>> = attributes.into_iter().collect();
            Some(ResolvedTable::Relation {
                sym: sym.clone(),
                ident: ident.clone(),
                attributes: attributes?,
                span: *span,
            })
        }
        NamedTable::Lattice { sym, ident, keys, value, span } => {
            let keys: Vec<Option<ResolvedAttribute>> = keys
                .iter()
                .map(|key| resolve_attribute(program, key, ns, errors))
                .collect();
            let value = resolve_attribute(program, value, ns, errors);
            let keys: Option<Vec<ResolvedAttribute>> = keys.into_iter().collect();
            Some(ResolvedTable::Lattice {
                sym: sym.clone(),
                ident: ident.clone(),
                keys: keys?,
                value: value?,
                span: *span,
            })
        }
    }
}

fn resolve_attribute(
    program: &NamedProgram,
    attr: &NamedAttribute,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedAttribute> {
    let tpe = record(lookup_type(program, &attr.tpe, ns), errors)?;
    Some(ResolvedAttribute {
        ident: attr.ident.clone(),
        tpe,
        span: attr.span,
    })
}

/// Resolves a constraint: the head atom and every body atom, all
/// independently.
pub fn resolve_constraint(
    program: &NamedProgram,
    constraint: &NamedConstraint,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedConstraint> {
    let cparams = constraint.cparams.iter().map(resolve_constraint_param).collect();
    let head = resolve_head_predicate(program, &constraint.head, ns, errors);
    let body: Vec<Option<ResolvedBodyPredicate>> = constraint
        .body
        .iter()
        .map(|atom| resolve_body_predicate(program, atom, ns, errors))
        .collect();
    let body: Option<Vec<ResolvedBodyPredicate>> = body.into_iter().collect();
    Some(ResolvedConstraint {
        cparams,
        head: head?,
        body: body?,
        span: constraint.span,
    })
}

/// Resolves a property: the law reference and the checked expression.
/// A law provided by a hook contributes the hook's own symbol.
pub fn resolve_property(
    program: &NamedProgram,
    property: &NamedProperty,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedProperty> {
    let law = record(lookup_ref(program, &property.law, ns), errors);
    let exp = resolve_expr(program, &property.exp, ns, errors);
    let law = match law? {
        RefTarget::Defn(_, defn) => defn.sym.clone(),
        RefTarget::Hook(hook) => hook.sym.clone(),
    };
    Some(ResolvedProperty {
        law,
        exp: exp?,
        span: property.span,
    })
}
