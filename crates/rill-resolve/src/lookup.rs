//! Lookup primitives: pure queries over the Named program.
//!
//! Four resolution queries, each returning the target or a structured
//! error. The fallback rules are deliberately asymmetric and must stay
//! that way:
//!
//! - unqualified *definition* references fall back to the root namespace;
//!   qualified ones never do;
//! - unqualified *enum type* references fall back to the root namespace;
//!   qualified ones never do;
//! - *table* references never fall back, qualified or not;
//! - hooks shadow-compete with definitions only in the directly consulted
//!   namespace, never through the root fallback.

use crate::error::ResolutionError;
use rill_ast::common::{Ident, NName, QName};
use rill_ast::named::{NamedDef, NamedEnum, NamedProgram, NamedTable, NamedType};
use rill_ast::symbol::DefnSym;
use rill_ast::types::{Kind, Type};
use rill_ast::Hook;

/// The target of a successful reference lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum RefTarget<'a> {
    /// A user definition, together with the namespace it was found in.
    Defn(NName, &'a NamedDef),
    /// A host-provided hook.
    Hook(&'a Hook),
}

/// Resolves a value reference from the namespace `ns`.
///
/// An unqualified name consults `ns` for a definition and the hook table
/// for the key `(ns, name)`; if neither matches, the root namespace
/// definitions are consulted. A qualified name consults only the stated
/// namespace and never falls back. Finding both a definition and a hook
/// is ambiguous.
pub fn lookup_ref<'a>(
    program: &'a NamedProgram,
    name: &QName,
    ns: &NName,
) -> Result<RefTarget<'a>, ResolutionError> {
    let target_ns = if name.is_qualified() { &name.namespace } else { ns };

    let defn = program
        .definitions
        .get(target_ns)
        .and_then(|defs| defs.get(&name.ident.name));
    let key = DefnSym::new(target_ns.part_names(), name.ident.name.clone(), name.span);
    let hook = program.hooks.get(&key);

    match (defn, hook) {
        (Some(defn), None) => Ok(RefTarget::Defn(target_ns.clone(), defn)),
        (None, Some(hook)) => Ok(RefTarget::Hook(hook)),
        (Some(_), Some(_)) => Err(ResolutionError::AmbiguousRef {
            name: name.to_string(),
            namespace: ns.to_string(),
            span: name.span,
        }),
        (None, None) if !name.is_qualified() => {
            let root = NName::root();
            match program
                .definitions
                .get(&root)
                .and_then(|defs| defs.get(&name.ident.name))
            {
                Some(defn) => Ok(RefTarget::Defn(root, defn)),
                None => Err(ResolutionError::UndefinedRef {
                    name: name.to_string(),
                    namespace: ns.to_string(),
                    span: name.span,
                }),
            }
        }
        (None, None) => Err(ResolutionError::UndefinedRef {
            name: name.to_string(),
            namespace: ns.to_string(),
            span: name.span,
        }),
    }
}

/// Resolves a table reference from the namespace `ns`.
///
/// Unqualified names consult `ns` only; qualified names consult the
/// stated namespace only. There is no root fallback and no hook
/// involvement.
pub fn lookup_table<'a>(
    program: &'a NamedProgram,
    name: &QName,
    ns: &NName,
) -> Result<&'a NamedTable, ResolutionError> {
    let target_ns = if name.is_qualified() { &name.namespace } else { ns };
    program
        .tables
        .get(target_ns)
        .and_then(|tables| tables.get(&name.ident.name))
        .ok_or_else(|| ResolutionError::UndefinedTable {
            name: name.to_string(),
            namespace: target_ns.to_string(),
            span: name.span,
        })
}

/// Resolves a tag to the unique enum declaration that owns a case named
/// `tag`, searching from the namespace `ns`.
///
/// A tag that is unique program-wide resolves with no qualifier, even
/// from an unrelated namespace. Otherwise the search narrows to the
/// qualifier's namespace (or `ns` when there is no qualifier), and a
/// remaining tie is broken by the qualifier's enum name.
pub fn lookup_tag<'a>(
    program: &'a NamedProgram,
    enum_name: Option<&QName>,
    tag: &Ident,
    ns: &NName,
) -> Result<&'a NamedEnum, ResolutionError> {
    let owns_tag = |decl: &NamedEnum| decl.cases.contains_key(&tag.name);

    let global: Vec<&NamedEnum> = program
        .enums
        .values()
        .flat_map(|decls| decls.values())
        .filter(|decl| owns_tag(decl))
        .collect();
    if let [decl] = global.as_slice() {
        return Ok(*decl);
    }

    let scope_ns = match enum_name {
        Some(qname) if qname.is_qualified() => &qname.namespace,
        _ => ns,
    };
    let local: Vec<&NamedEnum> = program
        .enums
        .get(scope_ns)
        .map(|decls| decls.values().filter(|decl| owns_tag(decl)).collect())
        .unwrap_or_default();

    match (local.as_slice(), enum_name) {
        ([decl], _) => Ok(*decl),
        ([], _) => Err(ResolutionError::UndefinedTag {
            tag: tag.name.clone(),
            namespace: ns.to_string(),
            span: tag.span,
        }),
        (_, None) => {
            let mut candidates: Vec<_> = local
                .iter()
                .map(|decl| decl.cases[&tag.name].tag.span)
                .collect();
            candidates.sort_by_key(|span| span.offset());
            Err(ResolutionError::AmbiguousTag {
                tag: tag.name.clone(),
                namespace: ns.to_string(),
                candidates,
                span: tag.span,
            })
        }
        (_, Some(qname)) => {
            let matching: Vec<&NamedEnum> = local
                .iter()
                .copied()
                .filter(|decl| decl.ident.name == qname.ident.name)
                .collect();
            match matching.as_slice() {
                [decl] => Ok(*decl),
                _ => Err(ResolutionError::UndefinedTag {
                    tag: tag.name.clone(),
                    namespace: ns.to_string(),
                    span: tag.span,
                }),
            }
        }
    }
}

/// Recursively resolves a named type to a canonical [`Type`], from the
/// namespace `ns`.
///
/// An unqualified reference is first matched against the closed primitive
/// name set, then against the enums of `ns`, then against the enums of
/// the root namespace. A qualified reference consults the stated
/// namespace's enums only. Every produced enum type carries the default
/// kind; kind inference is a later phase.
pub fn lookup_type(
    program: &NamedProgram,
    tpe: &NamedType,
    ns: &NName,
) -> Result<Type, ResolutionError> {
    match tpe {
        NamedType::Var(tvar, _) => Ok(Type::Var(*tvar)),
        NamedType::Unit(_) => Ok(Type::Unit),
        NamedType::Ref(qname) if !qname.is_qualified() => {
            if let Some(prim) = primitive_type(&qname.ident.name) {
                return Ok(prim);
            }
            let decl = program
                .enums
                .get(ns)
                .and_then(|decls| decls.get(&qname.ident.name))
                .or_else(|| {
                    program
                        .enums
                        .get(&NName::root())
                        .and_then(|decls| decls.get(&qname.ident.name))
                });
            match decl {
                Some(decl) => Ok(Type::Enum { sym: decl.sym.clone(), kind: Kind::Star }),
                None => Err(ResolutionError::UndefinedType {
                    name: qname.to_string(),
                    namespace: ns.to_string(),
                    span: qname.span,
                }),
            }
        }
        NamedType::Ref(qname) => {
            match program
                .enums
                .get(&qname.namespace)
                .and_then(|decls| decls.get(&qname.ident.name))
            {
                Some(decl) => Ok(Type::Enum { sym: decl.sym.clone(), kind: Kind::Star }),
                None => Err(ResolutionError::UndefinedType {
                    name: qname.to_string(),
                    namespace: ns.to_string(),
                    span: qname.span,
                }),
            }
        }
        NamedType::Enum(sym) => Ok(Type::Enum { sym: sym.clone(), kind: Kind::Star }),
        NamedType::Tuple(elms, _) => {
            let elms = elms
                .iter()
                .map(|elm| lookup_type(program, elm, ns))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Type::Tuple(elms))
        }
        NamedType::Arrow(params, ret, _) => {
            let params = params
                .iter()
                .map(|param| lookup_type(program, param, ns))
                .collect::<Result<Vec<_>, _>>()?;
            let ret = lookup_type(program, ret, ns)?;
            Ok(Type::Arrow { params, ret: Box::new(ret) })
        }
        NamedType::Apply(base, args, _) => {
            let base = lookup_type(program, base, ns)?;
            let args = args
                .iter()
                .map(|arg| lookup_type(program, arg, ns))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Type::Apply { base: Box::new(base), args })
        }
    }
}

/// The closed set of primitive type names. `Float` and `Int` are the
/// unsized aliases of `Float64` and `Int32`.
pub fn primitive_type(name: &str) -> Option<Type> {
    match name {
        "Unit" => Some(Type::Unit),
        "Bool" => Some(Type::Bool),
        "Char" => Some(Type::Char),
        "Float" => Some(Type::Float64),
        "Float32" => Some(Type::Float32),
        "Float64" => Some(Type::Float64),
        "Int" => Some(Type::Int32),
        "Int8" => Some(Type::Int8),
        "Int16" => Some(Type::Int16),
        "Int32" => Some(Type::Int32),
        "Int64" => Some(Type::Int64),
        "BigInt" => Some(Type::BigInt),
        "Str" => Some(Type::Str),
        "Native" => Some(Type::Native),
        _ => None,
    }
}
