//! Expression resolution.

use crate::error::{record, ResolutionError};
use crate::lookup::{lookup_ref, lookup_tag, lookup_type, RefTarget};
use crate::resolve_params::resolve_formal_param;
use crate::resolve_pattern::resolve_pattern;
use rill_ast::common::NName;
use rill_ast::named::{NamedExpr, NamedProgram};
use rill_ast::resolved::{ResolvedExpr, ResolvedFormalParam, ResolvedMatchRule};

/// Walks a named expression, binding every reference, tag, and ascribed
/// type, from the namespace `ns`.
///
/// A reference that resolves to a user definition becomes `Ref`; one that
/// resolves to a host hook becomes the distinct `Hook` node. Source
/// locations and pre-assigned type variables are preserved. Independent
/// children are resolved before any failure propagates, so every defect
/// in the expression surfaces in one run.
pub fn resolve_expr(
    program: &NamedProgram,
    exp: &NamedExpr,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedExpr> {
    match exp {
        NamedExpr::Wild { tvar, span } => Some(ResolvedExpr::Wild { tvar: *tvar, span: *span }),
        NamedExpr::Var { sym, span } => Some(ResolvedExpr::Var {
            sym: sym.clone(),
            span: *span,
        }),
        NamedExpr::Ref { name, tvar, span } => {
            match record(lookup_ref(program, name, ns), errors)? {
                RefTarget::Defn(_, defn) => Some(ResolvedExpr::Ref {
                    sym: defn.sym.clone(),
                    tvar: *tvar,
                    span: *span,
                }),
                RefTarget::Hook(hook) => Some(ResolvedExpr::Hook {
                    hook: hook.clone(),
                    tvar: *tvar,
                    span: *span,
                }),
            }
        }
        NamedExpr::Unit { span } => Some(ResolvedExpr::Unit { span: *span }),
        NamedExpr::True { span } => Some(ResolvedExpr::True { span: *span }),
        NamedExpr::False { span } => Some(ResolvedExpr::False { span: *span }),
        NamedExpr::Char { lit, span } => Some(ResolvedExpr::Char { lit: *lit, span: *span }),
        NamedExpr::Float32 { lit, span } => Some(ResolvedExpr::Float32 { lit: *lit, span: *span }),
        NamedExpr::Float64 { lit, span } => Some(ResolvedExpr::Float64 { lit: *lit, span: *span }),
        NamedExpr::Int8 { lit, span } => Some(ResolvedExpr::Int8 { lit: *lit, span: *span }),
        NamedExpr::Int16 { lit, span } => Some(ResolvedExpr::Int16 { lit: *lit, span: *span }),
        NamedExpr::Int32 { lit, span } => Some(ResolvedExpr::Int32 { lit: *lit, span: *span }),
        NamedExpr::Int64 { lit, span } => Some(ResolvedExpr::Int64 { lit: *lit, span: *span }),
        NamedExpr::BigInt { lit, span } => Some(ResolvedExpr::BigInt {
            lit: lit.clone(),
            span: *span,
        }),
        NamedExpr::Str { lit, span } => Some(ResolvedExpr::Str {
            lit: lit.clone(),
            span: *span,
        }),
        NamedExpr::Apply { exp, args, tvar, span } => {
            let lambda = resolve_expr(program, exp, ns, errors);
            let args = resolve_all(program, args, ns, errors);
            Some(ResolvedExpr::Apply {
                exp: Box::new(lambda?),
                args: args?,
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::Lambda { fparams, exp, tvar, span } => {
            let fparams: Vec<Option<ResolvedFormalParam>> = fparams
                .iter()
                .map(|fparam| resolve_formal_param(program, fparam, ns, errors))
                .collect();
            let body = resolve_expr(program, exp, ns, errors);
            let fparams: Option<Vec<ResolvedFormalParam>> = fparams.into_iter().collect();
            Some(ResolvedExpr::Lambda {
                fparams: fparams?,
                exp: Box::new(body?),
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::Unary { op, exp, tvar, span } => {
            let exp = resolve_expr(program, exp, ns, errors)?;
            Some(ResolvedExpr::Unary {
                op: *op,
                exp: Box::new(exp),
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::Binary { op, exp1, exp2, tvar, span } => {
            let exp1 = resolve_expr(program, exp1, ns, errors);
            let exp2 = resolve_expr(program, exp2, ns, errors);
            Some(ResolvedExpr::Binary {
                op: *op,
                exp1: Box::new(exp1?),
                exp2: Box::new(exp2?),
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::IfThenElse { exp1, exp2, exp3, tvar, span } => {
            let exp1 = resolve_expr(program, exp1, ns, errors);
            let exp2 = resolve_expr(program, exp2, ns, errors);
            let exp3 = resolve_expr(program, exp3, ns, errors);
            Some(ResolvedExpr::IfThenElse {
                exp1: Box::new(exp1?),
                exp2: Box::new(exp2?),
                exp3: Box::new(exp3?),
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::Let { sym, exp1, exp2, tvar, span } => {
            let exp1 = resolve_expr(program, exp1, ns, errors);
            let exp2 = resolve_expr(program, exp2, ns, errors);
            Some(ResolvedExpr::Let {
                sym: sym.clone(),
                exp1: Box::new(exp1?),
                exp2: Box::new(exp2?),
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::Match { exp, rules, tvar, span } => {
            let scrutinee = resolve_expr(program, exp, ns, errors);
            let rules: Vec<Option<ResolvedMatchRule>> = rules
                .iter()
                .map(|rule| {
                    let pat = resolve_pattern(program, &rule.pat, ns, errors);
                    let guard = resolve_expr(program, &rule.guard, ns, errors);
                    let body = resolve_expr(program, &rule.exp, ns, errors);
                    Some(ResolvedMatchRule { pat: pat?, guard: guard?, exp: body? })
                })
                .collect();
            let rules: Option<Vec<ResolvedMatchRule>> = rules.into_iter().collect();
            Some(ResolvedExpr::Match {
                exp: Box::new(scrutinee?),
                rules: rules?,
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::Switch { rules, tvar, span } => {
            let rules: Vec<Option<(ResolvedExpr, ResolvedExpr)>> = rules
                .iter()
                .map(|(cond, body)| {
                    let cond = resolve_expr(program, cond, ns, errors);
                    let body = resolve_expr(program, body, ns, errors);
                    Some((cond?, body?))
                })
                .collect();
            let rules: Option<Vec<(ResolvedExpr, ResolvedExpr)>> = rules.into_iter().collect();
            Some(ResolvedExpr::Switch {
                rules: rules?,
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::Tag { enum_name, tag, exp, tvar, span } => {
            let inner = resolve_expr(program, exp, ns, errors);
            let decl = record(lookup_tag(program, enum_name.as_ref(), tag, ns), errors);
            Some(ResolvedExpr::Tag {
                sym: decl?.sym.clone(),
                tag: tag.clone(),
                exp: Box::new(inner?),
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::Tuple { elms, tvar, span } => {
            let elms = resolve_all(program, elms, ns, errors);
            Some(ResolvedExpr::Tuple {
                elms: elms?,
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::Ascribe { exp, tpe, span } => {
            let inner = resolve_expr(program, exp, ns, errors);
            let tpe = record(lookup_type(program, tpe, ns), errors);
            Some(ResolvedExpr::Ascribe {
                exp: Box::new(inner?),
                tpe: tpe?,
                span: *span,
            })
        }
        NamedExpr::Existential { fparam, exp, span } => {
            let fparam = resolve_formal_param(program, fparam, ns, errors);
            let body = resolve_expr(program, exp, ns, errors);
            Some(ResolvedExpr::Existential {
                fparam: fparam?,
                exp: Box::new(body?),
                span: *span,
            })
        }
        NamedExpr::Universal { fparam, exp, span } => {
            let fparam = resolve_formal_param(program, fparam, ns, errors);
            let body = resolve_expr(program, exp, ns, errors);
            Some(ResolvedExpr::Universal {
                fparam: fparam?,
                exp: Box::new(body?),
                span: *span,
            })
        }
        NamedExpr::NativeConstructor { native, args, tvar, span } => {
            let args = resolve_all(program, args, ns, errors);
            Some(ResolvedExpr::NativeConstructor {
                native: native.clone(),
                args: args?,
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::NativeField { native, tvar, span } => Some(ResolvedExpr::NativeField {
            native: native.clone(),
            tvar: *tvar,
            span: *span,
        }),
        NamedExpr::NativeMethod { native, args, tvar, span } => {
            let args = resolve_all(program, args, ns, errors);
            Some(ResolvedExpr::NativeMethod {
                native: native.clone(),
                args: args?,
                tvar: *tvar,
                span: *span,
            })
        }
        NamedExpr::UserError { tvar, span } => {
            Some(ResolvedExpr::UserError { tvar: *tvar, span: *span })
        }
    }
}

/// Resolves every expression in the slice before combining, so one
/// failure does not hide errors in its siblings.
pub(crate) fn resolve_all(
    program: &NamedProgram,
    exps: &[NamedExpr],
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<Vec<ResolvedExpr>> {
    let resolved: Vec<Option<ResolvedExpr>> = exps
        .iter()
        .map(|exp| resolve_expr(program, exp, ns, errors))
        .collect();
    resolved.into_iter().collect()
}
