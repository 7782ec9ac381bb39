//! Parameter resolution.
//!
//! Formal parameters get their declared type canonicalised; type and
//! constraint parameters pass through structurally, since their types are
//! settled by later inference phases.

use crate::error::{record, ResolutionError};
use crate::lookup::lookup_type;
use rill_ast::common::NName;
use rill_ast::named::{NamedConstraintParam, NamedFormalParam, NamedProgram, NamedTypeParam};
use rill_ast::resolved::{ResolvedConstraintParam, ResolvedFormalParam, ResolvedTypeParam};

pub fn resolve_formal_param(
    program: &NamedProgram,
    param: &NamedFormalParam,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedFormalParam> {
    let tpe = record(lookup_type(program, &param.tpe, ns), errors)?;
    Some(ResolvedFormalParam {
        sym: param.sym.clone(),
        ident: param.ident.clone(),
        tpe,
        span: param.span,
    })
}

pub fn resolve_type_param(param: &NamedTypeParam) -> ResolvedTypeParam {
    ResolvedTypeParam {
        ident: param.ident.clone(),
        tvar: param.tvar,
        span: param.span,
    }
}

pub fn resolve_constraint_param(param: &NamedConstraintParam) -> ResolvedConstraintParam {
    match param {
        NamedConstraintParam::Head { sym, tvar, span } => ResolvedConstraintParam::Head {
            sym: sym.clone(),
            tvar: *tvar,
            span: *span,
        },
        NamedConstraintParam::Rule { sym, tvar, span } => ResolvedConstraintParam::Rule {
            sym: sym.clone(),
            tvar: *tvar,
            span: *span,
        },
    }
}
