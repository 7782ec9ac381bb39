//! Pattern resolution.

use crate::error::{record, ResolutionError};
use crate::lookup::lookup_tag;
use rill_ast::common::NName;
use rill_ast::named::{NamedPattern, NamedProgram};
use rill_ast::resolved::ResolvedPattern;

/// Walks a named pattern, binding every tag to its enum symbol.
///
/// Literals, wildcards, and variables pass through. Failures in
/// sub-patterns and tag lookups accumulate in `errors`; the walk keeps
/// visiting siblings after a failure and returns `None` only for the
/// failing chain.
pub fn resolve_pattern(
    program: &NamedProgram,
    pat: &NamedPattern,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedPattern> {
    match pat {
        NamedPattern::Wild { tvar, span } => Some(ResolvedPattern::Wild { tvar: *tvar, span: *span }),
        NamedPattern::Var { sym, tvar, span } => Some(ResolvedPattern::Var {
            sym: sym.clone(),
            tvar: *tvar,
            span: *span,
        }),
        NamedPattern::Unit { span } => Some(ResolvedPattern::Unit { span: *span }),
        NamedPattern::True { span } => Some(ResolvedPattern::True { span: *span }),
        NamedPattern::False { span } => Some(ResolvedPattern::False { span: *span }),
        NamedPattern::Char { lit, span } => Some(ResolvedPattern::Char { lit: *lit, span: *span }),
        NamedPattern::Float32 { lit, span } => {
            Some(ResolvedPattern::Float32 { lit: *lit, span: *span })
        }
        NamedPattern::Float64 { lit, span } => {
            Some(ResolvedPattern::Float64 { lit: *lit, span: *span })
        }
        NamedPattern::Int8 { lit, span } => Some(ResolvedPattern::Int8 { lit: *lit, span: *span }),
        NamedPattern::Int16 { lit, span } => Some(ResolvedPattern::Int16 { lit: *lit, span: *span }),
        NamedPattern::Int32 { lit, span } => Some(ResolvedPattern::Int32 { lit: *lit, span: *span }),
        NamedPattern::Int64 { lit, span } => Some(ResolvedPattern::Int64 { lit: *lit, span: *span }),
        NamedPattern::BigInt { lit, span } => Some(ResolvedPattern::BigInt {
            lit: lit.clone(),
            span: *span,
        }),
        NamedPattern::Str { lit, span } => Some(ResolvedPattern::Str {
            lit: lit.clone(),
            span: *span,
        }),
        NamedPattern::Tag { enum_name, tag, pat, tvar, span } => {
            let inner = resolve_pattern(program, pat, ns, errors);
            let decl = record(lookup_tag(program, enum_name.as_ref(), tag, ns), errors);
            Some(ResolvedPattern::Tag {
                sym: decl?.sym.clone(),
                tag: tag.clone(),
                pat: Box::new(inner?),
                tvar: *tvar,
                span: *span,
            })
        }
        NamedPattern::Tuple { elms, tvar, span } => {
            let elms: Vec<Option<ResolvedPattern>> = elms
                .iter()
                .map(|elm| resolve_pattern(program, elm, ns, errors))
                .collect();
            let elms: Option<Vec<ResolvedPattern>> = elms.into_iter().collect();
            Some(ResolvedPattern::Tuple {
                elms: elms?,
                tvar: *tvar,
                span: *span,
            })
        }
    }
}
