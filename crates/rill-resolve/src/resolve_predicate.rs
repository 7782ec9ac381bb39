//! Constraint atom resolution.
//!
//! Head atoms bind their table and resolve terms as expressions; body
//! atoms bind their table and resolve terms as patterns. A filter calls a
//! user-defined predicate; a reference that resolves to a host hook has
//! no relational interpretation and is rejected.

use crate::error::{record, ResolutionError};
use crate::lookup::{lookup_ref, lookup_table, RefTarget};
use crate::resolve_expr::{resolve_all, resolve_expr};
use crate::resolve_pattern::resolve_pattern;
use rill_ast::common::NName;
use rill_ast::named::{NamedBodyPredicate, NamedHeadPredicate, NamedPattern, NamedProgram};
use rill_ast::resolved::{ResolvedBodyPredicate, ResolvedHeadPredicate, ResolvedPattern};

pub fn resolve_head_predicate(
    program: &NamedProgram,
    head: &NamedHeadPredicate,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedHeadPredicate> {
    match head {
        NamedHeadPredicate::True(span) => Some(ResolvedHeadPredicate::True(*span)),
        NamedHeadPredicate::False(span) => Some(ResolvedHeadPredicate::False(*span)),
        NamedHeadPredicate::Positive { table, terms, span } => {
            let decl = record(lookup_table(program, table, ns), errors);
            let terms = resolve_all(program, terms, ns, errors);
            Some(ResolvedHeadPredicate::Positive {
                table: decl?.sym().clone(),
                terms: terms?,
                span: *span,
            })
        }
        NamedHeadPredicate::Negative { table, terms, span } => {
            let decl = record(lookup_table(program, table, ns), errors);
            let terms = resolve_all(program, terms, ns, errors);
            Some(ResolvedHeadPredicate::Negative {
                table: decl?.sym().clone(),
                terms: terms?,
                span: *span,
            })
        }
    }
}

pub fn resolve_body_predicate(
    program: &NamedProgram,
    body: &NamedBodyPredicate,
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<ResolvedBodyPredicate> {
    match body {
        NamedBodyPredicate::Positive { table, terms, span } => {
            let decl = record(lookup_table(program, table, ns), errors);
            let terms = resolve_term_patterns(program, terms, ns, errors);
            Some(ResolvedBodyPredicate::Positive {
                table: decl?.sym().clone(),
                terms: terms?,
                span: *span,
            })
        }
        NamedBodyPredicate::Negative { table, terms, span } => {
            let decl = record(lookup_table(program, table, ns), errors);
            let terms = resolve_term_patterns(program, terms, ns, errors);
            Some(ResolvedBodyPredicate::Negative {
                table: decl?.sym().clone(),
                terms: terms?,
                span: *span,
            })
        }
        NamedBodyPredicate::Filter { name, terms, span } => {
            let target = record(lookup_ref(program, name, ns), errors);
            let terms = resolve_all(program, terms, ns, errors);
            match target? {
                RefTarget::Defn(_, defn) => Some(ResolvedBodyPredicate::Filter {
                    sym: defn.sym.clone(),
                    terms: terms?,
                    span: *span,
                }),
                RefTarget::Hook(_) => {
                    errors.push(ResolutionError::HookInPredicate {
                        name: name.to_string(),
                        span: name.span,
                    });
                    None
                }
            }
        }
        NamedBodyPredicate::Loop { pat, term, span } => {
            let pat = resolve_pattern(program, pat, ns, errors);
            let term = resolve_expr(program, term, ns, errors);
            Some(ResolvedBodyPredicate::Loop {
                pat: pat?,
                term: term?,
                span: *span,
            })
        }
    }
}

fn resolve_term_patterns(
    program: &NamedProgram,
    terms: &[NamedPattern],
    ns: &NName,
    errors: &mut Vec<ResolutionError>,
) -> Option<Vec<ResolvedPattern>> {
    let resolved: Vec<Option<ResolvedPattern>> = terms
        .iter()
        .map(|term| resolve_pattern(program, term, ns, errors))
        .collect();
    resolved.into_iter().collect()
}
