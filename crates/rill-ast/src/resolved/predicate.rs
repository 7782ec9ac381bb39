use super::expr::ResolvedExpr;
use super::pattern::ResolvedPattern;
use crate::symbol::{DefnSym, TableSym};
use miette::SourceSpan;

/// The head atom of a resolved constraint. Tables are bound to their
/// declaration symbols.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedHeadPredicate {
    True(SourceSpan),
    False(SourceSpan),
    Positive {
        table: TableSym,
        terms: Vec<ResolvedExpr>,
        span: SourceSpan,
    },
    Negative {
        table: TableSym,
        terms: Vec<ResolvedExpr>,
        span: SourceSpan,
    },
}

/// A body atom of a resolved constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedBodyPredicate {
    Positive {
        table: TableSym,
        terms: Vec<ResolvedPattern>,
        span: SourceSpan,
    },
    Negative {
        table: TableSym,
        terms: Vec<ResolvedPattern>,
        span: SourceSpan,
    },
    /// A filter bound to the user-defined predicate it calls.
    Filter {
        sym: DefnSym,
        terms: Vec<ResolvedExpr>,
        span: SourceSpan,
    },
    Loop {
        pat: ResolvedPattern,
        term: ResolvedExpr,
        span: SourceSpan,
    },
}
