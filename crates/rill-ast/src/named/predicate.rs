use super::expr::NamedExpr;
use super::pattern::NamedPattern;
use crate::common::QName;
use miette::SourceSpan;

/// The head atom of a constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum NamedHeadPredicate {
    /// The always-true head; the constraint is trivially satisfied.
    True(SourceSpan),
    /// The always-false head; the body derives a contradiction.
    False(SourceSpan),
    Positive {
        table: QName,
        terms: Vec<NamedExpr>,
        span: SourceSpan,
    },
    Negative {
        table: QName,
        terms: Vec<NamedExpr>,
        span: SourceSpan,
    },
}

/// A body atom of a constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum NamedBodyPredicate {
    Positive {
        table: QName,
        terms: Vec<NamedPattern>,
        span: SourceSpan,
    },
    Negative {
        table: QName,
        terms: Vec<NamedPattern>,
        span: SourceSpan,
    },
    /// A call to a boolean predicate that filters derived facts.
    Filter {
        name: QName,
        terms: Vec<NamedExpr>,
        span: SourceSpan,
    },
    /// Binds a pattern against each element produced by the term.
    Loop {
        pat: NamedPattern,
        term: NamedExpr,
        span: SourceSpan,
    },
}
