use crate::common::{Ident, QName};
use crate::symbol::VarSym;
use crate::types::TypeVar;
use miette::SourceSpan;

/// A pattern as produced by the naming phase.
///
/// Variables are already bound to [`VarSym`]s; only tag patterns carry
/// unresolved names.
#[derive(Debug, Clone, PartialEq)]
pub enum NamedPattern {
    Wild { tvar: TypeVar, span: SourceSpan },
    Var { sym: VarSym, tvar: TypeVar, span: SourceSpan },
    Unit { span: SourceSpan },
    True { span: SourceSpan },
    False { span: SourceSpan },
    Char { lit: char, span: SourceSpan },
    Float32 { lit: f32, span: SourceSpan },
    Float64 { lit: f64, span: SourceSpan },
    Int8 { lit: i8, span: SourceSpan },
    Int16 { lit: i16, span: SourceSpan },
    Int32 { lit: i32, span: SourceSpan },
    Int64 { lit: i64, span: SourceSpan },
    BigInt { lit: String, span: SourceSpan },
    Str { lit: String, span: SourceSpan },
    /// A tag pattern, optionally qualified by the enum it belongs to.
    Tag {
        enum_name: Option<QName>,
        tag: Ident,
        pat: Box<NamedPattern>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Tuple { elms: Vec<NamedPattern>, tvar: TypeVar, span: SourceSpan },
}

impl NamedPattern {
    pub fn span(&self) -> SourceSpan {
        match self {
            NamedPattern::Wild { span, .. } => *span,
            NamedPattern::Var { span, .. } => *span,
            NamedPattern::Unit { span } => *span,
            NamedPattern::True { span } => *span,
            NamedPattern::False { span } => *span,
            NamedPattern::Char { span, .. } => *span,
            NamedPattern::Float32 { span, .. } => *span,
            NamedPattern::Float64 { span, .. } => *span,
            NamedPattern::Int8 { span, .. } => *span,
            NamedPattern::Int16 { span, .. } => *span,
            NamedPattern::Int32 { span, .. } => *span,
            NamedPattern::Int64 { span, .. } => *span,
            NamedPattern::BigInt { span, .. } => *span,
            NamedPattern::Str { span, .. } => *span,
            NamedPattern::Tag { span, .. } => *span,
            NamedPattern::Tuple { span, .. } => *span,
        }
    }
}
