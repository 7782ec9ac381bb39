use crate::common::Ident;
use crate::symbol::{EnumSym, VarSym};
use crate::types::TypeVar;
use miette::SourceSpan;

/// A pattern with every tag bound to its enum symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedPattern {
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
    Tag {
        sym: EnumSym,
        tag: Ident,
        pat: Box<ResolvedPattern>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Tuple { elms: Vec<ResolvedPattern>, tvar: TypeVar, span: SourceSpan },
}
