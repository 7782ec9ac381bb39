use crate::common::QName;
use crate::symbol::EnumSym;
use crate::types::TypeVar;
use miette::SourceSpan;

/// A type as written in the source, before resolution.
///
/// `Ref` nodes carry the textual name; the resolver maps them to
/// primitives or enum symbols. `Enum` nodes appear where the naming phase
/// already knows the target — the declared shape of an enum's own type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamedType {
    Var(TypeVar, SourceSpan),
    Unit(SourceSpan),
    Ref(QName),
    Enum(EnumSym),
    Tuple(Vec<NamedType>, SourceSpan),
    Arrow(Vec<NamedType>, Box<NamedType>, SourceSpan),
    Apply(Box<NamedType>, Vec<NamedType>, SourceSpan),
}

impl NamedType {
    /// The source location of the type.
    pub fn span(&self) -> SourceSpan {
        match self {
            NamedType::Var(_, span) => *span,
            NamedType::Unit(span) => *span,
            NamedType::Ref(qname) => qname.span,
            NamedType::Enum(sym) => sym.span,
            NamedType::Tuple(_, span) => *span,
            NamedType::Arrow(_, _, span) => *span,
            NamedType::Apply(_, _, span) => *span,
        }
    }
}
