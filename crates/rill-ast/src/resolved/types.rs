use crate::symbol::EnumSym;
use crate::types::TypeVar;
use miette::SourceSpan;

/// A type in written form, kept inside enum declarations.
///
/// Mirrors the named type tree instead of canonicalising it: `Name`
/// carries the reference text as the author wrote it, so diagnostics in
/// later phases can echo the source. The kind checker turns shapes into
/// canonical types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeShape {
    Var(TypeVar, SourceSpan),
    Unit(SourceSpan),
    /// A type reference as written, rendered to text.
    Name { name: String, span: SourceSpan },
    Enum { sym: EnumSym },
    Tuple(Vec<TypeShape>, SourceSpan),
    Arrow(Vec<TypeShape>, Box<TypeShape>, SourceSpan),
    Apply(Box<TypeShape>, Vec<TypeShape>, SourceSpan),
}
