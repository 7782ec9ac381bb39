use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors that can occur during name resolution.
#[derive(Debug, Error, Diagnostic, Clone, Hash, PartialEq, Eq)]
pub enum ResolutionError {
    /// A reference to a value definition that no definition and no hook
    /// provides, in the consulted namespace or (for unqualified names)
    /// the root namespace.
    #[error("Undefined reference: `{name}` is not defined in namespace `{namespace}`")]
    #[diagnostic(
        code(rill_resolve::undefined_ref),
        help("is `{name}` declared in `{namespace}` or in the root namespace?")
    )]
    UndefinedRef {
        /// The name as written at the use site.
        name: String,
        /// The namespace the reference was made from.
        namespace: String,
        #[label("referenced here")]
        span: SourceSpan,
    },

    /// A name provided both by a user definition and by a host hook in
    /// the same namespace.
    #[error("Ambiguous reference: `{name}` is provided by both a definition and a hook in namespace `{namespace}`")]
    #[diagnostic(
        code(rill_resolve::ambiguous_ref),
        help("rename the definition or unregister the hook")
    )]
    AmbiguousRef {
        name: String,
        namespace: String,
        #[label("referenced here")]
        span: SourceSpan,
    },

    /// A table reference that names no declared relation or lattice.
    #[error("Undefined table: `{name}` is not declared in namespace `{namespace}`")]
    #[diagnostic(code(rill_resolve::undefined_table))]
    UndefinedTable {
        name: String,
        namespace: String,
        #[label("table referenced here")]
        span: SourceSpan,
    },

    /// A type reference that names no primitive and no enum.
    #[error("Undefined type: `{name}` is not a primitive or declared enum in namespace `{namespace}`")]
    #[diagnostic(code(rill_resolve::undefined_type))]
    UndefinedType {
        name: String,
        namespace: String,
        #[label("type referenced here")]
        span: SourceSpan,
    },

    /// A tag that no enum case matches, or whose enum qualifier rules
    /// out every candidate.
    #[error("Undefined tag: no enum in scope declares a case `{tag}`")]
    #[diagnostic(code(rill_resolve::undefined_tag))]
    UndefinedTag {
        tag: String,
        namespace: String,
        #[label("tag used here")]
        span: SourceSpan,
    },

    /// A tag declared by several enums in scope, used without an enum
    /// qualifier.
    #[error("Ambiguous tag: `{tag}` is declared by multiple enums in namespace `{namespace}`")]
    #[diagnostic(
        code(rill_resolve::ambiguous_tag),
        help("qualify the tag with its enum, e.g. `E.{tag}`")
    )]
    AmbiguousTag {
        tag: String,
        namespace: String,
        /// Declaration sites of the candidate cases, in source order.
        candidates: Vec<SourceSpan>,
        #[label("tag used here")]
        span: SourceSpan,
    },

    /// A reference in a constraint position that resolved to a host
    /// hook. Hooks have no relational interpretation, so this is a
    /// phase-validation failure rather than a binding.
    #[error("Illegal hook use: `{name}` resolves to a host hook and cannot appear in a constraint")]
    #[diagnostic(code(rill_resolve::hook_in_predicate))]
    HookInPredicate {
        name: String,
        #[label("hook referenced here")]
        span: SourceSpan,
    },
}

/// Records a failed lookup in the collector and maps it to `None`, so
/// sibling sub-resolutions keep running while the failing chain stops.
pub(crate) fn record<T>(
    result: Result<T, ResolutionError>,
    errors: &mut Vec<ResolutionError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}
