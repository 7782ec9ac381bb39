//! Written-form type resolution, used inside enum declarations.
//!
//! Enum case types keep the shape the author wrote instead of being
//! canonicalised, so later diagnostics can echo the source. References
//! are rendered to text; the kind checker canonicalises shapes.

use rill_ast::named::NamedType;
use rill_ast::resolved::TypeShape;

/// Maps a named type to its written-form mirror. Infallible: nothing is
/// looked up, so an unknown name inside an enum case surfaces in the
/// kind-inference phase, not here.
pub fn resolve_type_shape(tpe: &NamedType) -> TypeShape {
    match tpe {
        NamedType::Var(tvar, span) => TypeShape::Var(*tvar, *span),
        NamedType::Unit(span) => TypeShape::Unit(*span),
        NamedType::Ref(qname) => TypeShape::Name {
            name: qname.to_string(),
            span: qname.span,
        },
        NamedType::Enum(sym) => TypeShape::Enum { sym: sym.clone() },
        NamedType::Tuple(elms, span) => {
            TypeShape::Tuple(elms.iter().map(resolve_type_shape).collect(), *span)
        }
        NamedType::Arrow(params, ret, span) => TypeShape::Arrow(
            params.iter().map(resolve_type_shape).collect(),
            Box::new(resolve_type_shape(ret)),
            *span,
        ),
        NamedType::Apply(base, args, span) => TypeShape::Apply(
            Box::new(resolve_type_shape(base)),
            args.iter().map(resolve_type_shape).collect(),
            *span,
        ),
    }
}
