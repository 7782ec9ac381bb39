use miette::SourceSpan;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// An identifier as written in the source, with its location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    pub span: SourceSpan,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: SourceSpan) -> Self {
        Self { name: name.into(), span }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A namespace path: an ordered sequence of identifiers.
///
/// The empty sequence is the *root namespace*. Equality and hashing
/// consider the part names only, never their spans, so a path written at
/// a use site compares equal to the path of the declaration it targets.
#[derive(Debug, Clone)]
pub struct NName {
    pub parts: Vec<Ident>,
    pub span: SourceSpan,
}

impl NName {
    pub fn new(parts: Vec<Ident>, span: SourceSpan) -> Self {
        Self { parts, span }
    }

    /// The root namespace.
    pub fn root() -> Self {
        Self { parts: Vec::new(), span: (0, 0).into() }
    }

    pub fn is_root(&self) -> bool {
        self.parts.is_empty()
    }

    /// The part names, without locations.
    pub fn part_names(&self) -> Vec<String> {
        self.parts.iter().map(|part| part.name.clone()).collect()
    }
}

impl PartialEq for NName {
    fn eq(&self, other: &Self) -> bool {
        self.parts.len() == other.parts.len()
            && self
                .parts
                .iter()
                .zip(&other.parts)
                .all(|(a, b)| a.name == b.name)
    }
}

impl Eq for NName {}

impl Hash for NName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for part in &self.parts {
            part.name.hash(state);
        }
    }
}

impl fmt::Display for NName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "<root>");
        }
        let names: Vec<&str> = self.parts.iter().map(|part| part.name.as_str()).collect();
        write!(f, "{}", names.join("."))
    }
}

/// A possibly-qualified name: a namespace path and a local identifier.
///
/// The name is *unqualified* iff the namespace path is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace: NName,
    pub ident: Ident,
    pub span: SourceSpan,
}

impl QName {
    pub fn new(namespace: NName, ident: Ident, span: SourceSpan) -> Self {
        Self { namespace, ident, span }
    }

    pub fn is_qualified(&self) -> bool {
        !self.namespace.is_root()
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_qualified() {
            write!(f, "{}/{}", self.namespace, self.ident)
        } else {
            write!(f, "{}", self.ident)
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    LogicalNot,
    Plus,
    Minus,
    BitwiseNegate,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Minus,
    Times,
    Divide,
    Modulo,
    Exponentiate,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
    LogicalAnd,
    LogicalOr,
    Implication,
    Biconditional,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    ShiftLeft,
    ShiftRight,
}

/// A reference to a member of the host environment: a class path and a
/// member name. Opaque to the front-end; the backend interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeRef {
    pub class: String,
    pub member: String,
}

/// Wall-clock durations of the phases that ran so far.
///
/// Provenance metadata owned by the surrounding driver; the resolver
/// passes it through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Time {
    pub phases: Vec<(String, Duration)>,
}
