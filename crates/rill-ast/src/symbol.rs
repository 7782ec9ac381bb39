//! Canonical symbols for declarations.
//!
//! Symbols are assigned once, by the naming phase, and act as the identity
//! of a declaration for every later phase. Equality and hashing for the
//! namespaced symbols consider the namespace path and name only — a symbol
//! constructed at a use site compares equal to the symbol stored on the
//! declaration, which is what makes the hook table keyable by
//! fully-qualified symbol.

use miette::SourceSpan;
use std::fmt;
use std::hash::{Hash, Hasher};

macro_rules! namespaced_symbol {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            pub namespace: Vec<String>,
            pub name: String,
            pub span: SourceSpan,
        }

        impl $name {
            pub fn new(namespace: Vec<String>, name: impl Into<String>, span: SourceSpan) -> Self {
                Self { namespace, name: name.into(), span }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.namespace == other.namespace && self.name == other.name
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.namespace.hash(state);
                self.name.hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.namespace.is_empty() {
                    write!(f, "{}", self.name)
                } else {
                    write!(f, "{}/{}", self.namespace.join("."), self.name)
                }
            }
        }
    };
}

namespaced_symbol! {
    /// The symbol of a value definition (a function or a named value).
    DefnSym
}

namespaced_symbol! {
    /// The symbol of an enum declaration.
    EnumSym
}

namespaced_symbol! {
    /// The symbol of a table declaration (relation or lattice).
    TableSym
}

/// The symbol of a local variable or formal parameter.
///
/// Identity is the numeric id minted by the naming phase; the text is
/// retained for diagnostics only.
#[derive(Debug, Clone)]
pub struct VarSym {
    pub id: u64,
    pub text: String,
    pub span: SourceSpan,
}

impl VarSym {
    pub fn new(id: u64, text: impl Into<String>, span: SourceSpan) -> Self {
        Self { id, text: text.into(), span }
    }
}

impl PartialEq for VarSym {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for VarSym {}

impl Hash for VarSym {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for VarSym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defn_sym_equality_ignores_span() {
        let decl = DefnSym::new(vec!["A".into(), "B".into()], "f", (10, 1).into());
        let usage = DefnSym::new(vec!["A".into(), "B".into()], "f", (99, 1).into());
        assert_eq!(decl, usage);

        let mut map = std::collections::HashMap::new();
        map.insert(decl, "hook");
        assert_eq!(map.get(&usage), Some(&"hook"));
    }

    #[test]
    fn symbol_display() {
        assert_eq!(DefnSym::new(vec![], "g", (0, 0).into()).to_string(), "g");
        assert_eq!(
            TableSym::new(vec!["N".into()], "Edge", (0, 0).into()).to_string(),
            "N/Edge"
        );
    }

    #[test]
    fn var_sym_identity_is_the_id() {
        let a = VarSym::new(3, "x", (0, 1).into());
        let b = VarSym::new(3, "y", (5, 1).into());
        let c = VarSym::new(4, "x", (0, 1).into());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
