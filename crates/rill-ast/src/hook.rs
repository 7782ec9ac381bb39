use crate::symbol::DefnSym;
use crate::types::Type;

/// A host-provided definition, keyed by fully-qualified symbol.
///
/// Hooks are pre-compiled values injected by the embedding host before
/// compilation starts. The resolver treats them as opaque: it only asks
/// whether a key is present and threads the hook through to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Hook {
    pub sym: DefnSym,
    pub tpe: Type,
}

impl Hook {
    pub fn new(sym: DefnSym, tpe: Type) -> Self {
        Self { sym, tpe }
    }
}
