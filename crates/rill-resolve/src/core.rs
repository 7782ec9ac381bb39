//! The driver orchestrating resolution of a whole program.

use crate::error::ResolutionError;
use crate::resolve_decl::{
    resolve_constraint, resolve_def, resolve_enum, resolve_index, resolve_lattice,
    resolve_property, resolve_table,
};
use crate::Validation;
use fxhash::FxHashMap;
use rill_ast::common::NName;
use rill_ast::named::NamedProgram;
use rill_ast::resolved::{
    ResolvedConstraint, ResolvedDef, ResolvedEnum, ResolvedIndex, ResolvedLattice,
    ResolvedProgram, ResolvedProperty, ResolvedTable,
};
use rill_ast::symbol::{DefnSym, EnumSym, TableSym};
use rill_ast::types::Type;

/// The name resolver.
///
/// Holds the Named program and provides the entry point [`resolve`]
/// (`Resolver::resolve`). Every namespace-indexed category is resolved
/// independently and all errors accumulate; the outcome is the Resolved
/// program iff no error was found.
pub struct Resolver {
    program: NamedProgram,
}

impl Resolver {
    pub fn new(program: NamedProgram) -> Self {
        Self { program }
    }

    /// Runs resolution over every namespace and category.
    ///
    /// Traversal order is irrelevant to the outcome: the per-namespace
    /// output maps are disjoint and error collection is commutative. The
    /// hooks, reachability set, and timing metadata pass through
    /// unchanged.
    pub fn resolve(self) -> Validation<ResolvedProgram> {
        let mut errors: Vec<ResolutionError> = Vec::new();
        let program = &self.program;

        log::debug!(
            "resolving {} namespaces of definitions, {} of enums, {} of tables",
            program.definitions.len(),
            program.enums.len(),
            program.tables.len()
        );

        let mut definitions: FxHashMap<NName, FxHashMap<String, ResolvedDef>> =
            FxHashMap::default();
        for (ns, decls) in &program.definitions {
            let mut resolved = FxHashMap::default();
            for (name, decl) in decls {
                if let Some(def) = resolve_def(program, decl, ns, &mut errors) {
                    resolved.insert(name.clone(), def);
                }
            }
            definitions.insert(ns.clone(), resolved);
        }

        let mut enums: FxHashMap<NName, FxHashMap<String, ResolvedEnum>> = FxHashMap::default();
        for (ns, decls) in &program.enums {
            let resolved = decls
                .iter()
                .map(|(name, decl)| (name.clone(), resolve_enum(decl)))
                .collect();
            enums.insert(ns.clone(), resolved);
        }

        let mut tables: FxHashMap<NName, FxHashMap<String, ResolvedTable>> = FxHashMap::default();
        for (ns, decls) in &program.tables {
            let mut resolved = FxHashMap::default();
            for (name, decl) in decls {
                if let Some(table) = resolve_table(program, decl, ns, &mut errors) {
                    resolved.insert(name.clone(), table);
                }
            }
            tables.insert(ns.clone(), resolved);
        }

        let mut indexes: FxHashMap<NName, FxHashMap<String, ResolvedIndex>> = FxHashMap::default();
        for (ns, decls) in &program.indexes {
            let mut resolved = FxHashMap::default();
            for (name, decl) in decls {
                if let Some(index) = resolve_index(program, decl, ns, &mut errors) {
                    resolved.insert(name.clone(), index);
                }
            }
            indexes.insert(ns.clone(), resolved);
        }

        let mut lattices: FxHashMap<Type, ResolvedLattice> = FxHashMap::default();
        for decl in program.lattices.values() {
            if let Some(lattice) = resolve_lattice(program, decl, &mut errors) {
                lattices.insert(lattice.tpe.clone(), lattice);
            }
        }

        let mut constraints: FxHashMap<NName, Vec<ResolvedConstraint>> = FxHashMap::default();
        for (ns, decls) in &program.constraints {
            let resolved: Vec<ResolvedConstraint> = decls
                .iter()
                .filter_map(|decl| resolve_constraint(program, decl, ns, &mut errors))
                .collect();
            constraints.insert(ns.clone(), resolved);
        }

        let mut properties: FxHashMap<NName, Vec<ResolvedProperty>> = FxHashMap::default();
        for (ns, decls) in &program.properties {
            let resolved: Vec<ResolvedProperty> = decls
                .iter()
                .filter_map(|decl| resolve_property(program, decl, ns, &mut errors))
                .collect();
            properties.insert(ns.clone(), resolved);
        }

        if !errors.is_empty() {
            log::debug!("resolution failed with {} errors", errors.len());
            return Err(errors);
        }

        let definitions_by_symbol: FxHashMap<DefnSym, ResolvedDef> = definitions
            .values()
            .flat_map(|decls| decls.values())
            .map(|def| (def.sym.clone(), def.clone()))
            .collect();
        let enums_by_symbol: FxHashMap<EnumSym, ResolvedEnum> = enums
            .values()
            .flat_map(|decls| decls.values())
            .map(|decl| (decl.sym.clone(), decl.clone()))
            .collect();
        let tables_by_symbol: FxHashMap<TableSym, ResolvedTable> = tables
            .values()
            .flat_map(|decls| decls.values())
            .map(|decl| (decl.sym().clone(), decl.clone()))
            .collect();

        let NamedProgram { hooks, reachable, time, .. } = self.program;

        Ok(ResolvedProgram {
            definitions,
            enums,
            tables,
            indexes,
            lattices,
            constraints,
            properties,
            definitions_by_symbol,
            enums_by_symbol,
            tables_by_symbol,
            hooks,
            reachable,
            time,
        })
    }
}

/// Resolves a whole program. Convenience wrapper around [`Resolver`].
pub fn resolve(program: NamedProgram) -> Validation<ResolvedProgram> {
    Resolver::new(program).resolve()
}
