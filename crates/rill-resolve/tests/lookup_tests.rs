//! Reference and table lookup behaviour, including the asymmetric
//! fallback rules.

mod common;

use common::*;
use rill_ast::named::NamedProgram;
use rill_resolve::{lookup_ref, lookup_table, RefTarget, ResolutionError};

#[test]
fn unqualified_ref_prefers_current_namespace_over_root() {
    let mut program = NamedProgram::default();
    add_def(&mut program, &["N"], def(&["N"], "f", unit_expr(0), type_ref("Unit", 0), 0));
    add_def(&mut program, &[], def(&[], "f", unit_expr(10), type_ref("Unit", 10), 10));

    let target = lookup_ref(&program, &unqualified("f", 20), &nname(&["N"])).unwrap();
    match target {
        RefTarget::Defn(ns, decl) => {
            assert_eq!(ns, nname(&["N"]));
            assert_eq!(decl.sym.namespace, owned_strings(&["N"]));
        }
        RefTarget::Hook(_) => panic!("expected a definition"),
    }
}

#[test]
fn unqualified_ref_falls_back_to_root() {
    let mut program = NamedProgram::default();
    add_def(&mut program, &[], def(&[], "g", unit_expr(0), type_ref("Unit", 0), 0));

    let target = lookup_ref(&program, &unqualified("g", 20), &nname(&["N"])).unwrap();
    match target {
        RefTarget::Defn(ns, decl) => {
            assert!(ns.is_root());
            assert!(decl.sym.namespace.is_empty());
        }
        RefTarget::Hook(_) => panic!("expected a definition"),
    }
}

#[test]
fn qualified_ref_does_not_consult_root() {
    let mut program = NamedProgram::default();
    add_def(&mut program, &[], def(&[], "f", unit_expr(0), type_ref("Unit", 0), 0));

    let err = lookup_ref(&program, &qualified(&["N"], "f", 20), &root()).unwrap_err();
    assert!(matches!(err, ResolutionError::UndefinedRef { .. }));
}

#[test]
fn qualified_ref_resolves_in_stated_namespace() {
    let mut program = NamedProgram::default();
    add_def(&mut program, &["A", "B"], def(&["A", "B"], "f", unit_expr(0), type_ref("Unit", 0), 0));

    let target = lookup_ref(&program, &qualified(&["A", "B"], "f", 20), &nname(&["C"])).unwrap();
    match target {
        RefTarget::Defn(_, decl) => assert_eq!(decl.sym.namespace, owned_strings(&["A", "B"])),
        RefTarget::Hook(_) => panic!("expected a definition"),
    }
}

#[test]
fn hook_resolves_when_no_definition_exists() {
    let mut program = NamedProgram::default();
    add_hook(&mut program, &["N"], "h");

    let target = lookup_ref(&program, &unqualified("h", 5), &nname(&["N"])).unwrap();
    match target {
        RefTarget::Hook(hook) => assert_eq!(hook.sym.name, "h"),
        RefTarget::Defn(_, _) => panic!("expected a hook"),
    }
}

#[test]
fn definition_and_hook_in_same_namespace_is_ambiguous() {
    let mut program = NamedProgram::default();
    add_def(&mut program, &["N"], def(&["N"], "f", unit_expr(0), type_ref("Unit", 0), 0));
    add_hook(&mut program, &["N"], "f");

    let err = lookup_ref(&program, &unqualified("f", 20), &nname(&["N"])).unwrap_err();
    assert!(matches!(err, ResolutionError::AmbiguousRef { .. }));
}

#[test]
fn root_fallback_consults_definitions_only() {
    // A hook registered at the root is not reachable through the
    // unqualified fallback; only root definitions are.
    let mut program = NamedProgram::default();
    add_hook(&mut program, &[], "h");

    let err = lookup_ref(&program, &unqualified("h", 5), &nname(&["N"])).unwrap_err();
    assert!(matches!(err, ResolutionError::UndefinedRef { .. }));
}

#[test]
fn undefined_ref_carries_use_site_location() {
    let program = NamedProgram::default();
    let err = lookup_ref(&program, &unqualified("f", 42), &root()).unwrap_err();
    match err {
        ResolutionError::UndefinedRef { span, .. } => assert_eq!(span.offset(), 42),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unqualified_table_lookup_has_no_root_fallback() {
    let mut program = NamedProgram::default();
    add_table(&mut program, &[], relation(&[], "R", vec![("x", type_ref("Int32", 0))], 0));

    let err = lookup_table(&program, &unqualified("R", 10), &nname(&["N"])).unwrap_err();
    assert!(matches!(err, ResolutionError::UndefinedTable { .. }));

    // The same reference from the root namespace resolves.
    let table = lookup_table(&program, &unqualified("R", 10), &root()).unwrap();
    assert_eq!(table.sym().name, "R");
}

#[test]
fn qualified_table_lookup_consults_stated_namespace_only() {
    let mut program = NamedProgram::default();
    add_table(&mut program, &["N"], relation(&["N"], "R", vec![("x", type_ref("Int32", 0))], 0));

    let table = lookup_table(&program, &qualified(&["N"], "R", 10), &root()).unwrap();
    assert_eq!(table.sym().namespace, owned_strings(&["N"]));

    let err = lookup_table(&program, &qualified(&["M"], "R", 10), &root()).unwrap_err();
    assert!(matches!(err, ResolutionError::UndefinedTable { .. }));
}

#[test]
fn hooks_never_shadow_tables() {
    let mut program = NamedProgram::default();
    add_table(&mut program, &["N"], relation(&["N"], "R", vec![("x", type_ref("Int32", 0))], 0));
    add_hook(&mut program, &["N"], "R");

    // Table lookup ignores the hook table entirely.
    let table = lookup_table(&program, &unqualified("R", 10), &nname(&["N"])).unwrap();
    assert_eq!(table.sym().name, "R");
}
