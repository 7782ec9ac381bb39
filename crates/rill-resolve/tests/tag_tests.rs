//! Tag lookup: global uniqueness, namespace narrowing, and qualifier
//! disambiguation.

mod common;

use common::*;
use rill_ast::named::NamedProgram;
use rill_resolve::{lookup_tag, ResolutionError};

#[test]
fn globally_unique_tag_resolves_from_unrelated_namespace() {
    let mut program = NamedProgram::default();
    add_enum(&mut program, &["N"], enum_decl(&["N"], "E", &[("A", 0), ("B", 5)], 0));

    // No qualifier, searching from a namespace that declares nothing.
    let decl = lookup_tag(&program, None, &ident("A", 50), &nname(&["M"])).unwrap();
    assert_eq!(decl.sym.name, "E");
    assert_eq!(decl.sym.namespace, owned_strings(&["N"]));
}

#[test]
fn ambiguous_tag_reports_sorted_candidates() {
    let mut program = NamedProgram::default();
    // Insert the later declaration first; the error must still list the
    // candidate locations in source order.
    add_enum(&mut program, &["N"], enum_decl(&["N"], "E2", &[("A", 40)], 30));
    add_enum(&mut program, &["N"], enum_decl(&["N"], "E1", &[("A", 10)], 0));

    let err = lookup_tag(&program, None, &ident("A", 60), &nname(&["N"])).unwrap_err();
    match err {
        ResolutionError::AmbiguousTag { candidates, span, .. } => {
            let offsets: Vec<usize> = candidates.iter().map(|c| c.offset()).collect();
            assert_eq!(offsets, vec![10, 40]);
            assert_eq!(span.offset(), 60);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn enum_qualifier_disambiguates() {
    let mut program = NamedProgram::default();
    add_enum(&mut program, &["N"], enum_decl(&["N"], "E1", &[("A", 10)], 0));
    add_enum(&mut program, &["N"], enum_decl(&["N"], "E2", &[("A", 40)], 30));

    let decl =
        lookup_tag(&program, Some(&unqualified("E1", 55)), &ident("A", 60), &nname(&["N"])).unwrap();
    assert_eq!(decl.sym.name, "E1");
}

#[test]
fn qualified_qualifier_selects_its_namespace() {
    let mut program = NamedProgram::default();
    add_enum(&mut program, &["M"], enum_decl(&["M"], "E1", &[("A", 10)], 0));
    add_enum(&mut program, &["M"], enum_decl(&["M"], "E2", &[("A", 40)], 30));
    add_enum(&mut program, &["N"], enum_decl(&["N"], "E3", &[("A", 70)], 60));

    // Three global candidates; the qualifier narrows the search to M and
    // names E2 there.
    let decl = lookup_tag(&program, Some(&qualified(&["M"], "E2", 80)), &ident("A", 85), &nname(&["N"]))
        .unwrap();
    assert_eq!(decl.sym.name, "E2");
    assert_eq!(decl.sym.namespace, owned_strings(&["M"]));
}

#[test]
fn unknown_tag_is_undefined() {
    let mut program = NamedProgram::default();
    add_enum(&mut program, &["N"], enum_decl(&["N"], "E", &[("A", 0)], 0));

    let err = lookup_tag(&program, None, &ident("Z", 20), &nname(&["N"])).unwrap_err();
    assert!(matches!(err, ResolutionError::UndefinedTag { .. }));
}

#[test]
fn qualifier_that_rules_out_every_candidate_is_undefined() {
    let mut program = NamedProgram::default();
    add_enum(&mut program, &["N"], enum_decl(&["N"], "E1", &[("A", 10)], 0));
    add_enum(&mut program, &["N"], enum_decl(&["N"], "E2", &[("A", 40)], 30));

    let err =
        lookup_tag(&program, Some(&unqualified("E9", 55)), &ident("A", 60), &nname(&["N"])).unwrap_err();
    assert!(matches!(err, ResolutionError::UndefinedTag { .. }));
}

#[test]
fn tag_ambiguous_globally_but_unique_locally_resolves() {
    let mut program = NamedProgram::default();
    add_enum(&mut program, &["M"], enum_decl(&["M"], "E1", &[("A", 10)], 0));
    add_enum(&mut program, &["N"], enum_decl(&["N"], "E2", &[("A", 40)], 30));

    // Two global candidates, but only one in the current namespace.
    let decl = lookup_tag(&program, None, &ident("A", 60), &nname(&["N"])).unwrap();
    assert_eq!(decl.sym.name, "E2");
}
