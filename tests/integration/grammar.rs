//! Whole-document grammar tests
//!
//! Each document is parsed with dedent enabled and checked against the
//! objects it should produce and the references each object should hold.

use oblique::{ErrorCategory, ErrorKind, ParseOptions};

use crate::{expected, listing, parse_doc, refs_of, set};

fn parse_ok(source: &str) -> oblique::Database {
    parse_doc(source, ParseOptions::new()).expect("parse failed")
}

// =============================================================================
// Basics
// =============================================================================

#[test]
fn empty_lines() {
    let db = parse_ok("\n\n    ");
    assert!(listing(&db).is_empty());

    let db = parse_ok(
        "

      Some item

    ",
    );
    assert_eq!(listing(&db), expected(&[("item", "0", "Some item")]));

    let db = parse_ok(
        "
      Item #1.

      Item #2.
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[("item", "0", "Item #1."), ("item", "1", "Item #2.")])
    );
}

#[test]
fn one_item() {
    let db = parse_ok(
        "
      This is a valid item.
    ",
    );
    assert_eq!(listing(&db), expected(&[("item", "0", "This is a valid item.")]));
}

#[test]
fn multiple_items() {
    let db = parse_ok(
        "
      Valid item number 1.
      Valid item number 2.
      Valid item number 3.
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[
            ("item", "0", "Valid item number 1."),
            ("item", "1", "Valid item number 2."),
            ("item", "2", "Valid item number 3."),
        ])
    );
}

#[test]
fn comment_only() {
    let db = parse_ok(
        "
      # Some comment.
    ",
    );
    assert!(listing(&db).is_empty());
}

// =============================================================================
// Types and Objects
// =============================================================================

#[test]
fn type_definitions() {
    let db = parse_ok(
        "
      /type o Objective
      /type kr Key result
      /type cl Change list
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[
            ("type", "cl", "Change list"),
            ("type", "kr", "Key result"),
            ("type", "o", "Objective"),
        ])
    );
}

#[test]
fn type_type_is_reserved() {
    let err = parse_doc(
        "
        /type type Second type
      ",
        ParseOptions::new(),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateObject(_)));
}

#[test]
fn objdef_defined() {
    let db = parse_ok(
        "
      /type o Objective
      o/big-goal
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[("o", "big-goal", ""), ("type", "o", "Objective")])
    );
}

#[test]
fn objdef_defined_with_description() {
    let db = parse_ok(
        "
      /type o Objective
      o/big-goal Big goal
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[("o", "big-goal", "Big goal"), ("type", "o", "Objective")])
    );
}

#[test]
fn objdef_undefined_type() {
    let err = parse_doc(
        "
        o/big-goal
      ",
        ParseOptions::new(),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UndefinedType(_)));
    assert_eq!(err.category(), ErrorCategory::Semantic);
}

#[test]
fn objref_defined() {
    let db = parse_ok(
        "
      /type bug Bugs
      bug/123456
      Ticket bug/123456
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[
            ("bug", "123456", ""),
            ("item", "0", "Ticket bug/123456"),
            ("type", "bug", "Bugs"),
        ])
    );
    assert_eq!(refs_of(&db, "item/0"), set(&["bug/123456"]));
}

#[test]
fn objref_undefined() {
    let err = parse_doc(
        "
        Ticket bug/123456
      ",
        ParseOptions::new(),
    )
    .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Semantic);
}

#[test]
fn objref_to_strict_type_instance_undefined() {
    let err = parse_doc(
        "
        /type bug Bugs
        Ticket bug/123456
      ",
        ParseOptions::new(),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UndefinedReference(_)));
}

#[test]
fn duplicate_definition() {
    let err = parse_doc(
        "
        /type g Gold
        g/1 First
        g/1 Second
      ",
        ParseOptions::new(),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateObject(ref r) if r.to_string() == "g/1"));
    assert_eq!(err.context.unwrap().line, Some(4));
}

// =============================================================================
// Inheritance
// =============================================================================

#[test]
fn inheritance() {
    let db = parse_ok(
        "
      /type g Gold
      /type s Silver
      g/1
      g/2 g/1
        s/1
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[
            ("g", "1", ""),
            ("g", "2", "g/1"),
            ("s", "1", ""),
            ("type", "g", "Gold"),
            ("type", "s", "Silver"),
        ])
    );
    assert_eq!(refs_of(&db, "s/1"), set(&["g/1", "g/2"]));
}

const MULTILEVEL: &str = "
      /type g Gold
      g/1
        g/2
          g/3
            g/4
          g/5
            g/6
        g/7
  ";

#[test]
fn inheritance_multilevel() {
    let db = parse_ok(MULTILEVEL);
    assert_eq!(listing(&db).len(), 8);
    assert_eq!(refs_of(&db, "g/1"), set(&[]));
    assert_eq!(refs_of(&db, "g/2"), set(&["g/1"]));
    assert_eq!(refs_of(&db, "g/3"), set(&["g/2"]));
    assert_eq!(refs_of(&db, "g/4"), set(&["g/3"]));
    assert_eq!(refs_of(&db, "g/5"), set(&["g/2"]));
    assert_eq!(refs_of(&db, "g/6"), set(&["g/5"]));
    assert_eq!(refs_of(&db, "g/7"), set(&["g/1"]));
}

#[test]
fn inheritance_multilevel_cumulative() {
    let db = parse_doc(MULTILEVEL, ParseOptions::cumulative()).unwrap();
    assert_eq!(refs_of(&db, "g/1"), set(&[]));
    assert_eq!(refs_of(&db, "g/2"), set(&["g/1"]));
    assert_eq!(refs_of(&db, "g/3"), set(&["g/1", "g/2"]));
    assert_eq!(refs_of(&db, "g/4"), set(&["g/1", "g/2", "g/3"]));
    assert_eq!(refs_of(&db, "g/5"), set(&["g/1", "g/2"]));
    assert_eq!(refs_of(&db, "g/6"), set(&["g/1", "g/2", "g/5"]));
    assert_eq!(refs_of(&db, "g/7"), set(&["g/1"]));
}

#[test]
fn inheritance_indirect_refs() {
    let db = parse_ok(
        "
      /type g Gold
      /type u User
      u/joe
      g/1 u/joe
        g/2
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[
            ("g", "1", "u/joe"),
            ("g", "2", ""),
            ("type", "g", "Gold"),
            ("type", "u", "User"),
            ("u", "joe", ""),
        ])
    );
    assert_eq!(refs_of(&db, "g/1"), set(&["u/joe"]));
    assert_eq!(refs_of(&db, "g/2"), set(&["g/1", "u/joe"]));
}

#[test]
fn inheritance_across_blank_line() {
    let db = parse_ok(
        "
      /type g Gold
      g/1
        g/2

        g/3
    ",
    );
    assert_eq!(refs_of(&db, "g/1"), set(&[]));
    assert_eq!(refs_of(&db, "g/2"), set(&["g/1"]));
    assert_eq!(refs_of(&db, "g/3"), set(&["g/1"]));
}

#[test]
fn items_inherit_like_objects() {
    let db = parse_ok(
        "
      /type g Gold
      g/1 Quarter goal
        Write the plan
          Review it with the team
    ",
    );
    assert_eq!(refs_of(&db, "item/0"), set(&["g/1"]));
    assert_eq!(refs_of(&db, "item/1"), set(&["item/0"]));
}

// =============================================================================
// Lazy Types and Macros
// =============================================================================

#[test]
fn lazy_types() {
    let db = parse_ok(
        "
      /lazytype cl Commit
      Worked on cl/134afa96454d
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[
            ("cl", "134afa96454d", ""),
            ("item", "0", "Worked on cl/134afa96454d"),
            ("type", "cl", "Commit"),
        ])
    );
}

#[test]
fn macro_priority() {
    let db = parse_ok(
        r"
      /type p Priority
      p/1 High priority
      p/2 Medium priority
      /macro P([0-4]) p/\1
      Attend to the frobnicator P1 after cleaning it (P2)
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[
            ("item", "0", "Attend to the frobnicator P1 after cleaning it (P2)"),
            ("p", "1", "High priority"),
            ("p", "2", "Medium priority"),
            ("type", "p", "Priority"),
        ])
    );
    assert_eq!(refs_of(&db, "item/0"), set(&["p/1"]));
}

#[test]
fn macro_user() {
    let db = parse_ok(
        r"
      /lazytype u User
      /macro ([a-z]+)@ u/\1
      Help client deliver on project blais@
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[
            ("item", "0", "Help client deliver on project blais@"),
            ("type", "u", "User"),
            ("u", "blais", ""),
        ])
    );
}

#[test]
fn macro_user_without_type() {
    let err = parse_doc(
        r"
        /macro ([a-z]+)@ u/\1
        Help client deliver on project blais@
      ",
        ParseOptions::new(),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UndefinedType(ref t) if t.to_string() == "type/u"));
}

#[test]
fn lazy_object_defined_after_first_reference() {
    let err = parse_doc(
        "
        /lazytype cl Commit
        Worked on cl/abc
        cl/abc Details
      ",
        ParseOptions::new(),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateObject(ref r) if r.to_string() == "cl/abc"));
    assert_eq!(err.context.unwrap().line, Some(4));
}

#[test]
fn lazy_object_defined_before_reference() {
    let db = parse_ok(
        "
      /lazytype u User
      u/joe Joe from accounting
      Lunch with u/joe
    ",
    );
    assert_eq!(
        listing(&db),
        expected(&[
            ("item", "0", "Lunch with u/joe"),
            ("type", "u", "User"),
            ("u", "joe", "Joe from accounting"),
        ])
    );
}
