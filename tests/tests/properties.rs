//! Behavioural guarantees of the validator.

use std::cell::Cell;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use structcheck_tests::prelude::*;

mod cycle_safety {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Inspect)]
    struct Person<'a> {
        #[checks("NotEmpty")]
        name: &'a str,
        #[checks("NotNil")]
        manager: Cell<Option<&'a Person<'a>>>,
    }

    fn person<'a>(name: &'a str) -> Person<'a> {
        Person {
            name,
            manager: Cell::new(None),
        }
    }

    #[test]
    fn test_mutual_references_terminate() {
        // GIVEN two people managing each other, one with an empty name
        let alice = person("alice");
        let bob = person("");
        alice.manager.set(Some(&bob));
        bob.manager.set(Some(&alice));

        // WHEN validating from either side
        // THEN each person is checked exactly once
        Expect::case("mutual_references_from_alice")
            .fields(&["Person.manager.name"])
            .verify(&validate(&alice))
            .unwrap();
        Expect::case("mutual_references_from_bob")
            .fields(&["Person.name"])
            .value("Person.name", "\"\"")
            .verify(&validate(&bob))
            .unwrap();
    }

    #[test]
    fn test_result_is_deterministic() {
        let alice = person("alice");
        let bob = person("bob");
        alice.manager.set(Some(&alice));
        bob.manager.set(Some(&alice));

        let first = validate(&bob);
        let second = validate(&bob);

        assert_eq!(first, Ok(()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_referent_visited_once() {
        // GIVEN two boxes pointing at the same leaf
        #[derive(Inspect)]
        struct Pair {
            left: Arc<Leaf>,
            right: Arc<Leaf>,
        }

        #[derive(Inspect)]
        struct Leaf {
            #[checks("Negative")]
            value: f64,
        }

        let leaf = Arc::new(Leaf { value: 1.5 });
        let pair = Pair {
            left: Arc::clone(&leaf),
            right: leaf,
        };

        // THEN the shared leaf is reported under the first path only
        Expect::case("shared_referent")
            .fields(&["Pair.left.value"])
            .value("Pair.left.value", "1.5")
            .verify(&validate(&pair))
            .unwrap();
    }
}

mod completeness {
    use super::*;

    #[derive(Inspect)]
    struct Inventory {
        #[checks("NotEmpty")]
        sku: String,
        #[checks("Positive")]
        quantity: i64,
        #[checks("NoSign")]
        reserved: u32,
        #[checks("Empty")]
        errors: BTreeMap<String, String>,
        warehouse: Option<Warehouse>,
    }

    #[derive(Inspect)]
    struct Warehouse {
        #[checks("NotEmpty")]
        code: String,
        #[checks("NotNil")]
        aisles: Option<HashSet<u16>>,
        #[checks("NotEmpty")]
        docks: HashSet<u16>,
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let value = Inventory {
            sku: String::new(),
            quantity: 0,
            reserved: 4,
            errors: BTreeMap::from([("a".to_string(), "b".to_string())]),
            warehouse: Some(Warehouse {
                code: String::new(),
                aisles: None,
                docks: HashSet::from([1]),
            }),
        };

        Expect::case("every_failing_field")
            .fields(&[
                "Inventory.sku",
                "Inventory.quantity",
                "Inventory.reserved",
                "Inventory.errors",
                "Inventory.warehouse.code",
                "Inventory.warehouse.aisles",
            ])
            .field("Inventory.reserved", &["NoSign"])
            .value("Inventory.reserved", "4")
            .value("Inventory.errors", "BTreeMap<String, String>(len=1)")
            .field("Inventory.warehouse.aisles", &["NotNil"])
            .verify(&validate(&value))
            .unwrap();
    }

    #[test]
    fn test_present_but_empty_collection_fails_only_emptiness() {
        let value = Inventory {
            sku: "A-1".to_string(),
            quantity: 3,
            reserved: 0,
            errors: BTreeMap::new(),
            warehouse: Some(Warehouse {
                code: "W".to_string(),
                aisles: Some(HashSet::new()),
                docks: HashSet::new(),
            }),
        };

        Expect::case("present_but_empty")
            .failures(1)
            .field("Inventory.warehouse.docks", &["NotEmpty"])
            .value("Inventory.warehouse.docks", "HashSet<u16>(len=0)")
            .passes("Inventory.warehouse.aisles")
            .verify(&validate(&value))
            .unwrap();
    }
}

mod ordering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Inspect)]
    struct Grid {
        rows: [Row; 1],
        #[checks("Positive")]
        width: i8,
        first: Row,
        #[checks("Positive")]
        height: i8,
        second: Row,
    }

    #[derive(Inspect)]
    struct Row {
        #[checks("NotEmpty")]
        cells: Vec<u8>,
        #[checks("Positive")]
        index: i16,
    }

    fn empty_row() -> Row {
        Row {
            cells: Vec::new(),
            index: -1,
        }
    }

    #[test]
    fn test_report_follows_declaration_order() {
        let value = Grid {
            rows: [empty_row()],
            width: -1,
            first: empty_row(),
            height: 0,
            second: empty_row(),
        };

        let result = validate(&value);

        // Arrays are leaves; their elements are never visited.
        Expect::case("declaration_order")
            .fields(&[
                "Grid.width",
                "Grid.first.cells",
                "Grid.first.index",
                "Grid.height",
                "Grid.second.cells",
                "Grid.second.index",
            ])
            .verify(&result)
            .unwrap();

        let rendered = result.unwrap_err().to_string();
        for _ in 0..5 {
            assert_eq!(validate(&value).unwrap_err().to_string(), rendered);
        }
    }
}

mod type_class_gating {
    use super::*;

    #[test]
    fn test_emptiness_on_number_is_configuration_error() {
        #[derive(Inspect)]
        struct Bad {
            #[checks("NotEmpty")]
            count: usize,
        }

        Expect::case("not_empty_on_number")
            .configuration_error()
            .error("Constraint NotEmpty applies to sized values, but field 'Bad.count' holds usize")
            .verify(&validate(&Bad { count: 0 }))
            .unwrap();
    }

    #[derive(Inspect)]
    struct Linked {
        #[checks("Positive")]
        link: Option<Box<String>>,
    }

    #[test]
    fn test_sign_on_reference_is_configuration_error() {
        let result = validate(&Linked {
            link: Some(Box::new("x".to_string())),
        });

        Expect::case("positive_on_reference")
            .configuration_error()
            .error_matches(r"^Constraint Positive applies to numeric values, but field 'Linked\.link' holds core::option::Option<.*String>>$")
            .verify(&result)
            .unwrap();
    }

    #[test]
    fn test_illegal_check_does_not_depend_on_presence() {
        // GIVEN the same misdeclared field, absent and present
        let absent = validate(&Linked { link: None });
        let present = validate(&Linked {
            link: Some(Box::new("x".to_string())),
        });

        // THEN both are rejected as configuration errors, identically
        assert!(absent.as_ref().is_err_and(CheckError::is_configuration));
        assert_eq!(absent, present);
    }

    #[test]
    fn test_sign_on_optional_number_is_configuration_error() {
        #[derive(Inspect)]
        struct Offset {
            #[checks("Negative")]
            value: Option<Box<i32>>,
        }

        for value in [None, Some(Box::new(3)), Some(Box::new(-3))] {
            Expect::case("negative_on_optional_number")
                .configuration_error()
                .error("Constraint Negative applies to numeric values")
                .verify(&validate(&Offset { value }))
                .unwrap();
        }
    }

    #[test]
    fn test_class_assertion_on_optional_is_stable() {
        #[derive(Inspect)]
        struct Maybe {
            #[checks("Numeric")]
            count: Option<u8>,
        }

        for count in [None, Some(1)] {
            Expect::case("numeric_on_optional")
                .fields(&["Maybe.count"])
                .field("Maybe.count", &["Numeric"])
                .verify(&validate(&Maybe { count }))
                .unwrap();
        }
    }

    #[test]
    fn test_nil_check_on_plain_pointer_is_configuration_error() {
        #[derive(Inspect)]
        struct Bad {
            #[checks("NotNil")]
            target: Box<u8>,
        }

        let err = validate(&Bad {
            target: Box::new(1),
        })
        .unwrap_err();

        assert!(err.is_configuration());
        assert!(matches!(
            err,
            CheckError::IllegalCheck {
                type_name: "alloc::boxed::Box<u8>",
                ..
            }
        ));
    }

    #[test]
    fn test_illegal_check_wins_over_failures() {
        #[derive(Inspect)]
        struct Mixed {
            #[checks("Positive")]
            a: i32,
            #[checks("Empty")]
            b: f32,
        }

        Expect::case("illegal_after_failure")
            .configuration_error()
            .verify(&validate(&Mixed { a: -1, b: 0.0 }))
            .unwrap();
    }

    #[test]
    fn test_unknown_constraint_is_configuration_error() {
        #[derive(Inspect)]
        struct Typo {
            #[checks("NotNil,NotEmtpy")]
            name: Option<String>,
        }

        Expect::case("unknown_constraint")
            .configuration_error()
            .error("Unknown constraint `NotEmtpy` for field 'Typo.name'")
            .verify(&validate(&Typo { name: None }))
            .unwrap();
    }
}

mod absence {
    use super::*;

    #[derive(Inspect)]
    struct Profile {
        nickname: Option<String>,
        #[checks("NotNil")]
        email: Option<String>,
        #[checks("Nil")]
        deleted_at: Option<u64>,
        #[checks("NotEmpty")]
        bio: String,
    }

    #[test]
    fn test_absent_without_constraints_passes() {
        let value = Profile {
            nickname: None,
            email: Some("a@b.c".to_string()),
            deleted_at: None,
            bio: "hi".to_string(),
        };

        Expect::case("absent_without_not_nil")
            .succeeds()
            .verify(&validate(&value))
            .unwrap();
    }

    #[test]
    fn test_absent_with_not_nil_fails() {
        let value = Profile {
            nickname: None,
            email: None,
            deleted_at: Some(1),
            bio: String::new(),
        };

        Expect::case("absent_with_not_nil")
            .fields(&["Profile.email", "Profile.deleted_at", "Profile.bio"])
            .field("Profile.email", &["NotNil"])
            .value("Profile.email", "None")
            .field("Profile.deleted_at", &["Nil"])
            .value("Profile.deleted_at", "Some(1)")
            .passes("Profile.nickname")
            .verify(&validate(&value))
            .unwrap();
    }
}
