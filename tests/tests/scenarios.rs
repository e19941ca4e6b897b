//! Core validation scenarios.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::rc::Rc;

use structcheck_tests::prelude::*;

#[derive(Inspect)]
struct Outer {
    #[checks("Positive")]
    count: i32,
    inner: Inner,
}

#[derive(Inspect)]
struct Inner {
    #[checks("NotNil")]
    field: Option<Box<Outer>>,
}

mod invalid_root {
    use super::*;

    #[test]
    fn test_absent_root() {
        let value: Option<Box<Outer>> = None;

        Expect::case("absent_root")
            .nil_root()
            .error("Encountered an absent reference")
            .verify(&validate(&value))
            .unwrap();
    }

    #[test]
    fn test_absent_root_behind_pointers() {
        let value: Box<Option<Rc<Outer>>> = Box::new(None);

        Expect::case("absent_root_behind_pointers")
            .nil_root()
            .verify(&validate(&value))
            .unwrap();
    }

    #[test]
    fn test_sequence_root() {
        let value = vec![Outer {
            count: 1,
            inner: Inner { field: None },
        }];

        Expect::case("sequence_root")
            .invalid_kind("Vec<")
            .error_matches(r"^Provided value must resolve to a struct\. Received: alloc::vec::Vec<.*Outer>$")
            .verify(&validate(&value))
            .unwrap();
    }

    #[test]
    fn test_mapping_root() {
        let value: HashMap<String, i32> = HashMap::new();

        Expect::case("mapping_root")
            .invalid_kind("HashMap<alloc::string::String, i32")
            .verify(&validate(&value))
            .unwrap();
    }

    #[test]
    fn test_primitive_root() {
        Expect::case("primitive_root")
            .invalid_kind("u64")
            .verify(&validate(&Some(Box::new(5u64))))
            .unwrap();
    }
}

mod field_failures {
    use super::*;

    #[test]
    fn test_negative_count() {
        // GIVEN a composite with a Positive field holding -1
        let value = Outer {
            count: -1,
            inner: Inner {
                field: Some(Box::new(Outer {
                    count: 2,
                    inner: Inner { field: None },
                })),
            },
        };
        // AND a nested NotNil field that is absent two levels down
        // WHEN validating
        let result = validate(&value);

        // THEN both failures are reported with their paths
        Expect::case("negative_count")
            .fields(&["Outer.count", "Outer.inner.field.inner.field"])
            .field("Outer.count", &["Positive"])
            .value("Outer.count", "-1")
            .verify(&result)
            .unwrap();
    }

    #[test]
    fn test_nested_absent_field() {
        let value = Outer {
            count: 3,
            inner: Inner { field: None },
        };

        Expect::case("nested_absent_field")
            .failures(1)
            .field("Outer.inner.field", &["NotNil"])
            .value("Outer.inner.field", "None")
            .passes("Outer.count")
            .verify(&validate(&value))
            .unwrap();
    }

    #[test]
    fn test_two_independent_failures() {
        #[derive(Inspect)]
        struct Record {
            #[checks("NotNil")]
            owner: Option<String>,
            #[checks("NotEmpty")]
            tags: Vec<String>,
            #[checks("NotEmpty")]
            label: String,
        }

        let value = Record {
            owner: None,
            tags: Vec::new(),
            label: "ok".to_string(),
        };

        Expect::case("two_independent_failures")
            .failures(2)
            .field("Record.owner", &["NotNil"])
            .field("Record.tags", &["NotEmpty"])
            .value("Record.tags", "Vec<String>(len=0)")
            .passes("Record.label")
            .error_matches(r"The following field\(s\) failed checks:\n  Record\.owner: +NotNil: +None\n  Record\.tags: +NotEmpty: +Vec<String>\(len=0\)")
            .verify(&validate(&value))
            .unwrap();
    }
}

mod self_reference {
    use super::*;

    #[derive(Inspect)]
    struct Node {
        label: &'static str,
        next: OnceCell<Rc<Node>>,
    }

    #[test]
    fn test_self_referencing_node_terminates() {
        // GIVEN a node whose next pointer is itself
        let node = Rc::new(Node {
            label: "loop",
            next: OnceCell::new(),
        });
        assert!(node.next.set(Rc::clone(&node)).is_ok());

        // WHEN validating it without any constraints
        // THEN the call returns successfully
        Expect::case("self_referencing_node")
            .succeeds()
            .verify(&validate(&node))
            .unwrap();

        let visited: Vec<String> = traverse(&node)
            .unwrap()
            .map(|located| located.qualified_name())
            .collect();
        assert_eq!(visited, vec!["Node", "Node.label", "Node.next"]);
    }
}
