// Integration tests for the signature parser and tree traversal

use sigtree::{
    parse_signature, pretty_print, tokenize, visit_tree, BasicKind, ContainerKind, SignatureError,
    TypeNode, Visitor,
};

fn basic(kind: BasicKind) -> TypeNode {
    TypeNode::Basic(kind)
}

fn array(element: TypeNode) -> TypeNode {
    TypeNode::Array(Box::new(element))
}

fn dict(key: TypeNode, value: TypeNode) -> TypeNode {
    TypeNode::Dict {
        key: Box::new(key),
        value: Box::new(value),
    }
}

#[test]
fn test_scalar_signature_parses_flat() {
    let tree = parse_signature("iis").expect("Parsing failed");
    assert_eq!(
        tree,
        vec![
            basic(BasicKind::Int32),
            basic(BasicKind::Int32),
            basic(BasicKind::String),
        ]
    );
}

#[test]
fn test_every_scalar_code_maps_to_its_kind() {
    let tree = parse_signature("ybnqiuxtdhsog").expect("Parsing failed");
    let expected = [
        BasicKind::Byte,
        BasicKind::Boolean,
        BasicKind::Int16,
        BasicKind::Uint16,
        BasicKind::Int32,
        BasicKind::Uint32,
        BasicKind::Int64,
        BasicKind::Uint64,
        BasicKind::Double,
        BasicKind::UnixFd,
        BasicKind::String,
        BasicKind::ObjectPath,
        BasicKind::Signature,
    ];

    assert_eq!(tree.len(), expected.len());
    for (node, kind) in tree.iter().zip(expected) {
        assert_eq!(*node, basic(kind));
    }
}

#[test]
fn test_nested_dicts_and_struct() {
    // a{s{u(iodai)}}: an array of string-keyed entries whose values are
    // uint32-keyed entries holding a four-field struct.
    let tree = parse_signature("a{s{u(iodai)}}").expect("Parsing failed");

    let inner_struct = TypeNode::Struct(vec![
        basic(BasicKind::Int32),
        basic(BasicKind::ObjectPath),
        basic(BasicKind::Double),
        array(basic(BasicKind::Int32)),
    ]);
    let inner_dict = dict(basic(BasicKind::Uint32), inner_struct);
    let outer = array(dict(basic(BasicKind::String), inner_dict));

    assert_eq!(tree, vec![outer]);
}

#[test]
fn test_struct_with_embedded_dict() {
    let tree = parse_signature("a(iis{si}i)").expect("Parsing failed");

    let fields = vec![
        basic(BasicKind::Int32),
        basic(BasicKind::Int32),
        basic(BasicKind::String),
        dict(basic(BasicKind::String), basic(BasicKind::Int32)),
        basic(BasicKind::Int32),
    ];

    assert_eq!(tree, vec![array(TypeNode::Struct(fields))]);
}

#[test]
fn test_tokenize_yields_one_token_per_character() {
    let signature = "a{s{u(iodai)}}";
    let tokens = tokenize(signature).expect("Tokenizing failed");
    assert_eq!(tokens.len(), signature.chars().count());
}

/// Counts enters and leaves and records the order dict children arrive in.
#[derive(Default)]
struct Auditor {
    enters: usize,
    leaves: usize,
    depth: usize,
    // depth of each currently open dict, innermost last
    open_dicts: Vec<usize>,
    // direct basic children seen so far per open dict
    dict_child_counts: Vec<usize>,
}

impl Visitor for Auditor {
    fn enter_basic(&mut self, _kind: BasicKind) {
        self.enters += 1;
        if let Some(dict_depth) = self.open_dicts.last().copied() {
            if dict_depth == self.depth {
                *self.dict_child_counts.last_mut().unwrap() += 1;
            }
        }
    }
    fn leave_basic(&mut self, _kind: BasicKind) {
        self.leaves += 1;
    }
    fn enter_variant(&mut self) {
        self.enters += 1;
    }
    fn leave_variant(&mut self) {
        self.leaves += 1;
    }
    fn enter_array(&mut self) {
        self.enters += 1;
        self.depth += 1;
    }
    fn leave_array(&mut self) {
        self.leaves += 1;
        self.depth -= 1;
    }
    fn enter_struct(&mut self) {
        self.enters += 1;
        self.depth += 1;
    }
    fn leave_struct(&mut self) {
        self.leaves += 1;
        self.depth -= 1;
    }
    fn enter_dict(&mut self) {
        self.enters += 1;
        self.depth += 1;
        self.open_dicts.push(self.depth);
        self.dict_child_counts.push(0);
    }
    fn leave_dict(&mut self) {
        self.leaves += 1;
        self.depth -= 1;
        self.open_dicts.pop();
        let children = self.dict_child_counts.pop().unwrap();
        // Direct basic children of a dict can only be its key and value.
        assert!(children <= 2);
    }
}

#[test]
fn test_every_node_entered_and_left_exactly_once() {
    let tree = parse_signature("a{s{u(iodai)}}").expect("Parsing failed");

    fn count_nodes(node: &TypeNode) -> usize {
        match node {
            TypeNode::Basic(_) | TypeNode::Variant => 1,
            TypeNode::Array(element) => 1 + count_nodes(element),
            TypeNode::Struct(fields) => 1 + fields.iter().map(count_nodes).sum::<usize>(),
            TypeNode::Dict { key, value } => 1 + count_nodes(key) + count_nodes(value),
        }
    }
    let total: usize = tree.iter().map(count_nodes).sum();

    let mut auditor = Auditor::default();
    visit_tree(&tree, &mut auditor);

    assert_eq!(auditor.enters, total);
    assert_eq!(auditor.leaves, total);
    assert_eq!(auditor.depth, 0);
}

#[test]
fn test_dict_key_visited_before_value() {
    #[derive(Default)]
    struct KeyOrder {
        basics: Vec<BasicKind>,
    }
    impl Visitor for KeyOrder {
        fn enter_basic(&mut self, kind: BasicKind) {
            self.basics.push(kind);
        }
    }

    let tree = parse_signature("{si}").expect("Parsing failed");
    let mut order = KeyOrder::default();
    visit_tree(&tree, &mut order);

    assert_eq!(order.basics, vec![BasicKind::String, BasicKind::Int32]);
}

#[test]
fn test_pretty_print_worked_example() {
    let tree = parse_signature("a{s{u(iodai)}}").expect("Parsing failed");
    let expected = concat!(
        "array\n",
        "  dict\n",
        "    basic: string\n",
        "    dict\n",
        "      basic: uint32\n",
        "      struct\n",
        "        basic: int32\n",
        "        basic: object path\n",
        "        basic: double\n",
        "        array\n",
        "          basic: int32\n",
    );
    assert_eq!(pretty_print(&tree), expected);
}

#[test]
fn test_pretty_print_is_deterministic() {
    let tree = parse_signature("a(iis{si}i)").expect("Parsing failed");
    let first = pretty_print(&tree);
    let second = pretty_print(&tree);
    assert_eq!(first, second);
}

#[test]
fn test_malformed_signatures_raise_designated_errors() {
    assert!(matches!(
        parse_signature("a").unwrap_err(),
        SignatureError::UnterminatedContainer {
            kind: ContainerKind::Array
        }
    ));
    assert!(matches!(
        parse_signature(")").unwrap_err(),
        SignatureError::UnbalancedContainer {
            found: ContainerKind::Struct,
            ..
        }
    ));
    assert!(matches!(
        parse_signature("(i").unwrap_err(),
        SignatureError::UnterminatedContainer {
            kind: ContainerKind::Struct
        }
    ));
    assert!(matches!(
        parse_signature("{iii}").unwrap_err(),
        SignatureError::DictionaryOverflow { .. }
    ));
    assert!(matches!(
        parse_signature("(i}").unwrap_err(),
        SignatureError::MismatchedContainer {
            expected: ContainerKind::Struct,
            found: ContainerKind::Dict,
            ..
        }
    ));
    assert!(matches!(
        parse_signature("Z").unwrap_err(),
        SignatureError::InvalidCharacter {
            character: 'Z',
            position: 0
        }
    ));
}

#[test]
fn test_container_dict_key_is_rejected() {
    assert!(matches!(
        parse_signature("{ai}").unwrap_err(),
        SignatureError::InvalidDictionaryKey { found: "array", .. }
    ));
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = parse_signature("iZ").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid signature character 'Z' at position 1"
    );

    let err = parse_signature("(i}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected close of struct at position 2, found close of dictionary"
    );
}
