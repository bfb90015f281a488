use logic_wasm::{bases, parse_tree, restrict_formula, truth_table};

#[test]
fn truth_table_cells_are_letters() {
    let table = truth_table("a & b".to_owned()).result.unwrap();

    assert_eq!(table.header, ["a", "b", "(a ∧ b)"]);
    assert_eq!(
        table.rows,
        [
            ["F", "F", "F"],
            ["F", "T", "F"],
            ["T", "F", "F"],
            ["T", "T", "T"],
        ]
    );
    assert!(!table.valid);
    assert!(table.satisfiable);
}

#[test]
fn truth_table_reports_parse_failures() {
    let explained = truth_table("a &".to_owned());

    assert!(explained.result.is_err());
    assert!(!explained.explanation.is_empty());
}

#[test]
fn tree_carries_kind_label_and_children() {
    let tree = parse_tree("!a".to_owned()).result.unwrap();

    assert_eq!(tree.kind, "neg");
    assert_eq!(tree.label, "¬");
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].label, "a");
}

#[test]
fn restriction_by_basis_name() {
    let restricted = restrict_formula("a -> b".to_owned(), "no-impl".to_owned())
        .result
        .unwrap();
    assert_eq!(restricted.formula, "(¬a ∨ b)");

    assert!(restrict_formula("a".to_owned(), "xor".to_owned())
        .result
        .is_err());
    assert_eq!(bases().len(), 7);
}
