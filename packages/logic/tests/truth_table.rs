mod common;

use std::collections::HashSet;

use common::{parse, random_formulas};
use logic::{
    builder::{atom, conjoin},
    check_equivalence, compute_truth_table,
    error::TruthTableError,
    truth_table::{check_atom_count, MAX_TRUTH_TABLE_ATOMS},
    Error, TruthValue, VariableSet,
};

fn cells(values: &[TruthValue]) -> String {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn conjunction_table() {
    let table = compute_truth_table(&parse("b & a")).unwrap();

    assert_eq!(table.header, ["a", "b", "(b ∧ a)"]);
    assert_eq!(table.atoms(), ["a", "b"]);
    assert_eq!(table.formula(), "(b ∧ a)");

    let rows = table
        .rows
        .iter()
        .map(|row| (cells(&row.assignment), row.result.to_string()))
        .collect::<Vec<_>>();

    assert_eq!(
        rows,
        [
            ("FF".to_owned(), "F".to_owned()),
            ("FT".to_owned(), "F".to_owned()),
            ("TF".to_owned(), "F".to_owned()),
            ("TT".to_owned(), "T".to_owned()),
        ]
    );
}

#[test]
fn markdown_rendering() {
    let table = compute_truth_table(&parse("!p")).unwrap();

    assert_eq!(table.to_string(), "|p|¬p|\n|:-:|:-:|\n|F|T|\n|T|F|\n");
}

#[test]
fn one_row_per_interpretation() {
    for formula in random_formulas(40, 4) {
        let atom_count = formula.collect_atoms().0.len();
        let table = compute_truth_table(&formula).unwrap();

        assert_eq!(table.header.len(), atom_count + 1);
        assert_eq!(table.rows.len(), 1 << atom_count);

        let distinct = table
            .rows
            .iter()
            .map(|row| cells(&row.assignment))
            .collect::<HashSet<_>>();
        assert_eq!(distinct.len(), table.rows.len());
    }
}

#[test]
fn empty_variable_sets_have_no_table() {
    assert_eq!(
        check_atom_count(&VariableSet::default()),
        Err(TruthTableError::NoAtoms)
    );
    assert_eq!(check_atom_count(&parse("a").collect_atoms()), Ok(()));
}

#[test]
fn atom_count_is_bounded() {
    let formula = (1..=MAX_TRUTH_TABLE_ATOMS)
        .fold(atom("x0"), |stub, i| conjoin(stub, atom(format!("x{i}"))));

    assert_eq!(
        compute_truth_table(&formula),
        Err(Error::TruthTable(TruthTableError::TooManyAtoms {
            count: MAX_TRUTH_TABLE_ATOMS + 1,
            limit: MAX_TRUTH_TABLE_ATOMS,
        }))
    );
}

#[test]
fn attributes() {
    let tautology = compute_truth_table(&parse("a | !a")).unwrap().attributes();
    assert!(tautology.valid && tautology.satisfiable);

    let contradiction = compute_truth_table(&parse("a & !a")).unwrap().attributes();
    assert!(!contradiction.valid && !contradiction.satisfiable);

    let contingent = compute_truth_table(&parse("a -> b")).unwrap().attributes();
    assert!(!contingent.valid && contingent.satisfiable);
}

#[test]
fn equivalence_checks() {
    assert_eq!(check_equivalence(&parse("a -> b"), &parse("!a | b")), Ok(true));
    assert_eq!(check_equivalence(&parse("a -> b"), &parse("b -> a")), Ok(false));
    assert_eq!(
        check_equivalence(&parse("N(a, b)"), &parse("!a & !b")),
        Ok(true)
    );
    // Atoms missing on one side are still enumerated.
    assert_eq!(check_equivalence(&parse("a"), &parse("a & (b | !b)")), Ok(true));
}
