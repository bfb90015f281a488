mod common;

use common::parse;
use logic::{
    ast::VariableSet,
    builder::{atom, nor, scheffer},
    error::{EvaluationError, TruthTableError},
    truth_table::MAX_TRUTH_TABLE_ATOMS,
    Evaluate, Interpretation,
};
use maplit::btreeset;

fn interpretation(values: &[(&str, bool)]) -> Interpretation {
    values.iter().copied().collect()
}

#[test]
fn literal_cases() {
    assert_eq!(
        parse("a & b").evaluate(&interpretation(&[("a", true), ("b", false)])),
        Ok(false)
    );
    assert_eq!(
        parse("a -> b").evaluate(&interpretation(&[("a", false), ("b", false)])),
        Ok(true)
    );
    assert_eq!(
        parse("a <-> b").evaluate(&interpretation(&[("a", true), ("b", true)])),
        Ok(true)
    );
    assert_eq!(
        parse("!a | b").evaluate(&interpretation(&[("a", true), ("b", false)])),
        Ok(false)
    );
}

#[test]
fn extra_variables_are_ignored() {
    assert_eq!(
        parse("a").evaluate(&interpretation(&[("a", true), ("z", false)])),
        Ok(true)
    );
}

#[test]
fn missing_variable() {
    assert_eq!(
        parse("a & b").evaluate(&interpretation(&[("a", true)])),
        Err(EvaluationError::MissingVariable {
            name: "b".to_owned()
        })
    );

    // Reported even though `a` alone already decides the conjunction.
    assert!(parse("a & b")
        .evaluate(&interpretation(&[("a", false)]))
        .is_err());
}

#[test]
fn scheffer_is_nand() {
    let formula = scheffer(atom("a"), atom("b"));
    let variables = VariableSet(btreeset! {"a".to_owned(), "b".to_owned()});

    let values = Interpretation::generate_all(&variables)
        .unwrap()
        .map(|i| formula.evaluate(&i).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(values, [true, true, true, false]);
}

#[test]
fn nor_is_true_iff_every_child_is_false() {
    let formula = nor(atom("a"), [atom("b"), atom("c")]);
    let variables = formula.collect_atoms();

    for i in Interpretation::generate_all(&variables).unwrap() {
        let expected = !i.0.values().any(|&value| value);
        assert_eq!(formula.evaluate(&i), Ok(expected), "{i}");
    }

    assert_eq!(
        nor(atom("a"), []).evaluate(&interpretation(&[("a", false)])),
        Ok(true)
    );
}

#[test]
fn interpretations_are_generated_first_atom_slowest() {
    let variables = VariableSet(btreeset! {"b".to_owned(), "a".to_owned()});

    let interpretations = Interpretation::generate_all(&variables)
        .unwrap()
        .map(|i| i.to_string())
        .collect::<Vec<_>>();

    assert_eq!(
        interpretations,
        ["{¬a, ¬b}", "{¬a, b}", "{a, ¬b}", "{a, b}"]
    );
}

#[test]
fn generation_refuses_oversized_variable_sets() {
    for count in [MAX_TRUTH_TABLE_ATOMS + 1, 64, 100] {
        let variables = VariableSet((0..count).map(|i| format!("x{i}")).collect());

        let error = Interpretation::generate_all(&variables)
            .err()
            .unwrap_or_else(|| panic!("{count} variables should be refused"));

        assert_eq!(
            error,
            TruthTableError::TooManyAtoms {
                count,
                limit: MAX_TRUTH_TABLE_ATOMS,
            }
        );
    }

    let empty = VariableSet::default();
    assert_eq!(Interpretation::generate_all(&empty).unwrap().count(), 1);
}
