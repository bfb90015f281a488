use std::fmt::Display;

use log::debug;

use crate::{
    ast::{Node, VariableSet},
    error::{Error, TruthTableError},
    evaluate::{Evaluate, Interpretation, TruthValue},
};

/// Largest number of atoms a truth table is computed for (2^20 rows).
pub const MAX_TRUTH_TABLE_ATOMS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    pub assignment: Vec<TruthValue>,
    pub result: TruthValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// Atom names in sorted order, then the rendered formula.
    pub header: Vec<String>,
    pub rows: Vec<TruthTableRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropositionAttributes {
    pub valid: bool,
    pub satisfiable: bool,
}

pub fn compute_truth_table(node: &Node) -> Result<TruthTable, Error> {
    let variables = node.collect_atoms();
    check_atom_count(&variables)?;

    debug!(
        "Enumerating {} interpretations of {}",
        1u64 << variables.0.len(),
        node
    );

    let rows = Interpretation::generate_all(&variables)?
        .map(|interpretation| -> Result<TruthTableRow, Error> {
            Ok(TruthTableRow {
                result: TruthValue(node.evaluate(&interpretation)?),
                assignment: interpretation.0.values().map(|&value| TruthValue(value)).collect(),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let header = variables
        .0
        .into_iter()
        .chain(std::iter::once(node.render()))
        .collect();

    Ok(TruthTable { header, rows })
}

/// Whether `left` and `right` agree under every interpretation of their
/// combined atoms.
pub fn check_equivalence(left: &Node, right: &Node) -> Result<bool, Error> {
    let mut variables = left.collect_atoms();
    variables.0.extend(right.collect_atoms().0);
    check_atom_count(&variables)?;

    for interpretation in Interpretation::generate_all(&variables)? {
        if left.evaluate(&interpretation)? != right.evaluate(&interpretation)? {
            debug!("{left} and {right} differ under {interpretation}");
            return Ok(false);
        }
    }

    Ok(true)
}

/// Whether a truth table over `variables` can be enumerated.
pub fn check_atom_count(variables: &VariableSet) -> Result<(), TruthTableError> {
    match variables.0.len() {
        0 => Err(TruthTableError::NoAtoms),
        count if count > MAX_TRUTH_TABLE_ATOMS => Err(TruthTableError::TooManyAtoms {
            count,
            limit: MAX_TRUTH_TABLE_ATOMS,
        }),
        _ => Ok(()),
    }
}

impl TruthTable {
    pub fn formula(&self) -> &str {
        self.header.last().map(String::as_str).unwrap_or_default()
    }

    pub fn atoms(&self) -> &[String] {
        &self.header[..self.header.len().saturating_sub(1)]
    }

    pub fn attributes(&self) -> PropositionAttributes {
        PropositionAttributes {
            valid: self.rows.iter().all(|row| row.result.0),
            satisfiable: self.rows.iter().any(|row| row.result.0),
        }
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for column in &self.header {
            write!(f, "|{column}")?;
        }
        writeln!(f, "|")?;

        for _ in &self.header {
            write!(f, "|:-:")?;
        }
        writeln!(f, "|")?;

        for row in &self.rows {
            for value in &row.assignment {
                write!(f, "|{value}")?;
            }
            writeln!(f, "|{}|", row.result)?;
        }

        Ok(())
    }
}
