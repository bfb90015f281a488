use std::fmt::Display;

use indexmap::IndexMap;

use crate::{
    ast::{Node, VariableSet},
    error::{EvaluationError, TruthTableError},
    truth_table::MAX_TRUTH_TABLE_ATOMS,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation(pub IndexMap<String, bool>);

impl Interpretation {
    /// Every interpretation of `variables`, in sorted variable order. The first
    /// variable changes slowest and each variable takes false before true, so
    /// the sequence for `{a, b}` is `¬a¬b`, `¬a b`, `a¬b`, `a b`.
    ///
    /// Fails with [`TruthTableError::TooManyAtoms`] above
    /// [`MAX_TRUTH_TABLE_ATOMS`] variables.
    pub fn generate_all(
        variables: &VariableSet,
    ) -> Result<impl Iterator<Item = Interpretation> + '_, TruthTableError> {
        let n = variables.0.len();

        if n > MAX_TRUTH_TABLE_ATOMS {
            return Err(TruthTableError::TooManyAtoms {
                count: n,
                limit: MAX_TRUTH_TABLE_ATOMS,
            });
        }

        let interpretation_count: u64 = 1 << n;

        Ok((0..interpretation_count).map(move |i| {
            Interpretation(
                variables
                    .0
                    .iter()
                    .enumerate()
                    .map(|(position, variable)| {
                        let bit = n - 1 - position;
                        (variable.clone(), (i >> bit) & 1 == 1)
                    })
                    .collect(),
            )
        }))
    }

    pub fn get(&self, variable: &str) -> Option<bool> {
        self.0.get(variable).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Interpretation {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Interpretation(
            iter.into_iter()
                .map(|(variable, value)| (variable.into(), value))
                .collect(),
        )
    }
}

impl Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut variables = self.0.iter().collect::<Vec<_>>();
        variables.sort_by_key(|(variable, _)| *variable);

        let variable_list = variables
            .iter()
            .map(|&(variable, &value)| {
                let prefix = if value { "" } else { "¬" };
                format!("{prefix}{variable}")
            })
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{{{}}}", variable_list)
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TruthValue(pub bool);

impl Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.0 { "T" } else { "F" })
    }
}

pub trait Evaluate {
    fn evaluate(&self, interpretation: &Interpretation) -> Result<bool, EvaluationError>;
}

// Both operands are always evaluated so that a missing variable is reported
// wherever it occurs.
impl Evaluate for Node {
    fn evaluate(&self, interpretation: &Interpretation) -> Result<bool, EvaluationError> {
        let value = match self {
            Node::Atom(name) => {
                interpretation
                    .get(name)
                    .ok_or_else(|| EvaluationError::MissingVariable { name: name.clone() })?
            }
            Node::Neg(child) => !child.evaluate(interpretation)?,
            Node::And(left, right)
            | Node::Or(left, right)
            | Node::Impl(left, right)
            | Node::Equiv(left, right)
            | Node::Scheffer(left, right) => {
                let l = left.evaluate(interpretation)?;
                let r = right.evaluate(interpretation)?;

                match self {
                    Node::And(_, _) => l && r,
                    Node::Or(_, _) => l || r,
                    Node::Impl(_, _) => !l || r,
                    Node::Equiv(_, _) => l == r,
                    Node::Scheffer(_, _) => !(l && r),
                    _ => unreachable!("binary connectives are matched above"),
                }
            }
            Node::Nor(..) => self
                .children()
                .into_iter()
                .try_fold(true, |all_false, child| {
                    Ok::<_, EvaluationError>(!child.evaluate(interpretation)? && all_false)
                })?,
        };

        Ok(value)
    }
}
