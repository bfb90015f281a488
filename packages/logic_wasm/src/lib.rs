use logic::{
    compute_truth_table,
    explanation::{Explain, Explanation},
    parse, restrict_explained, Basis, Node, TreeView,
};
use serde::{Deserialize, Serialize};
use tsify::Tsify;
use wasm_bindgen::prelude::*;

#[derive(Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct ExplainedResult<T> {
    pub result: Result<T, String>,
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Tsify)]
pub struct Tree {
    pub kind: String,
    pub label: String,
    pub children: Vec<Tree>,
}

impl From<TreeView> for Tree {
    fn from(view: TreeView) -> Self {
        Tree {
            kind: view.kind.to_string(),
            label: view.label,
            children: view.children.into_iter().map(Tree::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Tsify)]
pub struct RestrictedFormula {
    pub formula: String,
    pub tree: Tree,
}

#[derive(Serialize, Deserialize, Tsify)]
pub struct Table {
    pub header: Vec<String>,
    /// `T`/`F` cells: the assignment followed by the result.
    pub rows: Vec<Vec<String>>,
    pub markdown: String,
    pub valid: bool,
    pub satisfiable: bool,
}

fn parse_explained(formula: &str, explanation: &mut Explanation) -> Result<Node, String> {
    explanation.with_subexplanation(
        || "Parsing formula",
        |explanation| match parse(formula) {
            Ok(node) => {
                explanation.step(|| format!("Parsed {node}"));
                Ok(node)
            }
            Err(error) => {
                explanation.step(|| error.to_string());
                Err(format!("Failed to parse formula: {error}"))
            }
        },
    )
}

#[wasm_bindgen]
pub fn parse_tree(formula: String) -> ExplainedResult<Tree> {
    let mut explanation = Explanation::default();

    let result = parse_explained(&formula, &mut explanation).map(|node| node.view().into());

    ExplainedResult {
        result,
        explanation: explanation.to_string(),
    }
}

#[wasm_bindgen]
pub fn restrict_formula(formula: String, basis: String) -> ExplainedResult<RestrictedFormula> {
    let mut explanation = Explanation::default();

    let basis = match basis.parse::<Basis>() {
        Ok(basis) => basis,
        Err(error) => {
            return ExplainedResult {
                result: Err(error.to_string()),
                explanation: explanation.to_string(),
            }
        }
    };

    let result = parse_explained(&formula, &mut explanation).map(|node| {
        let restricted = restrict_explained(&node, basis, &mut explanation);

        RestrictedFormula {
            formula: restricted.render(),
            tree: restricted.view().into(),
        }
    });

    ExplainedResult {
        result,
        explanation: explanation.to_string(),
    }
}

#[wasm_bindgen]
pub fn truth_table(formula: String) -> ExplainedResult<Table> {
    let mut explanation = Explanation::default();

    let result = parse_explained(&formula, &mut explanation).and_then(|node| {
        let table = compute_truth_table(&node).map_err(|error| error.to_string())?;
        let attributes = table.attributes();

        explanation.step(|| format!("Evaluated {} interpretations", table.rows.len()));

        Ok(Table {
            markdown: table.to_string(),
            rows: table
                .rows
                .iter()
                .map(|row| {
                    row.assignment
                        .iter()
                        .chain(std::iter::once(&row.result))
                        .map(|value| value.to_string())
                        .collect()
                })
                .collect(),
            header: table.header,
            valid: attributes.valid,
            satisfiable: attributes.satisfiable,
        })
    });

    ExplainedResult {
        result,
        explanation: explanation.to_string(),
    }
}

/// Names accepted by `restrict_formula`.
#[wasm_bindgen]
pub fn bases() -> Vec<String> {
    Basis::names().map(str::to_owned).collect()
}
