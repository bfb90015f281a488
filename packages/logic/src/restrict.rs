use colored::Colorize;
use log::{debug, warn};

use crate::{
    ast::{Node, NodeKind},
    basis::Basis,
    builder::{conjoin, disjoin, imply_to, negate, nor, scheffer},
    explanation::{DiscardedExplanation, Explain},
};

pub fn law(equivalence: &str) -> String {
    format!("Applying {equivalence}").green().to_string()
}

/// Rewrites `node` into an equivalent formula that only uses connectives
/// allowed by `basis`.
pub fn restrict(node: &Node, basis: Basis) -> Node {
    restrict_explained(node, basis, &mut DiscardedExplanation)
}

pub fn restrict_explained(node: &Node, basis: Basis, explanation: &mut impl Explain) -> Node {
    if basis == Basis::All {
        explanation.step(|| "Every connective is allowed; nothing to rewrite");
        return node.clone();
    }

    let result = explanation.with_subexplanation(
        || format!("Restricting {} to basis {}", node.to_string().blue(), basis),
        |explanation| {
            let result = restrict_node(node, basis, explanation);
            explanation.step(|| format!("Result: {}", result.to_string().red()));
            result
        },
    );

    debug!(
        "Restricted {} nodes to {} nodes using basis {}",
        node.size(),
        result.size(),
        basis
    );

    result
}

fn restrict_node(node: &Node, basis: Basis, explanation: &mut impl Explain) -> Node {
    match node {
        Node::Atom(_) => node.clone(),

        Node::Equiv(left, right) => {
            if basis.allows(NodeKind::Equiv) {
                return Node::Equiv(
                    Box::new(restrict_node(left, basis, explanation)),
                    Box::new(restrict_node(right, basis, explanation)),
                );
            }

            explanation.step(|| law("(F ↔ G) ∼ (F → G) ∧ (G → F)"));
            restrict_node(
                &conjoin(
                    imply_to(*left.clone(), *right.clone()),
                    imply_to(*right.clone(), *left.clone()),
                ),
                basis,
                explanation,
            )
        }

        Node::Impl(left, right) => {
            if basis.allows(NodeKind::Impl) {
                return Node::Impl(
                    Box::new(restrict_node(left, basis, explanation)),
                    Box::new(restrict_node(right, basis, explanation)),
                );
            }

            explanation.step(|| law("(F → G) ∼ ¬F ∨ G"));
            restrict_node(
                &disjoin(negate(*left.clone()), *right.clone()),
                basis,
                explanation,
            )
        }

        Node::And(left, right) => {
            if basis.allows(NodeKind::And) {
                return Node::And(
                    Box::new(restrict_node(left, basis, explanation)),
                    Box::new(restrict_node(right, basis, explanation)),
                );
            }

            explanation.step(|| law("(F ∧ G) ∼ ¬(¬F ∨ ¬G)"));
            restrict_node(
                &negate(disjoin(negate(*left.clone()), negate(*right.clone()))),
                basis,
                explanation,
            )
        }

        Node::Or(left, right) => {
            if basis.allows(NodeKind::Or) {
                return Node::Or(
                    Box::new(restrict_node(left, basis, explanation)),
                    Box::new(restrict_node(right, basis, explanation)),
                );
            }

            explanation.step(|| law("(F ∨ G) ∼ ¬(¬F ∧ ¬G)"));
            restrict_node(
                &negate(conjoin(negate(*left.clone()), negate(*right.clone()))),
                basis,
                explanation,
            )
        }

        Node::Neg(child) => restrict_negation(node, child, basis, explanation),

        Node::Nor(first, rest) => {
            if basis == Basis::Nor {
                let first = restrict_node(first, basis, explanation);
                let rest = rest
                    .iter()
                    .map(|child| restrict_node(child, basis, explanation))
                    .collect::<Vec<_>>();

                return nor(first, rest);
            }

            explanation.step(|| law("N(F₁, …, Fₙ) ∼ ¬(F₁ ∨ … ∨ Fₙ)"));
            let disjunction = rest
                .iter()
                .fold(*first.clone(), |stub, child| disjoin(stub, child.clone()));

            restrict_node(&negate(disjunction), basis, explanation)
        }

        Node::Scheffer(left, right) => {
            if basis == Basis::Scheffer {
                return Node::Scheffer(
                    Box::new(restrict_node(left, basis, explanation)),
                    Box::new(restrict_node(right, basis, explanation)),
                );
            }

            explanation.step(|| law("(F ↑ G) ∼ ¬(F ∧ G)"));
            restrict_node(
                &negate(conjoin(*left.clone(), *right.clone())),
                basis,
                explanation,
            )
        }
    }
}

fn restrict_negation(
    node: &Node,
    child: &Node,
    basis: Basis,
    explanation: &mut impl Explain,
) -> Node {
    if basis.allows(NodeKind::Neg) {
        return negate(restrict_node(child, basis, explanation));
    }

    match (basis, child) {
        (Basis::Scheffer, Node::And(left, right)) => {
            explanation.step(|| law("¬(F ∧ G) ∼ F ↑ G"));
            restrict_node(
                &scheffer(*left.clone(), *right.clone()),
                basis,
                explanation,
            )
        }
        (Basis::Scheffer, child) => {
            explanation.step(|| law("¬F ∼ F ↑ F"));
            restrict_node(&scheffer(child.clone(), child.clone()), basis, explanation)
        }
        (Basis::Nor, Node::Or(left, right)) => {
            explanation.step(|| law("¬(F ∨ G) ∼ N(F, G)"));
            restrict_node(
                &nor(*left.clone(), [*right.clone()]),
                basis,
                explanation,
            )
        }
        (Basis::Nor, child) => {
            explanation.step(|| law("¬F ∼ N(F)"));
            restrict_node(&nor(child.clone(), std::iter::empty()), basis, explanation)
        }
        _ => {
            warn!("No reduction of {node} exists in basis {basis}; leaving it unchanged");
            node.clone()
        }
    }
}
