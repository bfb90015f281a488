use std::{collections::BTreeSet, fmt::Display};

use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use strum::{EnumIter, IntoStaticStr};
use termtree::Tree;

use crate::explanation::ExplainedValue;

/// A propositional formula.
///
/// Nodes are never mutated after construction; rewrites build new trees.
/// `Nor` keeps its first child apart from the rest, so it is never empty.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Node {
    Atom(String),
    Neg(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    Impl(Box<Node>, Box<Node>),
    Equiv(Box<Node>, Box<Node>),
    Scheffer(Box<Node>, Box<Node>),
    Nor(Box<Node>, Vec<Node>),
}

#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Atom,
    Neg,
    And,
    Or,
    Impl,
    Equiv,
    Scheffer,
    Nor,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{name}")
    }
}

/// What a rendering layer sees of a node: its tag, its label and its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeView {
    pub kind: NodeKind,
    pub label: String,
    pub children: Vec<TreeView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet(pub BTreeSet<String>);

impl Display for VariableSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Atom(_) => NodeKind::Atom,
            Node::Neg(_) => NodeKind::Neg,
            Node::And(_, _) => NodeKind::And,
            Node::Or(_, _) => NodeKind::Or,
            Node::Impl(_, _) => NodeKind::Impl,
            Node::Equiv(_, _) => NodeKind::Equiv,
            Node::Scheffer(_, _) => NodeKind::Scheffer,
            Node::Nor(..) => NodeKind::Nor,
        }
    }

    /// The display glyph of the connective, or the name of an atom.
    pub fn symbol(&self) -> &str {
        match self {
            Node::Atom(name) => name,
            Node::Neg(_) => "¬",
            Node::And(_, _) => "∧",
            Node::Or(_, _) => "∨",
            Node::Impl(_, _) => "→",
            Node::Equiv(_, _) => "↔",
            Node::Scheffer(_, _) => "↑",
            Node::Nor(..) => "N",
        }
    }

    pub fn label(&self) -> String {
        self.symbol().to_owned()
    }

    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Atom(_) => vec![],
            Node::Neg(child) => vec![child.as_ref()],
            Node::And(left, right)
            | Node::Or(left, right)
            | Node::Impl(left, right)
            | Node::Equiv(left, right)
            | Node::Scheffer(left, right) => vec![left.as_ref(), right.as_ref()],
            Node::Nor(first, rest) => {
                std::iter::once(first.as_ref()).chain(rest).collect()
            }
        }
    }

    pub fn is_compound(&self) -> bool {
        !matches!(self, Node::Atom(_))
    }

    pub fn view(&self) -> TreeView {
        TreeView {
            kind: self.kind(),
            label: self.label(),
            children: self.children().into_iter().map(Node::view).collect(),
        }
    }

    pub fn get_tree(&self) -> Tree<String> {
        Tree::new(self.label()).with_leaves(self.children().into_iter().map(Node::get_tree))
    }

    /// Fully parenthesized rendering; the output parses back to an equal tree.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn collect_atoms(&self) -> VariableSet {
        let mut variables = BTreeSet::new();
        self.extend_atoms(&mut variables);

        VariableSet(variables)
    }

    fn extend_atoms(&self, variables: &mut BTreeSet<String>) {
        match self {
            // The whole name is one atom, never its characters.
            Node::Atom(name) => {
                variables.insert(name.clone());
            }
            node => {
                for child in node.children() {
                    child.extend_atoms(variables);
                }
            }
        }
    }

    /// Atom collection with the steps that led to the result.
    pub fn get_variables(&self) -> ExplainedValue<VariableSet> {
        let mut steps = vec![format!(
            "Collecting variables in {}",
            self.to_string().blue()
        )];

        let variables = self.collect_atoms();
        steps.push(format!("=> {}", variables.to_string().green()));

        ExplainedValue {
            value: variables,
            steps,
        }
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    pub fn size(&self) -> usize {
        1 + self.children().into_iter().map(Node::size).sum::<usize>()
    }
}

pub fn collect_atoms(node: &Node) -> VariableSet {
    node.collect_atoms()
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Atom(name) => write!(f, "{name}"),
            Node::Neg(child) => write!(f, "¬{child}"),
            Node::And(left, right)
            | Node::Or(left, right)
            | Node::Impl(left, right)
            | Node::Equiv(left, right)
            | Node::Scheffer(left, right) => {
                write!(f, "({} {} {})", left, self.symbol(), right)
            }
            Node::Nor(..) => write!(f, "N({})", self.children().into_iter().join(", ")),
        }
    }
}
