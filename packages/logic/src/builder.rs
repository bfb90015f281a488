//! Free-standing constructors for [`Node`]. None of them touch their operands;
//! each wraps them in a fresh parent.

use crate::ast::Node;

pub fn atom(name: impl Into<String>) -> Node {
    Node::Atom(name.into())
}

pub fn negate(child: Node) -> Node {
    Node::Neg(Box::new(child))
}

pub fn conjoin(left: Node, right: Node) -> Node {
    Node::And(Box::new(left), Box::new(right))
}

pub fn disjoin(left: Node, right: Node) -> Node {
    Node::Or(Box::new(left), Box::new(right))
}

pub fn imply_to(left: Node, right: Node) -> Node {
    Node::Impl(Box::new(left), Box::new(right))
}

pub fn equiv_to(left: Node, right: Node) -> Node {
    Node::Equiv(Box::new(left), Box::new(right))
}

pub fn scheffer(left: Node, right: Node) -> Node {
    Node::Scheffer(Box::new(left), Box::new(right))
}

/// N-ary NOR; the first operand is separate so the node is never empty.
pub fn nor(first: Node, rest: impl IntoIterator<Item = Node>) -> Node {
    Node::Nor(Box::new(first), rest.into_iter().collect())
}
