pub mod ast;
pub mod basis;
pub mod builder;
pub mod error;
pub mod evaluate;
pub mod explanation;
pub mod parser;
pub mod restrict;
pub mod token;
pub mod truth_table;

pub use ast::{collect_atoms, Node, NodeKind, TreeView, VariableSet};
pub use basis::Basis;
pub use error::{Error, Result};
pub use evaluate::{Evaluate, Interpretation, TruthValue};
pub use parser::parse;
pub use restrict::{restrict, restrict_explained};
pub use token::{tokenize, tokenize_lossy, Token, TokenKind};
pub use truth_table::{check_equivalence, compute_truth_table, TruthTable};
