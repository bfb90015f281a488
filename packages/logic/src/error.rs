use derive_more::{Display, From};

#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
#[display("At {offset}: expected {expected}, found `{found}`")]
pub struct LexError {
    pub offset: usize,
    pub expected: &'static str,
    pub found: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum ParseError {
    #[display("At {offset}: expected {expected}, got end of input")]
    UnexpectedEnd { offset: usize, expected: String },

    #[display("At {offset}: expected {expected}, got `{found}`")]
    UnexpectedToken {
        offset: usize,
        expected: String,
        found: String,
    },

    #[display("At {offset}: expected end of input, got `{found}`")]
    TrailingInput { offset: usize, found: String },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedEnd { offset, .. }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::TrailingInput { offset, .. } => *offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum EvaluationError {
    #[display("{name} is missing in the interpretation")]
    MissingVariable { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum TruthTableError {
    #[display("No atoms: a truth table needs at least one variable")]
    NoAtoms,

    #[display("Formula has {count} atoms, more than the supported {limit}")]
    TooManyAtoms { count: usize, limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum ConfigError {
    #[display("Unknown basis \"{name}\" (expected one of: {expected})")]
    UnknownBasis { name: String, expected: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error, From)]
pub enum Error {
    #[display("{_0}")]
    Lex(LexError),

    #[display("{_0}")]
    Parse(ParseError),

    #[display("{_0}")]
    Evaluation(EvaluationError),

    #[display("{_0}")]
    TruthTable(TruthTableError),

    #[display("{_0}")]
    Config(ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
