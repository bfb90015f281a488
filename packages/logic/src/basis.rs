use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{ast::NodeKind, error::ConfigError};

const NOR: u8 = 1;
const SCHEFFER: u8 = 1 << 1;
const NEG: u8 = 1 << 2;
const OR: u8 = 1 << 3;
const AND: u8 = 1 << 4;
const IMPL: u8 = 1 << 5;
const EQUIV: u8 = 1 << 6;

const NO_AND: u8 = NEG | OR;
const NO_OR: u8 = NEG | AND;
const NO_IMPL: u8 = NO_OR | OR;
const NO_EQUIV: u8 = NO_IMPL | IMPL;
const ALL: u8 = NO_EQUIV | EQUIV | NOR | SCHEFFER;

/// The connectives a rewritten formula may use.
///
/// Atoms are always allowed. Each preset either keeps a single dual connective
/// or negation together with conjunction or disjunction.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Basis {
    All,
    NoEquiv,
    NoImpl,
    NoOr,
    NoAnd,
    Nor,
    Scheffer,
}

impl Basis {
    pub fn flags(&self) -> u8 {
        match self {
            Basis::All => ALL,
            Basis::NoEquiv => NO_EQUIV,
            Basis::NoImpl => NO_IMPL,
            Basis::NoOr => NO_OR,
            Basis::NoAnd => NO_AND,
            Basis::Nor => NOR,
            Basis::Scheffer => SCHEFFER,
        }
    }

    pub fn allows(&self, kind: NodeKind) -> bool {
        match flag(kind) {
            None => true,
            Some(flag) => self.flags() & flag != 0,
        }
    }

    pub fn connectives(&self) -> impl Iterator<Item = NodeKind> + '_ {
        NodeKind::iter().filter(|&kind| kind != NodeKind::Atom && self.allows(kind))
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Basis::iter().map(|basis| basis.name())
    }
}

fn flag(kind: NodeKind) -> Option<u8> {
    match kind {
        NodeKind::Atom => None,
        NodeKind::Neg => Some(NEG),
        NodeKind::And => Some(AND),
        NodeKind::Or => Some(OR),
        NodeKind::Impl => Some(IMPL),
        NodeKind::Equiv => Some(EQUIV),
        NodeKind::Scheffer => Some(SCHEFFER),
        NodeKind::Nor => Some(NOR),
    }
}

impl FromStr for Basis {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Basis::iter()
            .find(|basis| basis.name() == name)
            .ok_or_else(|| ConfigError::UnknownBasis {
                name: name.to_owned(),
                expected: Basis::names().join(", "),
            })
    }
}

impl Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
