#![allow(dead_code)]

use logic::{
    builder::{atom, conjoin, disjoin, equiv_to, imply_to, negate, nor, scheffer},
    Node,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub const ATOMS: [&str; 4] = ["p", "q", "r", "long42"];

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x10_91c)
}

pub fn random_formula(rng: &mut StdRng, depth: usize) -> Node {
    if depth == 0 || rng.random_bool(0.2) {
        return atom(ATOMS[rng.random_range(0..ATOMS.len())]);
    }

    let sub = |rng: &mut StdRng| random_formula(rng, depth - 1);

    match rng.random_range(0..8) {
        0 => negate(sub(rng)),
        1 => conjoin(sub(rng), sub(rng)),
        2 => disjoin(sub(rng), sub(rng)),
        3 => imply_to(sub(rng), sub(rng)),
        4 => equiv_to(sub(rng), sub(rng)),
        5 => scheffer(sub(rng), sub(rng)),
        6 => {
            let first = sub(rng);
            let rest = (0..rng.random_range(0..3)).map(|_| sub(rng)).collect::<Vec<_>>();
            nor(first, rest)
        }
        _ => negate(negate(sub(rng))),
    }
}

pub fn random_formulas(count: usize, depth: usize) -> Vec<Node> {
    let mut rng = rng();
    (0..count).map(|_| random_formula(&mut rng, depth)).collect()
}

pub fn parse(text: &str) -> Node {
    logic::parse(text).unwrap_or_else(|e| panic!("{text:?} should parse: {e}"))
}
