// src/factor/factor_pair.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorPair {
    pub p: u64,
    pub q: u64,
}

impl FactorPair {
    pub fn new(p: u64, q: u64) -> Self {
        FactorPair { p, q }
    }

    pub fn product(&self) -> u128 {
        self.p as u128 * self.q as u128
    }
}

impl std::fmt::Display for FactorPair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({},{})", self.p, self.q)
    }
}
