//! Holding ledger: the in-memory record of owned positions for one
//! asset class.

use std::collections::HashMap;

use super::holding::Holding;

/// Positions keyed by symbol. Created empty, grows only through
/// [`Ledger::add_holding`]; re-adding a symbol replaces the prior
/// holding outright (last write wins, no merging).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    holdings: HashMap<String, Holding>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            holdings: HashMap::new(),
        }
    }

    pub fn add_holding(&mut self, holding: Holding) {
        self.holdings.insert(holding.symbol.clone(), holding);
    }

    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.get(symbol)
    }

    pub fn holdings(&self) -> impl Iterator<Item = &Holding> {
        self.holdings.values()
    }

    pub fn symbols(&self) -> Vec<String> {
        self.holdings.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
