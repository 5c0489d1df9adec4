//! Section order controller.
//!
//! Holds the user-chosen display order of the six sections, independent of
//! how the document stores them. The order is always a permutation of all
//! six identifiers: it starts from the fixed default, and the only mutation
//! is a splice move, which can neither drop nor duplicate an identifier.
//! Lifetime is per-session; the order is not persisted.

use serde::Serialize;

use crate::form::store::array_move;
use crate::models::resume::SectionKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionOrder(Vec<SectionKind>);

impl Default for SectionOrder {
    fn default() -> Self {
        SectionOrder(SectionKind::ALL.to_vec())
    }
}

impl SectionOrder {
    pub fn as_slice(&self) -> &[SectionKind] {
        &self.0
    }

    /// Index of `kind` in the current order.
    pub fn position(&self, kind: SectionKind) -> Option<usize> {
        self.0.iter().position(|&k| k == kind)
    }

    /// Splice move by position: the section at `from` is removed and
    /// reinserted at `to` in the shortened sequence. Out-of-range indices
    /// leave the order untouched. Returns whether anything moved.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        array_move(&mut self.0, from, to)
    }

    /// Resolves two section identifiers to their current positions and
    /// performs the same splice move. Either identifier missing from the
    /// order is a no-op.
    pub fn move_section(&mut self, from: SectionKind, to: SectionKind) -> bool {
        match (self.position(from), self.position(to)) {
            (Some(from_idx), Some(to_idx)) => self.reorder(from_idx, to_idx),
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn from_kinds(kinds: Vec<SectionKind>) -> Self {
        SectionOrder(kinds)
    }
}
