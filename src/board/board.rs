use std::rc::Rc;

use num_bigint::BigUint;

use super::cell::Cell;
use super::piece::PieceKind;

/// A partial or complete placement: a finite mapping from cell to piece
/// kind, with at most one kind per cell.
///
/// Cheaply derivable from another `Board` via `Rc`-backed copy-on-write:
/// [`Board::with_placed`] clones the underlying cell list only when it
/// actually extends it, and a `Board` handed to a consumer is never
/// mutated afterwards — cloning the `Rc` is an O(1) refcount bump.
#[derive(Clone, Debug, Default)]
pub struct Board {
    // (cell, kind) pairs, insertion order. Small enough in practice (at
    // most R*C entries) that linear scan beats any indexed structure, and
    // insertion order gives `entries()` a stable, easy-to-test iteration.
    entries: Rc<Vec<(Cell, PieceKind)>>,
}

impl Board {
    pub fn empty() -> Self {
        Board::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.entries.iter().any(|(c, _)| *c == cell)
    }

    pub fn get(&self, cell: Cell) -> Option<PieceKind> {
        self.entries
            .iter()
            .find(|(c, _)| *c == cell)
            .map(|(_, k)| *k)
    }

    /// Returns a new board with `kind` placed at `cell`, leaving `self`
    /// untouched. Caller is responsible for ensuring `cell` is not already
    /// occupied and that the placement is legal — this is a data-structure
    /// operation, not a validity check.
    pub fn with_placed(&self, cell: Cell, kind: PieceKind) -> Board {
        let mut entries = (*self.entries).clone();
        entries.push((cell, kind));
        Board {
            entries: Rc::new(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Cell, PieceKind)> + '_ {
        self.entries.iter().copied()
    }

    /// Positional encoding used for uniqueness and ordering tests.
    ///
    /// `S = PieceKind::COUNT`; for each occupied `cell` with kind-id `k`,
    /// `cell_ord = rows*cols - cell.to_index(cols)` and
    /// `symbol_value = S - k`. The key is `sum(symbol_value * (S+1)^cell_ord)`,
    /// a base-`(S+1)` positional encoding that is strictly decreasing along
    /// the canonical DFS enumeration order. Arbitrary precision: `(S+1)^cell_ord`
    /// overflows a fixed-width integer well within the board sizes this crate
    /// is exercised against (a 7x7 board already exceeds `u128`), so the key
    /// is a `BigUint` rather than a machine word.
    pub fn canonical_key(&self, rows: u32, cols: u32) -> BigUint {
        let s = PieceKind::COUNT as u64;
        let base = BigUint::from(s + 1);
        let total = (rows * cols) as u64;
        self.entries()
            .map(|(cell, kind)| {
                let cell_ord = total - cell.to_index(cols) as u64;
                let symbol_value = s - kind.to_index() as u64;
                BigUint::from(symbol_value) * pow_big(&base, cell_ord)
            })
            .sum()
    }
}

/// Exponentiation by squaring; `num-bigint`'s own `Pow` impl requires
/// pulling in `num-traits` just for the trait, so this stays self-contained.
fn pow_big(base: &BigUint, mut exp: u64) -> BigUint {
    let mut result = BigUint::from(1u32);
    let mut base = base.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result = &result * &base;
        }
        base = &base * &base;
        exp >>= 1;
    }
    result
}
