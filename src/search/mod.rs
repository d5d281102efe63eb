mod driver;
mod fifo;
mod state;

pub use driver::{solutions, Solutions};
pub use fifo::FifoSolutions;
pub use state::SearchState;

use std::collections::BTreeMap;

use crate::error::SolveError;

/// Same enumeration as [`solutions`], but walked breadth-first. Exposed
/// for property testing (P5): the set of yielded boards must match the
/// DFS driver's, though the order and the canonical-key ordering
/// guarantee do not carry over.
pub fn solutions_fifo(
    rows: i64,
    cols: i64,
    counts: &BTreeMap<char, i64>,
) -> Result<FifoSolutions, SolveError> {
    let (rows, cols, resolved) = driver::resolve_counts(rows, cols, counts)?;
    Ok(FifoSolutions::new(rows, cols, resolved))
}
