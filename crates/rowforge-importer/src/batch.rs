//! Row-tuple batch assembly.

use rowforge_generator::Formatter;

/// Build one batch of `size` row-tuple literals.
///
/// Every column slot is evaluated exactly once per row, in slot order.
/// Slot order is fixed when the columns are prepared, so it always
/// matches the column list used for the insert header.
pub fn build_batch(size: usize, slots: &mut [Formatter]) -> Vec<String> {
    let mut rows = Vec::with_capacity(size);
    for _ in 0..size {
        let values: Vec<String> = slots.iter_mut().map(|slot| slot.next_literal()).collect();
        rows.push(format!("({})", values.join(",")));
    }
    rows
}
