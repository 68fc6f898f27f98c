/// The Game of Life transition for a single cell.
///
/// Fewer than two or more than three live neighbours kill the cell, exactly
/// three bring it to life whatever its current state, and exactly two keep
/// the current state.
#[inline]
pub fn next_state(current: bool, neighbors: u8) -> bool {
    if neighbors < 2 || neighbors > 3 {
        false
    } else if neighbors == 3 {
        true
    } else {
        current
    }
}
