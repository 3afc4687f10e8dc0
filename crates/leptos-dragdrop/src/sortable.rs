//! Sortable/droppable helpers.

/// Attribute marking an element as a drop target; its value is the target id
pub const DND_ID_ATTR: &str = "data-dnd-id";

/// Move one element from `from` to `to`, shifting the others.
/// Relative order of all other elements is preserved. Out-of-range
/// indices leave the slice untouched.
pub fn array_move<T>(items: &mut [T], from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
}
