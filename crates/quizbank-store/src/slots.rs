//! Slot helpers: dropping empty slots from a fixed-length array.

/// Copy the occupied slots into a new vector, keeping their relative order.
///
/// The result's length is exactly the number of occupied slots.
pub fn compact<T: Clone>(slots: &[Option<T>]) -> Vec<T> {
    let mut result = Vec::with_capacity(occupied(slots));
    result.extend(slots.iter().flatten().cloned());
    result
}

/// Count the occupied slots.
pub fn occupied<T>(slots: &[Option<T>]) -> usize {
    slots.iter().filter(|slot| slot.is_some()).count()
}
