//! Generic stable reorder of an ordered collection.

use super::error::BuilderError;

/// Move the element at `source` to `dest`, preserving the relative order of
/// all other elements.
///
/// The destination index is evaluated after removal, matching standard list
/// splice semantics: `reorder(&[A, B, C], 0, 2)` yields `[B, C, A]`.
///
/// The input is never mutated; callers get a new list back so they can diff
/// or undo. Both indices must be within `[0, len - 1]` of the input list.
///
/// # Errors
///
/// Returns [`BuilderError::IndexOutOfBounds`] when either index is out of
/// range. Out-of-range indices are a caller bug and are never clamped.
pub fn reorder<T: Clone>(items: &[T], source: usize, dest: usize) -> Result<Vec<T>, BuilderError> {
    let len = items.len();
    for index in [source, dest] {
        if index >= len {
            return Err(BuilderError::IndexOutOfBounds { index, len });
        }
    }

    let mut result = items.to_vec();
    if source != dest {
        let moved = result.remove(source);
        result.insert(dest, moved);
    }
    Ok(result)
}
