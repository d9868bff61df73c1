//! Error types for the template builder core.

/// Caller-contract violations raised by the builder core.
///
/// These are loud by design: they indicate a bug in the calling code, not a
/// recoverable user condition. Recoverable conditions (missing template name,
/// missing section title) are surfaced through `can_save` / `can_commit`
/// instead of being returned as errors.
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    #[error("No section draft is open for '{0}'")]
    DraftClosed(&'static str),

    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Visualization width {0} outside the 1-12 grid column scale")]
    InvalidWidth(u16),
}
