//! The crate's one fallible entry point (spec.md §7).

/// Failure constructing a [`crate::CodePoint`] from a raw scalar value.
///
/// Nothing else in this crate is fallible: the UTF-16 decoder, the property
/// lookups, and the line-break scanner are total (spec.md §7).
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CodePointError {
    /// `n` is greater than `0x10FFFF`.
    #[error("scalar value {0:#x} is outside the Unicode range U+0000..=U+10FFFF")]
    OutOfRange(u32),
    /// `n` falls in the UTF-16 surrogate range, which is never a valid
    /// standalone scalar value.
    #[error("scalar value {0:#x} lies in the UTF-16 surrogate range U+D800..=U+DFFF")]
    Surrogate(u32),
}
