/// What transcoding does when it meets a malformed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidPolicy {
    /// Substitute [`REPLACEMENT_CHARACTER`](crate::REPLACEMENT_CHARACTER) for
    /// each malformed unit and carry on.
    #[default]
    Replace,
    /// Stop at the first malformed unit and report its offset.
    Reject,
}

/// Configuration for the [`convert`](crate::convert) functions.
///
/// Iteration and the search algorithms are not configurable: they always
/// decode malformed input as the replacement character.
///
/// # Examples
///
/// ```rust
/// use unitext::{InvalidPolicy, TranscodeOptions, convert};
///
/// let strict = TranscodeOptions {
///     invalid: InvalidPolicy::Reject,
/// };
/// assert!(convert::recode_with::<u8, u16>(b"ok\xff", strict).is_err());
/// ```
///
/// # Default
///
/// Malformed input is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranscodeOptions {
    /// How malformed input is handled.
    ///
    /// # Default
    ///
    /// [`InvalidPolicy::Replace`]
    pub invalid: InvalidPolicy,
}
