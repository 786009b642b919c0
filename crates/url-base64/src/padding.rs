//! Padding policy for the encoder.

/// Whether the encoder emits trailing `=` padding.
///
/// Decoding accepts both forms regardless of the policy used to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaddingPolicy {
    /// Omit trailing `=` characters.
    #[default]
    Discard,
    /// Pad the output to a multiple of 4 characters.
    Preserve,
}
