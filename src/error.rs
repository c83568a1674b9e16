use thiserror::Error;

/// Failures produced while interpreting size strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
    /// The unit token matches no known denomination by prefix.
    #[error("unresolvable denomination: {0:?}")]
    UnresolvableDenomination(String),

    /// No "number + unit" expression exists anywhere in the input.
    #[error("no filesize pattern found in {0:?}")]
    NoFilesizePattern(String),
}
