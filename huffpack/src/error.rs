use std::fmt;

/// Errors returned by [`encode`](crate::encode) and
/// [`decode`](crate::decode).
///
/// Encoding cannot fail on content -- every octet has a codeword -- so its
/// only error is an undersized output buffer. Decode errors are local to
/// the call; on error nothing useful is in the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The caller's output buffer cannot hold the result.
    OutputTooSmall,
    /// An input byte took a transition no codeword sequence allows.
    InvalidPrefix,
    /// The trailing padding contains a zero bit or would complete
    /// another symbol.
    InvalidPadding,
    /// The input ends with eight or more bits of an unfinished code:
    /// over-long padding, or a truncated codeword.
    InvalidEos,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputTooSmall => write!(f, "output buffer too small"),
            Self::InvalidPrefix => write!(f, "invalid Huffman code prefix"),
            Self::InvalidPadding => write!(f, "invalid Huffman padding"),
            Self::InvalidEos => write!(f, "missing or over-long Huffman padding"),
        }
    }
}

impl std::error::Error for Error {}
