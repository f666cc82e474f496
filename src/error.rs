/// Errors returned by [`Seq::unmarshal`](crate::Seq::unmarshal).
///
/// Keyspace exhaustion is deliberately *not* a variant here: per the scheme's
/// host-observable error behavior it is a fatal, non-recoverable condition and is
/// signalled as a panic (see [`crate::Seq::next`], [`crate::Seq::seek`],
/// [`crate::Seq::superseek`]), not as a `Result::Err`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The decoded `version` field did not match the single supported constant.
    #[error("unknown serialization version: {0:?}")]
    UnknownVersion(String),
    /// The payload was not valid JSON, was missing or carried unexpected fields,
    /// or a node key's decoded length did not match the declared `size`.
    #[error("malformed serialized payload: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err.to_string())
    }
}
