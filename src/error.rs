use ark_ec::hashing::HashToCurveError;
use ark_serialize::SerializationError;

/// Failures of the proof engine. Rejection of a proof is not an error; `verify` reports it as
/// `Ok(false)`.
#[derive(Debug)]
pub enum Error {
    /// Malformed point or scalar encoding, rejected before any arithmetic
    InvalidEncoding(SerializationError),
    /// The curve backend could not derive a generator. Not recoverable by retrying
    GeneratorDerivation(HashToCurveError),
}

impl From<SerializationError> for Error {
    fn from(e: SerializationError) -> Self {
        Self::InvalidEncoding(e)
    }
}

impl From<HashToCurveError> for Error {
    fn from(e: HashToCurveError) -> Self {
        Self::GeneratorDerivation(e)
    }
}
