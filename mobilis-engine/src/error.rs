/// Broad class of a calculation failure. The HTTP boundary treats both as
/// client errors; the distinction is kept for callers that care whether an
/// input was malformed or simply absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    MissingMeasurement,
}

/// Input failures of the calculators. Messages are the user-facing Bulgarian
/// texts and are surfaced verbatim by the API.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Невалиден пол")]
    InvalidGender(String),
    #[error("Невалидно ниво на активност")]
    InvalidActivityLevel(String),
    #[error("Необходим е обем на таза за изчисляване на телесни мазнини при жени")]
    MissingHipMeasurement,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidGender(_) | Error::InvalidActivityLevel(_) => ErrorKind::InvalidArgument,
            Error::MissingHipMeasurement => ErrorKind::MissingMeasurement,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
