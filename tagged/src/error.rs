use crate::{build::ConstructError, types::DeclarationError, value::CataError};
use std::{
    error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Cata(CataError),
    Construct(ConstructError),
    Declaration(DeclarationError),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Cata(error) => write!(formatter, "{}", error),
            Self::Construct(error) => write!(formatter, "{}", error),
            Self::Declaration(error) => write!(formatter, "{}", error),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Cata(error) => Some(error),
            Self::Construct(error) => Some(error),
            Self::Declaration(error) => Some(error),
        }
    }
}

impl From<CataError> for Error {
    fn from(error: CataError) -> Self {
        Self::Cata(error)
    }
}

impl From<ConstructError> for Error {
    fn from(error: ConstructError) -> Self {
        Self::Construct(error)
    }
}

impl From<DeclarationError> for Error {
    fn from(error: DeclarationError) -> Self {
        Self::Declaration(error)
    }
}
