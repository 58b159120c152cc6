use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CataError {
    MissingCase(String),
}

impl Display for CataError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::MissingCase(name) => write!(formatter, "missing case for variant: {}", name),
        }
    }
}

impl Error for CataError {}
