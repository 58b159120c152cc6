use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeclarationError {
    DuplicateField(String),
    DuplicateVariant(String),
    InvalidName(String),
}

impl Display for DeclarationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::DuplicateField(name) => write!(formatter, "duplicate field name: {}", name),
            Self::DuplicateVariant(name) => write!(formatter, "duplicate variant name: {}", name),
            Self::InvalidName(name) => write!(formatter, "invalid name: {:?}", name),
        }
    }
}

impl Error for DeclarationError {}
