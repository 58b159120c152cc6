use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConstructError {
    ArityMismatch { expected: usize, actual: usize },
    InvalidInvocation,
    UnknownVariant(String),
}

impl Display for ConstructError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::ArityMismatch { expected, actual } => write!(
                formatter,
                "expected {} arguments, got {}",
                expected, actual
            ),
            Self::InvalidInvocation => write!(
                formatter,
                "sum type constructed directly instead of one of its variants"
            ),
            Self::UnknownVariant(name) => write!(formatter, "unknown variant: {}", name),
        }
    }
}

impl Error for ConstructError {}
