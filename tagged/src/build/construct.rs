use super::error::ConstructError;
use crate::value::Value;

/// A uniform entry point for building values from positional arguments.
pub trait Construct {
    type Output;

    fn construct(&self, arguments: Vec<Value>) -> Result<Self::Output, ConstructError>;
}

pub(crate) fn check_arity(expected: usize, arguments: &[Value]) -> Result<(), ConstructError> {
    if arguments.len() == expected {
        Ok(())
    } else {
        Err(ConstructError::ArityMismatch {
            expected,
            actual: arguments.len(),
        })
    }
}
