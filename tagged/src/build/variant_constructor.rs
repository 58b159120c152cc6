use super::{
    construct::{check_arity, Construct},
    error::ConstructError,
};
use crate::{
    types,
    value::{self, Value},
};

/// Builds values of one non-nullary variant of a sum type.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantConstructor {
    variant: types::Variant,
}

impl VariantConstructor {
    pub(crate) fn new(variant: types::Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> &types::Variant {
        &self.variant
    }

    pub fn arity(&self) -> usize {
        self.variant.arity()
    }

    pub fn is_instance(&self, value: &Value) -> bool {
        value
            .to_sum()
            .map(|sum| sum.is_variant(&self.variant))
            .unwrap_or_default()
    }
}

impl Construct for VariantConstructor {
    type Output = value::Sum;

    fn construct(&self, arguments: Vec<Value>) -> Result<value::Sum, ConstructError> {
        check_arity(self.arity(), &arguments)?;

        Ok(value::Sum::new(self.variant.clone(), arguments))
    }
}
